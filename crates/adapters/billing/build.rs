fn main() {
    let out_dir = std::path::PathBuf::from(std::env::var("OUT_DIR").unwrap());

    // 编译 billing.proto（客户端 + 集成测试用的服务端桩）
    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .out_dir(&out_dir)
        .compile_protos(
            &["../../../proto/billing/v1/billing.proto"],
            &["../../../proto"],
        )
        .expect("Failed to compile billing.proto");

    println!("cargo:rerun-if-changed=../../../proto/billing/v1/billing.proto");
}
