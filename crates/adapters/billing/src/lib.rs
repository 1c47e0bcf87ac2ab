//! Billing 适配器
//!
//! 通过 gRPC 调用外部计费服务，提供：
//! - 创建计费账户（`BillingService/CreatePatientAccount`）
//!
//! 适配器只做转发：不重试、不降级、不解释响应内容，
//! 失败原样传播给调用方。

mod client;
mod error;

pub use client::BillingClient;
pub use error::BillingError;

/// `billing.proto` 生成代码
pub mod proto {
    tonic::include_proto!("pm.billing.v1");
}

pub use proto::{BillingRequest, BillingResponse};

use async_trait::async_trait;

/// 计费账户接口
#[async_trait]
pub trait BillingAccounts: Send + Sync {
    /// 为病人创建计费账户
    ///
    /// 三个字段原样写入 wire 请求，本层不做校验。
    async fn create_billing_account(
        &self,
        patient_id: &str,
        name: &str,
        email: &str,
    ) -> Result<BillingResponse, BillingError>;
}
