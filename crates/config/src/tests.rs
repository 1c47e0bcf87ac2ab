use crate::{AppConfig, BillingServiceConfig};
use figment::{
    providers::{Format, Toml},
    Figment,
};

#[test]
fn test_billing_defaults() {
    let config: AppConfig = Figment::new()
        .merge(Toml::string(
            r#"
            app_name = "patient-service"
            app_env = "development"
            "#,
        ))
        .extract()
        .unwrap();

    assert_eq!(config.billing.address, "localhost");
    assert_eq!(config.billing.port, 9001);
    assert_eq!(config.telemetry.log_level, "info");
    assert!(config.is_development());
}

#[test]
fn test_billing_overrides() {
    let config: AppConfig = Figment::new()
        .merge(Toml::string(
            r#"
            app_name = "patient-service"
            app_env = "production"

            [billing]
            address = "billing.internal"
            port = 19001

            [telemetry]
            log_level = "warn"
            "#,
        ))
        .extract()
        .unwrap();

    assert_eq!(config.billing.address, "billing.internal");
    assert_eq!(config.billing.port, 19001);
    assert_eq!(config.telemetry.log_level, "warn");
    assert!(config.is_production());
}

#[test]
fn test_endpoint_rendering() {
    let config = BillingServiceConfig {
        address: "10.0.0.7".to_string(),
        port: 9001,
    };
    assert_eq!(config.endpoint(), "http://10.0.0.7:9001");
}

#[test]
fn test_default_struct_matches_original_properties() {
    let config = BillingServiceConfig::default();
    assert_eq!(config.endpoint(), "http://localhost:9001");
}
