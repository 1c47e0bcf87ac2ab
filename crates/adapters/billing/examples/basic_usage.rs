//! Basic usage example for pm-adapter-billing
//!
//! Run with:
//! ```bash
//! export BILLING_ADDRESS=localhost
//! export BILLING_PORT=9001
//! cargo run -p pm-adapter-billing --example basic_usage
//! ```

use pm_adapter_billing::{BillingAccounts, BillingClient};
use pm_config::AppConfig;
use pm_telemetry::{init_tracing, init_tracing_json};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load("config")?;

    if config.is_production() {
        init_tracing_json(&config.telemetry);
    } else {
        init_tracing(&config.telemetry);
    }

    let client = BillingClient::connect(config.billing)?;

    let response = client
        .create_billing_account("patient-123", "Jane Doe", "jane@example.com")
        .await?;

    info!(
        account_id = %response.account_id,
        status = %response.status,
        "Billing account created"
    );

    Ok(())
}
