//! Peg-bridge runtime entry point.
//!
//! Builds the issuance program for the configured custodian key, wires the
//! ledger submitter, and prints the program record as JSON.

use anyhow::{Context, Result};
use pb_runtime::{BridgeConfig, BridgeContainer};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    let config = BridgeConfig::from_env();

    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("===========================================");
    info!("  Peg-Bridge Runtime v{}", env!("CARGO_PKG_VERSION"));
    info!("===========================================");

    let container = BridgeContainer::new(config).context("wiring bridge")?;

    let issuance = container.issuance();
    info!(
        "[pb-runtime] Custodian key: {}",
        hex::encode(issuance.public_key())
    );
    info!("[pb-runtime] Issuance program seed: {}", issuance.seed());
    info!(
        "[pb-runtime] Submitting to {} ({})",
        container.config().horizon_url,
        container.submitter().network_passphrase()
    );
    debug!(
        "[pb-runtime] Issuance program bytecode: {}",
        hex::encode(issuance.program().as_bytes())
    );

    println!(
        "{}",
        serde_json::to_string_pretty(&*issuance).context("encoding issuance program")?
    );

    Ok(())
}
