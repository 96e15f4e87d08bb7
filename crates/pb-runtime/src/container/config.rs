//! # Bridge Configuration
//!
//! Runtime parameters read from the environment.
//!
//! ## Security Requirements
//!
//! - `custodian_pubkey` MUST NOT be the default zero value
//! - `network_passphrase` MUST NOT be empty, signatures are bound to it

use pb_03_ledger_submitter::config::{
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_HORIZON_URL, DEFAULT_REQUEST_TIMEOUT_SECS,
};
use pb_03_ledger_submitter::{SubmitterConfig, TEST_NETWORK_PASSPHRASE};
use std::env;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Complete bridge configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Ledger API base URL.
    pub horizon_url: String,
    /// Network passphrase.
    pub network_passphrase: String,
    /// Request deadline in seconds.
    pub request_timeout_secs: u64,
    /// Key embedded in the issuance program.
    pub custodian_pubkey: [u8; 32],
    /// Log filter (trace, debug, info, warn, error or an EnvFilter directive).
    pub log_level: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            horizon_url: DEFAULT_HORIZON_URL.to_string(),
            network_passphrase: TEST_NETWORK_PASSPHRASE.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            custodian_pubkey: [0u8; 32],
            log_level: "info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Custodian key not set.
    #[error("custodian public key is the zero value; set PB_CUSTODIAN_PUBKEY (64 hex chars)")]
    MissingCustodianKey,

    /// Network passphrase empty.
    #[error("network passphrase is empty; set PB_NETWORK_PASSPHRASE")]
    EmptyNetworkPassphrase,

    /// Request timeout of zero.
    #[error("request timeout must be positive")]
    ZeroTimeout,
}

impl BridgeConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `PB_HORIZON_URL`: Ledger API (default: testnet Horizon)
    /// - `PB_NETWORK_PASSPHRASE`: Network passphrase (default: testnet)
    /// - `PB_REQUEST_TIMEOUT_SECS`: Request deadline (default: 30)
    /// - `PB_CUSTODIAN_PUBKEY`: 32-byte key as 64 hex chars (no default)
    /// - `PB_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Unparseable values are
    /// logged and the default kept.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("PB_HORIZON_URL") {
            config.horizon_url = url;
        }
        if let Some(passphrase) = lookup("PB_NETWORK_PASSPHRASE") {
            config.network_passphrase = passphrase;
        }
        if let Some(secs) = lookup("PB_REQUEST_TIMEOUT_SECS") {
            match secs.trim().parse() {
                Ok(secs) => config.request_timeout_secs = secs,
                Err(_) => warn!("PB_REQUEST_TIMEOUT_SECS must be an integer, got {:?}", secs),
            }
        }
        if let Some(key_hex) = lookup("PB_CUSTODIAN_PUBKEY") {
            match hex::decode(key_hex.trim()) {
                Ok(bytes) if bytes.len() == 32 => config.custodian_pubkey.copy_from_slice(&bytes),
                _ => warn!("PB_CUSTODIAN_PUBKEY must be 32 bytes (64 hex chars)"),
            }
        }
        config.log_level = lookup("PB_LOG_LEVEL")
            .or_else(|| lookup("RUST_LOG"))
            .unwrap_or(config.log_level);

        config
    }

    /// Validate configuration before wiring anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.custodian_pubkey == [0u8; 32] {
            return Err(ConfigError::MissingCustodianKey);
        }
        if self.network_passphrase.trim().is_empty() {
            return Err(ConfigError::EmptyNetworkPassphrase);
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    /// Submitter settings derived from this config.
    pub fn submitter_config(&self) -> SubmitterConfig {
        let request_timeout = Duration::from_secs(self.request_timeout_secs);
        SubmitterConfig {
            horizon_url: self.horizon_url.clone(),
            network_passphrase: self.network_passphrase.clone(),
            request_timeout,
            connect_timeout: request_timeout.min(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS)),
        }
    }
}
