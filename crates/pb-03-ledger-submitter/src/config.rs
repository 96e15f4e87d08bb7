//! Submitter configuration.

use crate::domain::envelope::TEST_NETWORK_PASSPHRASE;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default ledger API endpoint.
pub const DEFAULT_HORIZON_URL: &str = "https://horizon-testnet.stellar.org";

/// Default request deadline, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default connect deadline, in seconds.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Ledger submitter configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitterConfig {
    /// Ledger API base URL.
    pub horizon_url: String,
    /// Network passphrase envelopes are signed under.
    pub network_passphrase: String,
    /// Whole-request deadline.
    pub request_timeout: Duration,
    /// Connect deadline.
    pub connect_timeout: Duration,
}

impl Default for SubmitterConfig {
    fn default() -> Self {
        Self {
            horizon_url: DEFAULT_HORIZON_URL.to_string(),
            network_passphrase: TEST_NETWORK_PASSPHRASE.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

impl SubmitterConfig {
    /// Config for a given endpoint, defaults elsewhere.
    pub fn with_url(horizon_url: impl Into<String>) -> Self {
        Self {
            horizon_url: horizon_url.into(),
            ..Default::default()
        }
    }

    /// `POST` target for transaction submission.
    pub fn transactions_url(&self) -> String {
        format!("{}/transactions", self.horizon_url.trim_end_matches('/'))
    }
}
