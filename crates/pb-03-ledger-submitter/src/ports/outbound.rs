//! # Outbound Ports
//!
//! Ledger client the submitter depends on.

use crate::domain::envelope::ENVELOPE_TYPE_TX;
use crate::domain::errors::LedgerError;
use crate::domain::horizon::{HorizonProblem, TransactionSuccess};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use parking_lot::Mutex;
use serde_json::json;

/// A failed submission together with whatever response fields came back.
#[derive(Clone, Debug)]
pub struct PartialSubmission {
    /// Error as reported by the client.
    pub error: LedgerError,
    /// Possibly empty response record.
    pub response: TransactionSuccess,
}

impl From<LedgerError> for PartialSubmission {
    fn from(error: LedgerError) -> Self {
        Self {
            error,
            response: TransactionSuccess::default(),
        }
    }
}

/// Ledger client - outbound port.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Submit a base64 XDR envelope.
    async fn submit_transaction(
        &self,
        envelope_xdr: &str,
    ) -> Result<TransactionSuccess, PartialSubmission>;
}

#[async_trait]
impl<T: LedgerClient + ?Sized> LedgerClient for std::sync::Arc<T> {
    async fn submit_transaction(
        &self,
        envelope_xdr: &str,
    ) -> Result<TransactionSuccess, PartialSubmission> {
        (**self).submit_transaction(envelope_xdr).await
    }
}

// =============================================================================
// Mock Implementation for Testing
// =============================================================================

/// Result XDR of a successful transaction (fee 100, no operations).
pub const MOCK_SUCCESS_RESULT_XDR: &str = "AAAAAAAAAGQAAAAAAAAAAAAAAAA=";

/// Result XDR of a `tx_bad_auth` rejection (fee 100).
pub const MOCK_BAD_AUTH_RESULT_XDR: &str = "AAAAAAAAAGT////6AAAAAA==";

/// How the mock answers.
#[derive(Clone, Debug)]
pub enum MockBehavior {
    /// Confirm every envelope.
    Accept,
    /// Reject with `tx_bad_auth` unless the envelope for `tx_body` carries
    /// at least `required` signatures.
    RequireSignatures {
        /// Transaction body the envelopes are expected to wrap.
        tx_body: Vec<u8>,
        /// Minimum signature count.
        required: u32,
    },
    /// Fail every submission.
    Fail {
        /// Error to return.
        error: LedgerError,
        /// Partial response to return alongside.
        response: TransactionSuccess,
    },
}

/// Mock ledger client for testing. Records every submitted envelope.
pub struct MockLedgerClient {
    behavior: MockBehavior,
    submitted: Mutex<Vec<String>>,
}

impl Default for MockLedgerClient {
    fn default() -> Self {
        Self::new(MockBehavior::Accept)
    }
}

impl MockLedgerClient {
    /// Create a mock with the given behavior.
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            submitted: Mutex::new(Vec::new()),
        }
    }

    /// Envelopes submitted so far.
    pub fn submitted(&self) -> Vec<String> {
        self.submitted.lock().clone()
    }

    fn confirm(&self, envelope_xdr: &str, ledger: u64) -> TransactionSuccess {
        TransactionSuccess {
            hash: format!("{:064x}", ledger),
            ledger,
            envelope: envelope_xdr.to_string(),
            result: MOCK_SUCCESS_RESULT_XDR.to_string(),
            meta: String::new(),
        }
    }
}

fn bad_auth_problem(envelope_xdr: &str) -> LedgerError {
    LedgerError::Problem(Box::new(HorizonProblem {
        problem_type: "https://stellar.org/horizon-errors/transaction_failed".to_string(),
        title: "Transaction Failed".to_string(),
        status: 400,
        detail: "The transaction failed when submitted to the stellar network.".to_string(),
        extras: Some(json!({
            "envelope_xdr": envelope_xdr,
            "result_xdr": MOCK_BAD_AUTH_RESULT_XDR,
            "result_codes": {"transaction": "tx_bad_auth"}
        })),
    }))
}

fn malformed_envelope(reason: &str) -> LedgerError {
    LedgerError::Problem(Box::new(HorizonProblem {
        title: "Transaction Malformed".to_string(),
        status: 400,
        detail: reason.to_string(),
        ..Default::default()
    }))
}

/// Signature count of an envelope wrapping `tx_body`.
fn signature_count(envelope_xdr: &str, tx_body: &[u8]) -> Option<u32> {
    let xdr = BASE64.decode(envelope_xdr).ok()?;
    let rest = xdr.strip_prefix(&ENVELOPE_TYPE_TX.to_be_bytes()[..])?;
    let rest = rest.strip_prefix(tx_body)?;
    let count: [u8; 4] = rest.get(..4)?.try_into().ok()?;
    Some(u32::from_be_bytes(count))
}

#[async_trait]
impl LedgerClient for MockLedgerClient {
    async fn submit_transaction(
        &self,
        envelope_xdr: &str,
    ) -> Result<TransactionSuccess, PartialSubmission> {
        let ledger = {
            let mut submitted = self.submitted.lock();
            submitted.push(envelope_xdr.to_string());
            submitted.len() as u64
        };

        match &self.behavior {
            MockBehavior::Accept => Ok(self.confirm(envelope_xdr, ledger)),
            MockBehavior::RequireSignatures { tx_body, required } => {
                match signature_count(envelope_xdr, tx_body) {
                    None => Err(malformed_envelope("envelope does not wrap the expected tx").into()),
                    Some(count) if count < *required => Err(bad_auth_problem(envelope_xdr).into()),
                    Some(_) => Ok(self.confirm(envelope_xdr, ledger)),
                }
            }
            MockBehavior::Fail { error, response } => Err(PartialSubmission {
                error: error.clone(),
                response: response.clone(),
            }),
        }
    }
}
