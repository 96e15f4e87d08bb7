//! # Submission Classification
//!
//! Tri-state view of a submission outcome. The ledger's own validation and
//! the network layer report failures through different channels, so a
//! boolean is not enough.
//!
//! | Outcome | Signal | Typical caller reaction |
//! |---------|--------|-------------------------|
//! | `Success` | confirmation record | done |
//! | `Rejected` | structured result code | rebuild (e.g. fresh sequence) |
//! | `Indeterminate` | no code recovered | check ledger, maybe resubmit |
//!
//! Retry policy belongs to the caller.

use super::errors::SubmitterError;
use super::horizon::{TransactionResultCodes, TransactionSuccess};
use serde::{Deserialize, Serialize};

/// Result detail recovered from a failed submission.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionDiagnostics {
    /// Structured result codes.
    pub result_codes: Option<TransactionResultCodes>,
    /// Result XDR string.
    pub result_string: Option<String>,
}

/// Failure class of a submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureClass {
    /// Ledger validated and rejected the transaction.
    LedgerRejected,
    /// No definitive answer; likely transport-level.
    Indeterminate,
}

/// Classified submission outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionResult {
    /// Transaction confirmed.
    Success(TransactionSuccess),
    /// Ledger rejected the transaction with a result code.
    Rejected {
        /// Structured result codes.
        result_codes: TransactionResultCodes,
        /// Result XDR string, if recovered.
        result_string: Option<String>,
    },
    /// Transport failure without a result code.
    Indeterminate {
        /// Result XDR string, if recovered.
        result_string: Option<String>,
    },
}

impl SubmissionResult {
    /// Failure class, `None` on success.
    pub fn failure_class(&self) -> Option<FailureClass> {
        match self {
            Self::Success(_) => None,
            Self::Rejected { .. } => Some(FailureClass::LedgerRejected),
            Self::Indeterminate { .. } => Some(FailureClass::Indeterminate),
        }
    }
}

impl TryFrom<Result<TransactionSuccess, SubmitterError>> for SubmissionResult {
    /// Local (signing / serialization) errors are not submission outcomes
    /// and are handed back unchanged.
    type Error = SubmitterError;

    fn try_from(result: Result<TransactionSuccess, SubmitterError>) -> Result<Self, Self::Error> {
        match result {
            Ok(success) => Ok(Self::Success(success)),
            Err(SubmitterError::Submission(failure)) => {
                let SubmissionDiagnostics {
                    result_codes,
                    result_string,
                } = failure.diagnostics;
                Ok(match result_codes {
                    Some(result_codes) => Self::Rejected {
                        result_codes,
                        result_string,
                    },
                    None => Self::Indeterminate { result_string },
                })
            }
            Err(local) => Err(local),
        }
    }
}
