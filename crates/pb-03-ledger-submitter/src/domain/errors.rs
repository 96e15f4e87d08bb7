//! # Domain Errors
//!
//! Error taxonomy for ledger submission.
//!
//! | Error | Origin | Retryable as-is |
//! |-------|--------|-----------------|
//! | `SigningError` | bad seed, missing network | no |
//! | `SerializationError` | envelope cannot be encoded | no (defect) |
//! | `SubmissionFailure` | ledger or transport | caller decides from `class()` |

use super::classification::{FailureClass, SubmissionDiagnostics};
use super::horizon::{HorizonProblem, TransactionSuccess};
use thiserror::Error;

/// Local signing failure. No network call has been made.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SigningError {
    /// Seed is not a valid secret seed strkey.
    #[error("seed #{index} is not a valid secret seed")]
    InvalidSeed {
        /// Position in the seed list
        index: usize,
    },

    /// Envelope has no network passphrase to sign under.
    #[error("envelope has no network passphrase")]
    MissingNetworkPassphrase,
}

/// Envelope encoding failure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SerializationError {
    /// Transaction body is empty.
    #[error("transaction body is empty")]
    EmptyTransaction,

    /// Transaction body is not XDR aligned.
    #[error("transaction body length {len} is not a multiple of 4")]
    Misaligned {
        /// Body length
        len: usize,
    },

    /// Envelope carries more signatures than the ledger accepts.
    #[error("envelope has {count} signatures, at most {max} allowed")]
    TooManySignatures {
        /// Signatures present
        count: usize,
        /// Ledger limit
        max: usize,
    },
}

/// Error reported by the ledger client.
#[derive(Clone, Debug, Error)]
pub enum LedgerError {
    /// Ledger returned a problem document.
    #[error("horizon error: {0}")]
    Problem(Box<HorizonProblem>),

    /// Request deadline elapsed.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// Connection or protocol failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// Response body could not be decoded.
    #[error("undecodable response (status {status}): {reason}")]
    Decode {
        /// HTTP status
        status: u16,
        /// Decoder message
        reason: String,
    },
}

impl LedgerError {
    /// The problem document, if the ledger sent one.
    pub fn problem(&self) -> Option<&HorizonProblem> {
        match self {
            Self::Problem(problem) => Some(&**problem),
            _ => None,
        }
    }
}

/// Errors from the problem document's `extras`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ProblemError {
    /// No `extras` object.
    #[error("problem has no extras")]
    MissingExtras,

    /// `extras` present but lacks the field.
    #[error("problem extras have no `{0}`")]
    MissingField(&'static str),

    /// Field present but malformed.
    #[error("problem extras `{field}` is malformed: {reason}")]
    Malformed {
        /// Field name
        field: &'static str,
        /// Decoder message
        reason: String,
    },
}

/// A submission the ledger or transport did not confirm.
///
/// Carries the original client error unchanged, the partial response and
/// whatever result detail could be recovered.
#[derive(Debug, Error)]
#[error("submitting tx: {error}")]
pub struct SubmissionFailure {
    /// Error as reported by the client.
    #[source]
    pub error: LedgerError,
    /// Response fields that came back despite the error.
    pub response: TransactionSuccess,
    /// Recovered result codes and result string.
    pub diagnostics: SubmissionDiagnostics,
    /// Base64 envelope that was submitted.
    pub envelope_xdr: String,
}

impl SubmissionFailure {
    /// Ledger-rejected when a structured result code was recovered,
    /// indeterminate otherwise.
    pub fn class(&self) -> FailureClass {
        if self.diagnostics.result_codes.is_some() {
            FailureClass::LedgerRejected
        } else {
            FailureClass::Indeterminate
        }
    }
}

/// Errors from `sign_and_submit`.
#[derive(Debug, Error)]
pub enum SubmitterError {
    /// Signing failed before any network call.
    #[error("signing tx: {0}")]
    Signing(#[from] SigningError),

    /// Envelope could not be encoded.
    #[error("marshaling tx envelope: {0}")]
    Serialization(#[from] SerializationError),

    /// Ledger or transport did not confirm the transaction.
    #[error(transparent)]
    Submission(Box<SubmissionFailure>),
}

impl SubmitterError {
    /// Submission details, when the failure happened on the network side.
    pub fn submission(&self) -> Option<&SubmissionFailure> {
        match self {
            Self::Submission(failure) => Some(&**failure),
            _ => None,
        }
    }

    /// Original client error, when the failure happened on the network side.
    pub fn ledger_error(&self) -> Option<&LedgerError> {
        self.submission().map(|failure| &failure.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signing_error_names_seed() {
        let err = SigningError::InvalidSeed { index: 2 };
        assert!(err.to_string().contains("#2"));
    }

    #[test]
    fn test_too_many_signatures_error() {
        let err = SerializationError::TooManySignatures { count: 21, max: 20 };
        assert!(err.to_string().contains("21"));
    }

    #[test]
    fn test_submitter_error_wraps_signing() {
        let err: SubmitterError = SigningError::MissingNetworkPassphrase.into();
        assert!(err.to_string().starts_with("signing tx"));
        assert!(err.submission().is_none());
    }

    #[test]
    fn test_submission_failure_keeps_original_error() {
        let failure = SubmissionFailure {
            error: LedgerError::Timeout("deadline".to_string()),
            response: TransactionSuccess::default(),
            diagnostics: SubmissionDiagnostics::default(),
            envelope_xdr: String::new(),
        };
        let err = SubmitterError::Submission(Box::new(failure));
        assert!(matches!(err.ledger_error(), Some(LedgerError::Timeout(_))));
        assert_eq!(err.to_string(), "submitting tx: request timed out: deadline");
    }

    #[test]
    fn test_problem_accessor() {
        let err = LedgerError::Problem(Box::default());
        assert!(err.problem().is_some());
        assert!(LedgerError::Transport("reset".into()).problem().is_none());
    }
}
