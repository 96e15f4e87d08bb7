//! # PB-03 Ledger Submitter
//!
//! Signs federated-ledger transactions, submits them and classifies the
//! outcome.
//!
//! **Subsystem ID:** 03
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Outcome Classification
//!
//! | Outcome | Meaning |
//! |---------|---------|
//! | Success | confirmation record returned |
//! | Rejected | ledger returned a structured result code |
//! | Indeterminate | transport failure, no result code recovered |
//!
//! ## Result Extraction
//!
//! On failure the submitter logs the error and the submitted envelope, then
//! tries each source in turn:
//!
//! 1. result codes from the problem document
//! 2. result string from the problem document
//! 3. result string from the partial response, if step 2 found none
//!
//! A failing step is logged and skipped. The original client error is
//! returned unchanged inside `SubmissionFailure`.
//!
//! ## Module Structure
//!
//! ```text
//! pb-03-ledger-submitter/
//! ├── domain/          # Envelope, SecretSeed, Horizon documents, errors
//! ├── algorithms/      # Signing, result extraction
//! ├── ports/           # SubmitterApi, LedgerClient (+ mock)
//! ├── adapters/        # HorizonClient (HTTP)
//! ├── config.rs        # SubmitterConfig
//! └── service.rs       # TransactionSubmitter
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::HorizonClient;
pub use algorithms::{extract_diagnostics, sign_envelope};
pub use config::SubmitterConfig;
pub use domain::{
    DecoratedSignature, FailureClass, HorizonProblem, LedgerError, ProblemError, SecretSeed,
    SerializationError, SigningError, SubmissionDiagnostics, SubmissionFailure, SubmissionResult,
    SubmitterError, TransactionEnvelope, TransactionResultCodes, TransactionSuccess,
    MAX_SIGNATURES, PUBLIC_NETWORK_PASSPHRASE, TEST_NETWORK_PASSPHRASE,
};
pub use ports::{LedgerClient, MockBehavior, MockLedgerClient, PartialSubmission, SubmitterApi};
pub use service::TransactionSubmitter;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    #[test]
    #[allow(clippy::const_is_empty)]
    fn test_version() {
        assert!(!super::VERSION.is_empty());
    }
}
