//! Domain layer for ledger submission.

pub mod classification;
pub mod envelope;
pub mod errors;
pub mod horizon;
pub mod secret_seed;

pub use classification::{FailureClass, SubmissionDiagnostics, SubmissionResult};
pub use envelope::{
    DecoratedSignature, TransactionEnvelope, ENVELOPE_TYPE_TX, MAX_SIGNATURES,
    PUBLIC_NETWORK_PASSPHRASE, SIGNATURE_LEN, TEST_NETWORK_PASSPHRASE,
};
pub use errors::{
    LedgerError, ProblemError, SerializationError, SigningError, SubmissionFailure,
    SubmitterError,
};
pub use horizon::{HorizonProblem, TransactionResultCodes, TransactionSuccess};
pub use secret_seed::SecretSeed;
