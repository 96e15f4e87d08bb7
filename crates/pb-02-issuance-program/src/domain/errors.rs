//! # Domain Errors
//!
//! Error types for issuance program assembly.

use pb_01_txvm_assembler::AsmError;
use thiserror::Error;

/// Ed25519 public key embedded in the signature-check sub-contract.
pub type PublicKey = [u8; 32];

/// Issuance program assembly errors.
///
/// Both variants are template defects. A valid 32-byte key can never cause
/// either of them, so callers treat them as startup-time configuration
/// faults rather than retryable conditions.
#[derive(Debug, Error)]
pub enum AssemblyError {
    /// Template does not contain exactly one key placeholder.
    #[error("template must contain exactly one `<pubkey>` placeholder, found {found}")]
    Placeholder {
        /// Placeholders present
        found: usize,
    },

    /// Instantiated template failed to assemble.
    #[error("issuance program does not assemble: {0}")]
    Asm(#[from] AsmError),
}
