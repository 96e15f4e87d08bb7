//! # PB-02 Issuance Program
//!
//! Peg-in issuance contract: a TxVM template with one public-key
//! placeholder, compiled into bytecode whose issued value is spendable only
//! with a signature by that key.
//!
//! **Subsystem ID:** 02  
//! **Depends on:** PB-01 (assembler)  
//! **Architecture:** DDD (domain / algorithms / service)
//!
//! ## Invariants
//!
//! | Invariant | Enforcement |
//! |-----------|-------------|
//! | One key placeholder | `IssuanceTemplate::new` |
//! | Same template + key = same bytes | pure assembler, no state |
//! | Seed fixed after build | `IssuanceProgram` has no mutators |
//!
//! ## Module Structure
//!
//! ```text
//! pb-02-issuance-program/
//! ├── domain/          # Template, CompiledProgram, ProgramSeed, errors
//! ├── algorithms/      # compile_issuance_program, contract_seed
//! └── service.rs       # IssuanceProgram (built once)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithms;
pub mod domain;
pub mod service;

// Re-exports
pub use algorithms::{compile_issuance_program, contract_seed, vm_hash};
pub use domain::{
    AssemblyError, CompiledProgram, IssuanceTemplate, ProgramSeed, PublicKey,
    ISSUANCE_PROGRAM_TEMPLATE, PUBKEY_PLACEHOLDER,
};
pub use service::IssuanceProgram;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
