//! # Algorithms Module
//!
//! Program compilation and contract seed derivation.

pub mod compile;
pub mod seed;

pub use compile::compile_issuance_program;
pub use seed::{contract_seed, vm_hash};
