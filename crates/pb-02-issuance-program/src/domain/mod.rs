//! # Domain Module
//!
//! Core domain types for issuance program assembly.

pub mod errors;
pub mod template;
pub mod value_objects;

pub use errors::*;
pub use template::*;
pub use value_objects::*;
