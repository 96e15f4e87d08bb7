//! # Issuance Program Compilation

use crate::domain::{AssemblyError, CompiledProgram, IssuanceTemplate, PublicKey};

/// Compile the default issuance template for `public_key`.
///
/// Fails only if the built-in template is defective; no valid key can make
/// this return an error.
pub fn compile_issuance_program(public_key: &PublicKey) -> Result<CompiledProgram, AssemblyError> {
    IssuanceTemplate::default().compile(public_key)
}
