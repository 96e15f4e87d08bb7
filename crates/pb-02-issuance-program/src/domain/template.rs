//! # Issuance Template
//!
//! TxVM source for the peg-in issuance contract, with a single public-key
//! placeholder.
//!
//! ## Stack effects
//!
//! | Step | Contract stack | Argument stack |
//! |------|----------------|----------------|
//! | entry | | asset code, amount, zero value |
//! | `get get get` | zero value, amount, asset code | |
//! | `[...] contract put` | | signature-check contract |
//! | `issue put` | | signature-check contract, issued value |
//!
//! `issue` appends `{"A", caller, amount, asset id, anchor}` to the
//! transaction log. The issued value can only be spent by unlocking the
//! signature-check contract, which requires a signature by the embedded key
//! over the transaction id.

use super::errors::{AssemblyError, PublicKey};
use super::value_objects::CompiledProgram;
use pb_01_txvm_assembler::assemble;

/// Placeholder replaced by the depositor key.
pub const PUBKEY_PLACEHOLDER: &str = "<pubkey>";

/// Default peg-in issuance program source.
pub const ISSUANCE_PROGRAM_TEMPLATE: &str = "
get get get                                          # move asset code, amount, zero value
[txid <pubkey> get 0 checksig verify] contract put   # signature-check sub-contract
issue put                                            # issue behind the sub-contract
";

/// Validated issuance program template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IssuanceTemplate {
    source: String,
}

impl Default for IssuanceTemplate {
    fn default() -> Self {
        Self {
            source: ISSUANCE_PROGRAM_TEMPLATE.to_string(),
        }
    }
}

impl IssuanceTemplate {
    /// Create a template, checking it has exactly one placeholder.
    pub fn new(source: impl Into<String>) -> Result<Self, AssemblyError> {
        let source = source.into();
        let found = source.matches(PUBKEY_PLACEHOLDER).count();
        if found != 1 {
            return Err(AssemblyError::Placeholder { found });
        }
        Ok(Self { source })
    }

    /// Template source.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Source with the key spliced in as a hex literal.
    pub fn instantiate(&self, public_key: &PublicKey) -> String {
        let literal = format!("x'{}'", hex::encode(public_key));
        self.source.replacen(PUBKEY_PLACEHOLDER, &literal, 1)
    }

    /// Instantiate and assemble.
    pub fn compile(&self, public_key: &PublicKey) -> Result<CompiledProgram, AssemblyError> {
        let bytes = assemble(&self.instantiate(public_key))?;
        Ok(CompiledProgram::from_bytes(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_is_valid() {
        let template = IssuanceTemplate::new(ISSUANCE_PROGRAM_TEMPLATE).unwrap();
        assert_eq!(template, IssuanceTemplate::default());
    }

    #[test]
    fn test_missing_placeholder_rejected() {
        let err = IssuanceTemplate::new("get get get issue put").unwrap_err();
        assert!(matches!(err, AssemblyError::Placeholder { found: 0 }));
    }

    #[test]
    fn test_duplicate_placeholder_rejected() {
        let err = IssuanceTemplate::new("<pubkey> <pubkey>").unwrap_err();
        assert!(matches!(err, AssemblyError::Placeholder { found: 2 }));
    }

    #[test]
    fn test_instantiate_splices_hex_literal() {
        let source = IssuanceTemplate::default().instantiate(&[0x11u8; 32]);
        assert!(!source.contains(PUBKEY_PLACEHOLDER));
        assert!(source.contains(&format!("txid x'{}' get", "11".repeat(32))));
    }

    #[test]
    fn test_broken_template_fails_to_compile() {
        let template =
            IssuanceTemplate::new("get get get [txid <pubkey> get 0 chksig verify] contract put")
                .unwrap();
        let err = template.compile(&[1u8; 32]).unwrap_err();
        assert!(matches!(err, AssemblyError::Asm(_)));
    }

    #[test]
    fn test_compiled_default_disassembles_to_expected_shape() {
        let key = [0x42u8; 32];
        let program = IssuanceTemplate::default().compile(&key).unwrap();
        let text = program.disassemble().unwrap();
        assert!(text.starts_with("get get get x'"));
        assert!(text.ends_with("contract put issue put"));
    }
}
