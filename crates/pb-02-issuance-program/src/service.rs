//! # Issuance Program Service
//!
//! The compiled issuance program and its seed, built once at startup and
//! held by whoever embeds the program into transactions.
//!
//! ## Lifecycle
//!
//! 1. Validate template (exactly one placeholder)
//! 2. Splice the custodian/depositor key and assemble
//! 3. Derive the contract seed
//!
//! After `build` returns the value is immutable; share it by reference or
//! `Arc`, no locking needed.

use crate::algorithms::contract_seed;
use crate::domain::{AssemblyError, CompiledProgram, IssuanceTemplate, ProgramSeed, PublicKey};
use serde::Serialize;
use tracing::{debug, info};

/// Compiled issuance program with its derived seed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IssuanceProgram {
    #[serde(with = "hex_bytes")]
    public_key: PublicKey,
    #[serde(serialize_with = "serialize_program")]
    program: CompiledProgram,
    seed: ProgramSeed,
}

impl IssuanceProgram {
    /// Build from the default template.
    pub fn build(public_key: PublicKey) -> Result<Self, AssemblyError> {
        Self::build_with_template(&IssuanceTemplate::default(), public_key)
    }

    /// Build from a custom template.
    pub fn build_with_template(
        template: &IssuanceTemplate,
        public_key: PublicKey,
    ) -> Result<Self, AssemblyError> {
        let program = template.compile(&public_key)?;
        let seed = contract_seed(program.as_bytes());

        info!(
            "[pb-02] Issuance program ready: {} bytes, seed {}",
            program.len(),
            seed
        );
        if let Ok(text) = program.disassemble() {
            debug!("[pb-02] Issuance program: {}", text);
        }

        Ok(Self {
            public_key,
            program,
            seed,
        })
    }

    /// Key embedded in the signature-check sub-contract.
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Bytecode.
    pub fn program(&self) -> &CompiledProgram {
        &self.program
    }

    /// Contract seed.
    pub fn seed(&self) -> ProgramSeed {
        self.seed
    }
}

fn serialize_program<S>(program: &CompiledProgram, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&hex::encode(program.as_bytes()))
}

mod hex_bytes {
    pub(super) fn serialize<S>(bytes: &[u8; 32], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&hex::encode(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_computes_seed_of_program() {
        let issuance = IssuanceProgram::build([9u8; 32]).unwrap();
        assert_eq!(
            issuance.seed(),
            contract_seed(issuance.program().as_bytes())
        );
        assert_eq!(issuance.public_key(), &[9u8; 32]);
    }

    #[test]
    fn test_build_is_deterministic() {
        let a = IssuanceProgram::build([3u8; 32]).unwrap();
        let b = IssuanceProgram::build([3u8; 32]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_seed_differs_per_key() {
        let a = IssuanceProgram::build([3u8; 32]).unwrap();
        let b = IssuanceProgram::build([4u8; 32]).unwrap();
        assert_ne!(a.seed(), b.seed());
    }

    #[test]
    fn test_custom_template_failure_surfaces() {
        let template = IssuanceTemplate::new("[txid <pubkey> get 0 checksig verfy]").unwrap();
        assert!(IssuanceProgram::build_with_template(&template, [0u8; 32]).is_err());
    }

    #[test]
    fn test_serializes_as_hex() {
        let issuance = IssuanceProgram::build([0xAAu8; 32]).unwrap();
        let json = serde_json::to_value(&issuance).unwrap();
        assert_eq!(json["public_key"], "aa".repeat(32));
        assert_eq!(json["seed"], issuance.seed().to_hex());
        assert_eq!(
            json["program"],
            hex::encode(issuance.program().as_bytes())
        );
    }
}
