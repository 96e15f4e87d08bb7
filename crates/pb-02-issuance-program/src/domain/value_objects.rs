//! # Domain Value Objects
//!
//! Immutable outputs of issuance program assembly.

use pb_01_txvm_assembler::{disassemble, AsmError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Assembled TxVM bytecode.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CompiledProgram(Vec<u8>);

impl CompiledProgram {
    /// Wrap raw bytecode.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Bytecode.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Take ownership of the bytecode.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Bytecode length.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for an empty program.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Canonical assembly text, for diagnostics.
    pub fn disassemble(&self) -> Result<String, AsmError> {
        disassemble(&self.0)
    }
}

impl AsRef<[u8]> for CompiledProgram {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// 32-byte contract seed identifying a program on the VM chain.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramSeed([u8; 32]);

impl ProgramSeed {
    /// Wrap raw seed bytes.
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for ProgramSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for ProgramSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProgramSeed({})", self.to_hex())
    }
}

impl Serialize for ProgramSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ProgramSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let bytes = hex::decode(&s).map_err(serde::de::Error::custom)?;
        let seed: [u8; 32] = bytes
            .try_into()
            .map_err(|_| serde::de::Error::custom("seed must be 32 bytes"))?;
        Ok(Self(seed))
    }
}
