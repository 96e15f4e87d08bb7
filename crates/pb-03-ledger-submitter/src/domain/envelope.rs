//! # Transaction Envelope
//!
//! Unsigned transaction body plus the signatures collected for it.
//!
//! ## Wire format (XDR)
//!
//! ```text
//! u32  envelope type (2)
//! ...  transaction body (opaque, 4-byte aligned)
//! u32  signature count
//! per signature:
//!   [u8; 4]   hint (last 4 bytes of the signer's public key)
//!   u32       signature length (64)
//!   [u8; 64]  signature
//! ```
//!
//! ## Signature payload
//!
//! `SHA256(SHA256(passphrase) || u32(2) || body)`

use super::errors::{SerializationError, SigningError};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use sha2::{Digest, Sha256};

/// Public network passphrase.
pub const PUBLIC_NETWORK_PASSPHRASE: &str = "Public Global Stellar Network ; September 2015";

/// Test network passphrase.
pub const TEST_NETWORK_PASSPHRASE: &str = "Test SDF Network ; September 2015";

/// Envelope discriminant for a v1 transaction.
pub const ENVELOPE_TYPE_TX: u32 = 2;

/// Ledger limit on signatures per envelope.
pub const MAX_SIGNATURES: usize = 20;

/// Ed25519 signature length.
pub const SIGNATURE_LEN: usize = 64;

/// Signature with a hint identifying the signer.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct DecoratedSignature {
    /// Last 4 bytes of the signer's public key.
    pub hint: [u8; 4],
    /// Ed25519 signature over the transaction hash.
    pub signature: [u8; SIGNATURE_LEN],
}

impl DecoratedSignature {
    /// Build from a signer key and signature.
    pub fn new(public_key: &[u8; 32], signature: [u8; SIGNATURE_LEN]) -> Self {
        let mut hint = [0u8; 4];
        hint.copy_from_slice(&public_key[28..]);
        Self { hint, signature }
    }
}

impl std::fmt::Debug for DecoratedSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DecoratedSignature(hint={})", hex::encode(self.hint))
    }
}

/// Transaction envelope under a given network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionEnvelope {
    network_passphrase: String,
    tx: Vec<u8>,
    signatures: Vec<DecoratedSignature>,
}

impl TransactionEnvelope {
    /// Unsigned envelope for an XDR transaction body.
    pub fn new(network_passphrase: impl Into<String>, tx: Vec<u8>) -> Self {
        Self {
            network_passphrase: network_passphrase.into(),
            tx,
            signatures: Vec::new(),
        }
    }

    /// Network the envelope is signed under.
    pub fn network_passphrase(&self) -> &str {
        &self.network_passphrase
    }

    /// Transaction body.
    pub fn tx_xdr(&self) -> &[u8] {
        &self.tx
    }

    /// Signatures in the order they were added.
    pub fn signatures(&self) -> &[DecoratedSignature] {
        &self.signatures
    }

    /// Append signatures.
    pub fn extend_signatures(&mut self, signatures: impl IntoIterator<Item = DecoratedSignature>) {
        self.signatures.extend(signatures);
    }

    /// Network-bound transaction hash that signers sign.
    pub fn hash(&self) -> Result<[u8; 32], SigningError> {
        if self.network_passphrase.is_empty() {
            return Err(SigningError::MissingNetworkPassphrase);
        }
        let network_id = Sha256::digest(self.network_passphrase.as_bytes());

        let mut hasher = Sha256::new();
        hasher.update(network_id);
        hasher.update(ENVELOPE_TYPE_TX.to_be_bytes());
        hasher.update(&self.tx);
        Ok(hasher.finalize().into())
    }

    /// Hex transaction hash.
    pub fn hash_hex(&self) -> Result<String, SigningError> {
        self.hash().map(hex::encode)
    }

    /// Encode as XDR.
    pub fn to_xdr(&self) -> Result<Vec<u8>, SerializationError> {
        if self.tx.is_empty() {
            return Err(SerializationError::EmptyTransaction);
        }
        if self.tx.len() % 4 != 0 {
            return Err(SerializationError::Misaligned { len: self.tx.len() });
        }
        if self.signatures.len() > MAX_SIGNATURES {
            return Err(SerializationError::TooManySignatures {
                count: self.signatures.len(),
                max: MAX_SIGNATURES,
            });
        }

        let mut out =
            Vec::with_capacity(8 + self.tx.len() + self.signatures.len() * (8 + SIGNATURE_LEN));
        out.extend_from_slice(&ENVELOPE_TYPE_TX.to_be_bytes());
        out.extend_from_slice(&self.tx);
        out.extend_from_slice(&(self.signatures.len() as u32).to_be_bytes());
        for sig in &self.signatures {
            out.extend_from_slice(&sig.hint);
            out.extend_from_slice(&(SIGNATURE_LEN as u32).to_be_bytes());
            out.extend_from_slice(&sig.signature);
        }
        Ok(out)
    }

    /// Encode as base64 XDR, the form the ledger accepts.
    pub fn to_base64(&self) -> Result<String, SerializationError> {
        self.to_xdr().map(|xdr| BASE64.encode(xdr))
    }
}
