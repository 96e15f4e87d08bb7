//! # Secret Seed
//!
//! Ed25519 signing seed for a ledger account, zeroized on drop.
//!
//! Seeds travel as strkey strings (`S...`, 56 chars). The derived account
//! address is the matching `G...` strkey.

use ed25519_dalek::SigningKey;
use stellar_strkey::ed25519::{PrivateKey, PublicKey as StrkeyPublicKey};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Account signing seed.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretSeed {
    inner: [u8; 32],
}

impl SecretSeed {
    /// Wrap raw seed bytes.
    pub fn new(bytes: [u8; 32]) -> Self {
        Self { inner: bytes }
    }

    /// Parse an `S...` strkey. `None` if the string is not a valid seed.
    ///
    /// The decoder's error is dropped so the input never reaches a log.
    pub fn from_strkey(s: &str) -> Option<Self> {
        PrivateKey::from_string(s.trim())
            .ok()
            .map(|key| Self { inner: key.0 })
    }

    /// Encode as an `S...` strkey.
    pub fn to_strkey(&self) -> String {
        PrivateKey(self.inner).to_string()
    }

    /// Ed25519 signing key.
    pub fn signing_key(&self) -> SigningKey {
        SigningKey::from_bytes(&self.inner)
    }

    /// Raw public key.
    pub fn public_key(&self) -> [u8; 32] {
        self.signing_key().verifying_key().to_bytes()
    }

    /// Account address (`G...` strkey).
    pub fn address(&self) -> String {
        StrkeyPublicKey(self.public_key()).to_string()
    }
}

impl std::fmt::Debug for SecretSeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecretSeed({}, ***)", self.address())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strkey_roundtrip() {
        let seed = SecretSeed::new([9u8; 32]);
        let encoded = seed.to_strkey();
        assert!(encoded.starts_with('S'));
        assert_eq!(encoded.len(), 56);

        let back = SecretSeed::from_strkey(&encoded).unwrap();
        assert_eq!(back.public_key(), seed.public_key());
    }

    #[test]
    fn test_address_is_public_strkey() {
        let address = SecretSeed::new([1u8; 32]).address();
        assert!(address.starts_with('G'));
        assert_eq!(address.len(), 56);
    }

    #[test]
    fn test_invalid_strkey_rejected() {
        assert!(SecretSeed::from_strkey("").is_none());
        assert!(SecretSeed::from_strkey("not-a-seed").is_none());
        let address = SecretSeed::new([1u8; 32]).address();
        assert!(SecretSeed::from_strkey(&address).is_none());
    }

    #[test]
    fn test_debug_hides_seed() {
        let seed = SecretSeed::new([0xABu8; 32]);
        let debug_str = format!("{:?}", seed);
        assert!(debug_str.contains("***"));
        assert!(!debug_str.contains(&seed.to_strkey()));
    }
}
