//! # Envelope Signing
//!
//! Signs an envelope with every supplied seed, in order. All seeds are
//! parsed before any signature is attached, so a bad seed leaves the
//! envelope untouched.

use crate::domain::envelope::{DecoratedSignature, TransactionEnvelope};
use crate::domain::errors::SigningError;
use crate::domain::secret_seed::SecretSeed;
use ed25519_dalek::Signer;

/// Parse strkey seeds. Reports the first invalid position.
pub fn parse_seeds(seeds: &[&str]) -> Result<Vec<SecretSeed>, SigningError> {
    seeds
        .iter()
        .enumerate()
        .map(|(index, s)| SecretSeed::from_strkey(s).ok_or(SigningError::InvalidSeed { index }))
        .collect()
}

/// Sign the envelope hash with each seed.
///
/// Zero seeds is not an error: the envelope stays unsigned and the ledger
/// decides.
pub fn sign_envelope(
    envelope: &mut TransactionEnvelope,
    seeds: &[&str],
) -> Result<(), SigningError> {
    let keys = parse_seeds(seeds)?;
    let hash = envelope.hash()?;

    let signatures: Vec<DecoratedSignature> = keys
        .iter()
        .map(|seed| {
            let signing_key = seed.signing_key();
            let signature = signing_key.sign(&hash);
            DecoratedSignature::new(&signing_key.verifying_key().to_bytes(), signature.to_bytes())
        })
        .collect();

    tracing::debug!("[pb-03] Signed tx with {} key(s)", signatures.len());
    envelope.extend_signatures(signatures);
    Ok(())
}
