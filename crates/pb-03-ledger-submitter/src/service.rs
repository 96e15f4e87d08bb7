//! Ledger Submitter Service
//!
//! Signs, serializes and submits envelopes through a `LedgerClient`, and
//! enriches failures with whatever result detail can be recovered.

use crate::adapters::HorizonClient;
use crate::algorithms::{extract_diagnostics, sign_envelope};
use crate::config::SubmitterConfig;
use crate::domain::envelope::TransactionEnvelope;
use crate::domain::errors::{LedgerError, SubmissionFailure, SubmitterError};
use crate::domain::horizon::TransactionSuccess;
use crate::ports::inbound::SubmitterApi;
use crate::ports::outbound::{LedgerClient, PartialSubmission};
use async_trait::async_trait;
use tracing::{debug, error, info, warn};

/// Transaction submitter over a ledger client.
pub struct TransactionSubmitter<C: LedgerClient> {
    client: C,
    network_passphrase: String,
}

impl TransactionSubmitter<HorizonClient> {
    /// Submitter over HTTP, built from config.
    pub fn from_config(config: &SubmitterConfig) -> Result<Self, LedgerError> {
        let client = HorizonClient::new(config)?;
        info!(
            "[pb-03] Ledger submitter targeting {}",
            client.transactions_url()
        );
        Ok(Self::new(client, config.network_passphrase.clone()))
    }
}

impl<C: LedgerClient> TransactionSubmitter<C> {
    /// Create a submitter.
    pub fn new(client: C, network_passphrase: impl Into<String>) -> Self {
        Self {
            client,
            network_passphrase: network_passphrase.into(),
        }
    }

    /// Underlying client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Network passphrase new envelopes are bound to.
    pub fn network_passphrase(&self) -> &str {
        &self.network_passphrase
    }

    /// Unsigned envelope for a transaction body on this network.
    pub fn envelope(&self, tx: Vec<u8>) -> TransactionEnvelope {
        TransactionEnvelope::new(self.network_passphrase.clone(), tx)
    }
}

#[async_trait]
impl<C: LedgerClient> SubmitterApi for TransactionSubmitter<C> {
    async fn sign_and_submit(
        &self,
        mut envelope: TransactionEnvelope,
        seeds: &[&str],
    ) -> Result<TransactionSuccess, SubmitterError> {
        sign_envelope(&mut envelope, seeds)?;
        let tx_hash = envelope.hash_hex()?;
        let envelope_xdr = envelope.to_base64()?;
        debug!("[pb-03] Submitting tx {}", tx_hash);

        match self.client.submit_transaction(&envelope_xdr).await {
            Ok(success) => {
                info!(
                    "[pb-03] Tx {} included in ledger {}",
                    success.hash, success.ledger
                );
                Ok(success)
            }
            Err(PartialSubmission { error, response }) => {
                error!("[pb-03] Error submitting tx {}: {}", tx_hash, error);
                warn!("[pb-03] tx: {}", envelope_xdr);

                let diagnostics = extract_diagnostics(&error, &response);
                let failure = SubmissionFailure {
                    error,
                    response,
                    diagnostics,
                    envelope_xdr,
                };
                warn!("[pb-03] Submission classified as {:?}", failure.class());
                Err(SubmitterError::Submission(Box::new(failure)))
            }
        }
    }
}
