//! # Inbound Ports
//!
//! API trait defining what the Ledger Submitter can do.

use crate::domain::classification::SubmissionResult;
use crate::domain::envelope::TransactionEnvelope;
use crate::domain::errors::SubmitterError;
use crate::domain::horizon::TransactionSuccess;
use async_trait::async_trait;

/// Ledger submitter API - inbound port.
#[async_trait]
pub trait SubmitterApi: Send + Sync {
    /// Sign with every seed, serialize, submit.
    ///
    /// On failure the error carries the original client error, the partial
    /// response and the recovered result detail.
    async fn sign_and_submit(
        &self,
        envelope: TransactionEnvelope,
        seeds: &[&str],
    ) -> Result<TransactionSuccess, SubmitterError>;

    /// `sign_and_submit`, classified into success, rejection or
    /// indeterminate. Local errors are returned as `Err`.
    async fn submit_classified(
        &self,
        envelope: TransactionEnvelope,
        seeds: &[&str],
    ) -> Result<SubmissionResult, SubmitterError> {
        SubmissionResult::try_from(self.sign_and_submit(envelope, seeds).await)
    }
}
