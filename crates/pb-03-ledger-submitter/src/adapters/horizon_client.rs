//! # Horizon Client
//!
//! HTTP adapter for the ledger's `POST /transactions` endpoint.
//!
//! | Response | Mapped to |
//! |----------|-----------|
//! | 2xx, decodable | `TransactionSuccess` |
//! | non-2xx problem document | `LedgerError::Problem` |
//! | undecodable body | `LedgerError::Decode` |
//! | deadline elapsed | `LedgerError::Timeout` |
//! | connect / IO failure | `LedgerError::Transport` |

use crate::config::SubmitterConfig;
use crate::domain::errors::LedgerError;
use crate::domain::horizon::{HorizonProblem, TransactionSuccess};
use crate::ports::outbound::{LedgerClient, PartialSubmission};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// Ledger client over HTTP.
#[derive(Clone, Debug)]
pub struct HorizonClient {
    client: Client,
    transactions_url: String,
}

impl HorizonClient {
    /// Build a client from config.
    pub fn new(config: &SubmitterConfig) -> Result<Self, LedgerError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| LedgerError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            transactions_url: config.transactions_url(),
        })
    }

    /// Submission endpoint.
    pub fn transactions_url(&self) -> &str {
        &self.transactions_url
    }

    fn map_send_error(&self, e: reqwest::Error) -> LedgerError {
        if e.is_timeout() {
            LedgerError::Timeout(format!("no response from {}", self.transactions_url))
        } else if e.is_connect() {
            LedgerError::Transport(format!("cannot connect to {}", self.transactions_url))
        } else {
            LedgerError::Transport(e.to_string())
        }
    }
}

fn decode_response(status: u16, body: &[u8]) -> Result<TransactionSuccess, LedgerError> {
    if (200..300).contains(&status) {
        return serde_json::from_slice(body).map_err(|e| LedgerError::Decode {
            status,
            reason: e.to_string(),
        });
    }

    match serde_json::from_slice::<HorizonProblem>(body) {
        Ok(mut problem) => {
            if problem.status == 0 {
                problem.status = status;
            }
            Err(LedgerError::Problem(Box::new(problem)))
        }
        Err(e) => Err(LedgerError::Decode {
            status,
            reason: e.to_string(),
        }),
    }
}

#[async_trait]
impl LedgerClient for HorizonClient {
    async fn submit_transaction(
        &self,
        envelope_xdr: &str,
    ) -> Result<TransactionSuccess, PartialSubmission> {
        debug!("[pb-03] POST {}", self.transactions_url);

        let response = self
            .client
            .post(&self.transactions_url)
            .form(&[("tx", envelope_xdr)])
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| self.map_send_error(e))?;

        Ok(decode_response(status, &body)?)
    }
}
