//! # Bridge Container
//!
//! Holds the issuance program and the ledger submitter for the lifetime of
//! the process.
//!
//! The issuance program is compiled exactly once, here, from the configured
//! custodian key. Nothing mutates it afterwards; callers share the `Arc`.

pub mod config;

pub use config::{BridgeConfig, ConfigError};

use pb_02_issuance_program::{AssemblyError, IssuanceProgram};
use pb_03_ledger_submitter::{HorizonClient, LedgerClient, LedgerError, TransactionSubmitter};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Wiring failures.
#[derive(Debug, Error)]
pub enum ContainerError {
    /// Configuration rejected.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Issuance program failed to assemble.
    #[error("building issuance program: {0}")]
    Assembly(#[from] AssemblyError),

    /// HTTP client could not be built.
    #[error("building ledger client: {0}")]
    Ledger(#[from] LedgerError),
}

/// Process-wide bridge services.
pub struct BridgeContainer<C: LedgerClient = HorizonClient> {
    config: BridgeConfig,
    issuance: Arc<IssuanceProgram>,
    submitter: Arc<TransactionSubmitter<C>>,
}

impl BridgeContainer<HorizonClient> {
    /// Validate config and wire the HTTP submitter.
    pub fn new(config: BridgeConfig) -> Result<Self, ContainerError> {
        config.validate()?;
        let submitter = TransactionSubmitter::from_config(&config.submitter_config())?;
        Self::assemble(config, submitter)
    }
}

impl<C: LedgerClient> BridgeContainer<C> {
    /// Validate config and wire a caller-supplied ledger client.
    pub fn with_client(config: BridgeConfig, client: C) -> Result<Self, ContainerError> {
        config.validate()?;
        let submitter = TransactionSubmitter::new(client, config.network_passphrase.clone());
        Self::assemble(config, submitter)
    }

    fn assemble(
        config: BridgeConfig,
        submitter: TransactionSubmitter<C>,
    ) -> Result<Self, ContainerError> {
        info!("[pb-runtime] Building issuance program");
        let issuance = IssuanceProgram::build(config.custodian_pubkey)?;

        Ok(Self {
            config,
            issuance: Arc::new(issuance),
            submitter: Arc::new(submitter),
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Shared issuance program.
    pub fn issuance(&self) -> Arc<IssuanceProgram> {
        Arc::clone(&self.issuance)
    }

    /// Shared submitter.
    pub fn submitter(&self) -> Arc<TransactionSubmitter<C>> {
        Arc::clone(&self.submitter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pb_03_ledger_submitter::{
        FailureClass, MockBehavior, MockLedgerClient, SubmitterApi, TEST_NETWORK_PASSPHRASE,
    };

    fn config() -> BridgeConfig {
        BridgeConfig {
            custodian_pubkey: [0x42; 32],
            ..Default::default()
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = BridgeContainer::with_client(BridgeConfig::default(), MockLedgerClient::default());
        assert!(matches!(
            result,
            Err(ContainerError::Config(ConfigError::MissingCustodianKey))
        ));
    }

    #[test]
    fn test_program_built_once_and_shared() {
        let container = BridgeContainer::with_client(config(), MockLedgerClient::default()).unwrap();
        let a = container.issuance();
        let b = container.issuance();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.public_key(), &[0x42; 32]);
        assert_eq!(*a, IssuanceProgram::build([0x42; 32]).unwrap());
    }

    #[test]
    fn test_http_container_builds() {
        let container = BridgeContainer::new(config()).unwrap();
        assert_eq!(
            container.submitter().network_passphrase(),
            TEST_NETWORK_PASSPHRASE
        );
    }

    #[test]
    fn test_submitter_wired_to_client() {
        let container = BridgeContainer::with_client(
            config(),
            MockLedgerClient::new(MockBehavior::RequireSignatures {
                tx_body: vec![0; 4],
                required: 1,
            }),
        )
        .unwrap();
        let submitter = container.submitter();

        let err = tokio_test::block_on(submitter.sign_and_submit(submitter.envelope(vec![0; 4]), &[]))
            .unwrap_err();
        assert_eq!(err.submission().unwrap().class(), FailureClass::LedgerRejected);
        assert_eq!(submitter.client().submitted().len(), 1);
    }
}
