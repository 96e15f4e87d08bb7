//! # Peg-Bridge Runtime
//!
//! Process wiring for the peg-in path.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration from the environment
//! 2. Install the tracing subscriber
//! 3. Validate configuration (custodian key, network passphrase)
//! 4. Build the issuance program once
//! 5. Wire the ledger submitter
//!
//! ## Modular Structure
//!
//! - `container/` - Configuration and the process-wide service container

pub mod container;

pub use container::{BridgeConfig, BridgeContainer, ConfigError, ContainerError};
