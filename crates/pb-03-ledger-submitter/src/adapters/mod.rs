//! Adapters for the ledger submitter.

pub mod horizon_client;

pub use horizon_client::HorizonClient;
