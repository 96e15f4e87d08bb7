//! Ports (hexagonal architecture).

pub mod inbound;
pub mod outbound;

pub use inbound::SubmitterApi;
pub use outbound::{LedgerClient, MockBehavior, MockLedgerClient, PartialSubmission};
