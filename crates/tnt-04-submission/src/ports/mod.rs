//! Ports Layer - trait seams.

pub mod inbound;
pub mod outbound;

pub use inbound::BatchSubmissionApi;
pub use outbound::LedgerGateway;
