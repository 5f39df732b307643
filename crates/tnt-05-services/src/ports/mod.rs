//! Ports Layer - trait seams.

pub mod inbound;
pub mod outbound;

pub use inbound::TrackAndTraceApi;
pub use outbound::AccountGateway;
