//! Domain Layer - status evaluation, link parsing, configuration.
//!
//! RULES:
//! - No I/O operations
//! - No async code

pub mod config;
pub mod link;
pub mod status;

pub use config::{GatewayConfig, DEFAULT_GATEWAY_URL, DEFAULT_WAIT_SECS};
pub use link::{batch_id_from_link, form_status_url, with_wait};
pub use status::{
    evaluate, BatchStatus, BatchStatusKind, BatchStatusResponse, InvalidTransaction, PollOutcome,
    SubmitResponse, GENERIC_INVALID_MESSAGE,
};
