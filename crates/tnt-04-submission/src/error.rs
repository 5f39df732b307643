//! Error types for batch submission

use thiserror::Error;
use tnt_03_transactions::{BatchError, TransactionError};

/// Failures talking to the ledger gateway.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Gateway returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),
}

/// Errors surfaced by submission and commit watching.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// A batch must carry at least one transaction.
    #[error("A batch must contain at least one transaction")]
    EmptyBatch,

    #[error(transparent)]
    Transaction(#[from] TransactionError),

    #[error(transparent)]
    Batch(#[from] BatchError),

    /// Transport failure; never retried.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// The submission response link carried no batch id.
    #[error("Malformed status link: {0}")]
    MalformedLink(String),

    /// The ledger rejected the batch. Carries the ledger's message.
    #[error("{0}")]
    Invalid(String),

    #[error("Commit wait cancelled")]
    Cancelled,
}
