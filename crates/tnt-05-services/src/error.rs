//! Error types for domain services and the account API

use shared_crypto::CryptoError;
use thiserror::Error;
use tnt_02_payloads::PayloadError;
use tnt_03_transactions::TransactionError;
use tnt_04_submission::{GatewayError, SubmitError};

/// Errors from the account API (`{api}/users`, `{api}/authorization`).
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Connection failed: {0}")]
    Connection(String),

    /// The server refused the request; carries its message.
    #[error("{0}")]
    Rejected(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),
}

/// Errors surfaced by domain service operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The session carries no signer.
    #[error("A signer must be provided")]
    MissingSigner,

    #[error(transparent)]
    Crypto(#[from] CryptoError),

    #[error(transparent)]
    Payload(#[from] PayloadError),

    #[error(transparent)]
    Transaction(#[from] TransactionError),

    #[error(transparent)]
    Submit(#[from] SubmitError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Account(#[from] ApiError),
}

impl ServiceError {
    /// Ledger rejection message, if the ledger marked the batch invalid.
    pub fn rejection(&self) -> Option<&str> {
        match self {
            Self::Submit(SubmitError::Invalid(message)) => Some(message),
            _ => None,
        }
    }
}
