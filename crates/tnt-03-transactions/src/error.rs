//! Error types for transaction and batch assembly

use shared_crypto::CryptoError;
use thiserror::Error;

/// Errors building a single transaction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransactionError {
    /// No signing capability was supplied.
    #[error("A signer must be provided")]
    MissingSigner,

    #[error("Signing failed: {0}")]
    Crypto(#[from] CryptoError),

    #[error("Failed to decode {what}: {reason}")]
    Decode { what: &'static str, reason: String },
}

/// Errors assembling a batch.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BatchError {
    /// A batch must carry at least one transaction.
    #[error("A batch must contain at least one transaction")]
    EmptyBatch,

    #[error("Signing failed: {0}")]
    Crypto(#[from] CryptoError),
}
