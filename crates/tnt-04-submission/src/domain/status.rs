//! Batch status documents and their evaluation.

use serde::{Deserialize, Serialize};

/// Message reported when the ledger gives no reason for an invalid batch.
pub const GENERIC_INVALID_MESSAGE: &str = "Invalid Transaction";

/// Body returned by `POST /batches`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub link: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BatchStatusKind {
    Committed,
    Invalid,
    Pending,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidTransaction {
    pub id: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchStatus {
    #[serde(default)]
    pub id: String,
    pub status: BatchStatusKind,
    #[serde(default)]
    pub invalid_transactions: Vec<InvalidTransaction>,
}

/// Body returned by `GET /batch_statuses`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BatchStatusResponse {
    #[serde(default)]
    pub data: Vec<BatchStatus>,
}

/// What one status poll tells the watcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    Committed,
    Rejected(String),
    Pending,
}

/// Evaluate the first batch result against the submitted transaction ids.
///
/// No result at all counts as pending.
pub fn evaluate(response: &BatchStatusResponse, transaction_ids: &[String]) -> PollOutcome {
    let Some(batch) = response.data.first() else {
        return PollOutcome::Pending;
    };

    match batch.status {
        BatchStatusKind::Committed => PollOutcome::Committed,
        BatchStatusKind::Invalid => {
            let message = batch
                .invalid_transactions
                .iter()
                .find(|txn| transaction_ids.contains(&txn.id))
                .map(|txn| txn.message.clone())
                .unwrap_or_else(|| GENERIC_INVALID_MESSAGE.to_string());
            PollOutcome::Rejected(message)
        }
        BatchStatusKind::Pending | BatchStatusKind::Unknown => PollOutcome::Pending,
    }
}
