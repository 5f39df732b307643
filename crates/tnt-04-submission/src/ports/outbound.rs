//! Outbound Ports (Driven Ports)
//!
//! What the submitter needs from the ledger's HTTP gateway.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{BatchStatusResponse, SubmitResponse};
use crate::error::GatewayError;

/// Ledger gateway (Driven Port).
#[async_trait]
pub trait LedgerGateway: Send + Sync {
    /// Base URL status links are formed against.
    fn gateway_url(&self) -> &str;

    /// `POST {gateway}/batches` with a serialized `BatchList`.
    async fn submit_batches(&self, batch_list: Vec<u8>) -> Result<SubmitResponse, GatewayError>;

    /// `GET` a full status URL, `wait` parameter included.
    async fn batch_statuses(&self, status_url: &str) -> Result<BatchStatusResponse, GatewayError>;

    /// `POST {gateway}/batches[?wait]` with a serialized `TransactionList`.
    async fn submit_transaction_list(
        &self,
        transaction_list: Vec<u8>,
        wait: bool,
    ) -> Result<serde_json::Value, GatewayError>;

    /// `GET {gateway}/{path}` for read-only state views.
    async fn fetch(&self, path: &str) -> Result<serde_json::Value, GatewayError>;
}

#[async_trait]
impl<G: LedgerGateway + ?Sized> LedgerGateway for Arc<G> {
    fn gateway_url(&self) -> &str {
        (**self).gateway_url()
    }

    async fn submit_batches(&self, batch_list: Vec<u8>) -> Result<SubmitResponse, GatewayError> {
        (**self).submit_batches(batch_list).await
    }

    async fn batch_statuses(&self, status_url: &str) -> Result<BatchStatusResponse, GatewayError> {
        (**self).batch_statuses(status_url).await
    }

    async fn submit_transaction_list(
        &self,
        transaction_list: Vec<u8>,
        wait: bool,
    ) -> Result<serde_json::Value, GatewayError> {
        (**self).submit_transaction_list(transaction_list, wait).await
    }

    async fn fetch(&self, path: &str) -> Result<serde_json::Value, GatewayError> {
        (**self).fetch(path).await
    }
}
