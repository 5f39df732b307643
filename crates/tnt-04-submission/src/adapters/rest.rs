//! reqwest implementation of the ledger gateway port.

use async_trait::async_trait;
use reqwest::{header, Client, Response};
use serde::de::DeserializeOwned;
use tracing::trace;

use crate::domain::{BatchStatusResponse, GatewayConfig, SubmitResponse};
use crate::error::GatewayError;
use crate::ports::LedgerGateway;

const OCTET_STREAM: &str = "application/octet-stream";

/// HTTP client for the ledger's REST gateway.
#[derive(Debug, Clone)]
pub struct RestGateway {
    client: Client,
    base_url: String,
}

impl RestGateway {
    pub fn new(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(GatewayError::Http)?;

        Ok(Self {
            client,
            base_url: config.gateway_url.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn connection_error(&self, e: reqwest::Error) -> GatewayError {
        if e.is_connect() {
            GatewayError::Connection(format!("Cannot connect to {}", self.base_url))
        } else {
            GatewayError::Http(e)
        }
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }
        response
            .json()
            .await
            .map_err(|e| GatewayError::Parse(e.to_string()))
    }
}

#[async_trait]
impl LedgerGateway for RestGateway {
    fn gateway_url(&self) -> &str {
        &self.base_url
    }

    async fn submit_batches(&self, batch_list: Vec<u8>) -> Result<SubmitResponse, GatewayError> {
        let url = self.url("batches");
        trace!(%url, size = batch_list.len(), "POST batch list");

        let response = self
            .client
            .post(&url)
            .header(header::CONTENT_TYPE, OCTET_STREAM)
            .body(batch_list)
            .send()
            .await
            .map_err(|e| self.connection_error(e))?;

        Self::read_json(response).await
    }

    async fn batch_statuses(&self, status_url: &str) -> Result<BatchStatusResponse, GatewayError> {
        trace!(url = status_url, "GET batch status");

        let response = self
            .client
            .get(status_url)
            .send()
            .await
            .map_err(|e| self.connection_error(e))?;

        Self::read_json(response).await
    }

    async fn submit_transaction_list(
        &self,
        transaction_list: Vec<u8>,
        wait: bool,
    ) -> Result<serde_json::Value, GatewayError> {
        let url = if wait {
            self.url("batches?wait")
        } else {
            self.url("batches")
        };
        trace!(%url, size = transaction_list.len(), "POST transaction list");

        let response = self
            .client
            .post(&url)
            .header(header::CONTENT_TYPE, OCTET_STREAM)
            .body(transaction_list)
            .send()
            .await
            .map_err(|e| self.connection_error(e))?;

        Self::read_json(response).await
    }

    async fn fetch(&self, path: &str) -> Result<serde_json::Value, GatewayError> {
        let url = self.url(path);
        trace!(%url, "GET state view");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.connection_error(e))?;

        Self::read_json(response).await
    }
}
