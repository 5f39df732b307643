//! In-memory gateway with scripted responses.
//!
//! Records every request so callers can assert on traffic.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};

use crate::domain::{BatchStatus, BatchStatusKind, BatchStatusResponse, InvalidTransaction, SubmitResponse};
use crate::error::GatewayError;
use crate::ports::LedgerGateway;

/// A scripted reply to one status poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedStatus {
    Status(BatchStatusKind),
    Invalid(Vec<InvalidTransaction>),
    Empty,
    /// Fail the poll with a connection error.
    Unreachable,
}

impl ScriptedStatus {
    fn into_response(self, batch_id: &str) -> Result<BatchStatusResponse, GatewayError> {
        let batch = |status, invalid_transactions| BatchStatus {
            id: batch_id.to_string(),
            status,
            invalid_transactions,
        };
        match self {
            Self::Status(status) => Ok(BatchStatusResponse {
                data: vec![batch(status, vec![])],
            }),
            Self::Invalid(invalid) => Ok(BatchStatusResponse {
                data: vec![batch(BatchStatusKind::Invalid, invalid)],
            }),
            Self::Empty => Ok(BatchStatusResponse::default()),
            Self::Unreachable => Err(GatewayError::Connection("scripted outage".to_string())),
        }
    }
}

#[derive(Default)]
struct State {
    statuses: VecDeque<ScriptedStatus>,
    link: Option<String>,
    submitted: Vec<Vec<u8>>,
    transaction_lists: Vec<(Vec<u8>, bool)>,
    status_requests: Vec<String>,
    documents: HashMap<String, serde_json::Value>,
    fetches: Vec<String>,
}

/// Gateway double answering from a script.
///
/// Status polls pop scripted replies in order; once the script runs out,
/// every poll reports `PENDING`.
pub struct InMemoryGateway {
    base_url: String,
    state: Mutex<State>,
}

impl Default for InMemoryGateway {
    fn default() -> Self {
        Self::new("http://gateway.test")
    }
}

impl InMemoryGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            state: Mutex::new(State::default()),
        }
    }

    pub fn with_statuses(self, statuses: impl IntoIterator<Item = ScriptedStatus>) -> Self {
        self.state.lock().statuses.extend(statuses);
        self
    }

    /// Override the `link` returned on submission.
    pub fn with_link(self, link: impl Into<String>) -> Self {
        self.state.lock().link = Some(link.into());
        self
    }

    /// Serve `document` for `GET {gateway}/{path}`.
    pub fn with_document(self, path: impl Into<String>, document: serde_json::Value) -> Self {
        self.state.lock().documents.insert(path.into(), document);
        self
    }

    pub fn submitted_batch_lists(&self) -> Vec<Vec<u8>> {
        self.state.lock().submitted.clone()
    }

    pub fn submitted_transaction_lists(&self) -> Vec<(Vec<u8>, bool)> {
        self.state.lock().transaction_lists.clone()
    }

    pub fn status_requests(&self) -> Vec<String> {
        self.state.lock().status_requests.clone()
    }

    pub fn fetches(&self) -> Vec<String> {
        self.state.lock().fetches.clone()
    }
}

#[async_trait]
impl LedgerGateway for InMemoryGateway {
    fn gateway_url(&self) -> &str {
        &self.base_url
    }

    async fn submit_batches(&self, batch_list: Vec<u8>) -> Result<SubmitResponse, GatewayError> {
        let mut state = self.state.lock();
        state.submitted.push(batch_list);
        let link = state.link.clone().unwrap_or_else(|| {
            format!(
                "{}/batch_statuses?id=batch-{}",
                self.base_url,
                state.submitted.len()
            )
        });
        Ok(SubmitResponse { link })
    }

    async fn batch_statuses(&self, status_url: &str) -> Result<BatchStatusResponse, GatewayError> {
        let mut state = self.state.lock();
        state.status_requests.push(status_url.to_string());
        let next = state
            .statuses
            .pop_front()
            .unwrap_or(ScriptedStatus::Status(BatchStatusKind::Pending));
        next.into_response("scripted")
    }

    async fn submit_transaction_list(
        &self,
        transaction_list: Vec<u8>,
        wait: bool,
    ) -> Result<serde_json::Value, GatewayError> {
        self.state.lock().transaction_lists.push((transaction_list, wait));
        Ok(serde_json::json!({ "link": format!("{}/batch_statuses?id=list", self.base_url) }))
    }

    async fn fetch(&self, path: &str) -> Result<serde_json::Value, GatewayError> {
        let path = path.trim_start_matches('/');
        let mut state = self.state.lock();
        state.fetches.push(path.to_string());
        state
            .documents
            .get(path)
            .cloned()
            .ok_or_else(|| GatewayError::Status {
                status: 404,
                body: format!("no document at {path}"),
            })
    }
}
