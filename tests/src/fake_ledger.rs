//! # Fake Ledger
//!
//! An axum server standing in for both HTTP surfaces the client talks to:
//!
//! | Route | Plays |
//! |-------|-------|
//! | `POST /grid/batches` | REST gateway submit, answers `{link}` |
//! | `GET /grid/batch_statuses` | status long-poll, answers from the script |
//! | `GET /grid/{agent,record,schema}/:id` | state views |
//! | `GET /api/info` | server readiness probe |
//! | `POST /api/users`, `POST /api/authorization` | account API |
//!
//! Status polls pop scripted replies in order; once the script runs out
//! every batch is reported `COMMITTED`.

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use parking_lot::Mutex;
use serde_json::{json, Value};
use shared_protos::{BatchList, Message};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tnt_04_submission::GatewayConfig;
use tnt_05_services::ClientConfig;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A scripted answer to one status poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Pending,
    Committed,
    /// Mark the batch's first transaction invalid with this message.
    Invalid(String),
}

#[derive(Default)]
struct Ledger {
    script: VecDeque<Reply>,
    batch_lists: Vec<BatchList>,
    status_queries: Vec<HashMap<String, String>>,
    documents: HashMap<String, Value>,
    users: HashMap<String, Value>,
    info_failures: usize,
    info_probes: usize,
}

#[derive(Clone)]
struct AppState {
    ledger: Arc<Mutex<Ledger>>,
    grid_url: String,
}

/// Running fake; the server stops when this is dropped.
pub struct FakeLedger {
    base_url: String,
    ledger: Arc<Mutex<Ledger>>,
    server: JoinHandle<()>,
}

impl FakeLedger {
    /// Bind an ephemeral local port and start serving.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let base_url = format!("http://{}", listener.local_addr()?);
        let ledger = Arc::new(Mutex::new(Ledger::default()));

        let app = router(AppState {
            ledger: Arc::clone(&ledger),
            grid_url: format!("{base_url}/grid"),
        });
        let server = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            base_url,
            ledger,
            server,
        })
    }

    pub fn grid_url(&self) -> String {
        format!("{}/grid", self.base_url)
    }

    pub fn api_url(&self) -> String {
        format!("{}/api", self.base_url)
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api_url(), GatewayConfig::new(self.grid_url()))
    }

    pub fn script(&self, replies: impl IntoIterator<Item = Reply>) {
        self.ledger.lock().script.extend(replies);
    }

    /// Answer the next `count` readiness probes with 503.
    pub fn unavailable_for(&self, count: usize) {
        self.ledger.lock().info_failures = count;
    }

    pub fn insert_document(&self, path: &str, document: Value) {
        self.ledger
            .lock()
            .documents
            .insert(path.trim_start_matches('/').to_string(), document);
    }

    pub fn batch_lists(&self) -> Vec<BatchList> {
        self.ledger.lock().batch_lists.clone()
    }

    pub fn status_queries(&self) -> Vec<HashMap<String, String>> {
        self.ledger.lock().status_queries.clone()
    }

    /// Registered user bodies, keyed by email.
    pub fn users(&self) -> HashMap<String, Value> {
        self.ledger.lock().users.clone()
    }

    pub fn info_probes(&self) -> usize {
        self.ledger.lock().info_probes
    }
}

impl Drop for FakeLedger {
    fn drop(&mut self) {
        self.server.abort();
    }
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/grid/batches", post(submit_batches))
        .route("/grid/batch_statuses", get(batch_statuses))
        .route("/grid/agent/:id", get(document))
        .route("/grid/record/:id", get(document))
        .route("/grid/schema/:id", get(document))
        .route("/api/info", get(info))
        .route("/api/users", post(create_user))
        .route("/api/authorization", post(authorize))
        .with_state(state)
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": { "message": message } }))).into_response()
}

async fn submit_batches(State(app): State<AppState>, body: Bytes) -> Response {
    let Ok(batch_list) = BatchList::decode(body) else {
        return error(StatusCode::BAD_REQUEST, "Malformed batch list");
    };
    let Some(batch_id) = batch_list.batches.first().map(|b| b.header_signature.clone()) else {
        return error(StatusCode::BAD_REQUEST, "No batches submitted");
    };

    app.ledger.lock().batch_lists.push(batch_list);
    let link = format!("{}/batch_statuses?id={batch_id}", app.grid_url);
    (StatusCode::ACCEPTED, Json(json!({ "link": link }))).into_response()
}

async fn batch_statuses(
    State(app): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    let mut ledger = app.ledger.lock();
    let batch_id = query.get("id").cloned().unwrap_or_default();
    ledger.status_queries.push(query);

    let status = match ledger.script.pop_front().unwrap_or(Reply::Committed) {
        Reply::Pending => json!({ "id": batch_id, "status": "PENDING", "invalid_transactions": [] }),
        Reply::Committed => {
            json!({ "id": batch_id, "status": "COMMITTED", "invalid_transactions": [] })
        }
        Reply::Invalid(message) => {
            let transaction_id = ledger
                .batch_lists
                .iter()
                .flat_map(|list| &list.batches)
                .find(|batch| batch.header_signature == batch_id)
                .and_then(|batch| batch.transactions.first())
                .map(|txn| txn.header_signature.clone())
                .unwrap_or_default();
            json!({
                "id": batch_id,
                "status": "INVALID",
                "invalid_transactions": [{ "id": transaction_id, "message": message }]
            })
        }
    };
    Json(json!({ "data": [status] }))
}

async fn document(State(app): State<AppState>, uri: Uri) -> Response {
    let path = uri.path().trim_start_matches("/grid/");
    match app.ledger.lock().documents.get(path) {
        Some(document) => Json(document.clone()).into_response(),
        None => error(StatusCode::NOT_FOUND, "Not found"),
    }
}

async fn info(State(app): State<AppState>) -> Response {
    let mut ledger = app.ledger.lock();
    ledger.info_probes += 1;
    if ledger.info_failures > 0 {
        ledger.info_failures -= 1;
        return error(StatusCode::SERVICE_UNAVAILABLE, "Starting up");
    }
    Json(json!({ "pubkey": "fake-ledger" })).into_response()
}

async fn create_user(State(app): State<AppState>, Json(user): Json<Value>) -> Response {
    let email = user["email"].as_str().unwrap_or_default().to_string();
    let mut ledger = app.ledger.lock();
    if email.is_empty() || ledger.users.contains_key(&email) {
        return error(StatusCode::BAD_REQUEST, "Email already in use");
    }
    let token = format!("token-{}", ledger.users.len() + 1);
    ledger.users.insert(email, user);
    Json(json!({ "status": "ok", "authorization": token })).into_response()
}

async fn authorize(State(app): State<AppState>, Json(login): Json<Value>) -> Response {
    let ledger = app.ledger.lock();
    let user = login["email"]
        .as_str()
        .and_then(|email| ledger.users.get(email))
        .filter(|user| user["password"] == login["password"]);

    match user {
        Some(user) => {
            let mut user = user.clone();
            if let Some(fields) = user.as_object_mut() {
                fields.remove("password");
            }
            Json(json!({ "authorization": "session-token", "user": user })).into_response()
        }
        None => error(StatusCode::UNAUTHORIZED, "Unauthorized"),
    }
}
