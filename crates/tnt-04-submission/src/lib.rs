//! # TNT-04 Submission
//!
//! Batch submission to the ledger gateway and commit watching.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): status evaluation, link parsing, `GatewayConfig`
//! - **Ports Layer** (`ports/`)
//!   - `BatchSubmissionApi`: Driving port used by domain services
//!   - `LedgerGateway`: Driven port for the HTTP gateway
//! - **Adapters Layer** (`adapters/`)
//!   - `RestGateway`: reqwest client
//!   - `InMemoryGateway`: scripted double for tests and dry runs
//! - **Service** (`service`): `BatchSubmitter`, `CommitWatcher`
//!
//! ## Flow
//!
//! ```text
//! transactions ──► BatchHeader(signer, ids) ──► BatchList ──► POST /batches
//!                                                               │ {link}
//!        ◄── Ok(ids) / Invalid(msg) ◄── GET /batch_statuses?id=..&wait=60 (loop)
//! ```
//!
//! ## Outcomes
//!
//! | Status | Result |
//! |--------|--------|
//! | `COMMITTED` | transaction ids |
//! | `INVALID` | message of the first invalid transaction we submitted, else `"Invalid Transaction"` |
//! | anything else, or no data | poll again |
//! | transport failure | returned at once, no retry |

pub mod adapters;
pub mod cancel;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use adapters::{InMemoryGateway, RestGateway, ScriptedStatus};
pub use cancel::{CancelHandle, CancelSignal};
pub use domain::{
    batch_id_from_link, evaluate, form_status_url, with_wait, BatchStatus, BatchStatusKind,
    BatchStatusResponse, GatewayConfig, InvalidTransaction, PollOutcome, SubmitResponse,
    DEFAULT_GATEWAY_URL, DEFAULT_WAIT_SECS, GENERIC_INVALID_MESSAGE,
};
pub use error::{GatewayError, SubmitError};
pub use ports::{BatchSubmissionApi, LedgerGateway};
pub use service::{BatchSubmitter, CommitWatcher};
