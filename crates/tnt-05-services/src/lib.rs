//! # TNT-05 Services
//!
//! Named operations on agents, organizations, record types and records.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): `Session`, `ClientConfig`, one pure
//!   transaction constructor per operation
//! - **Ports Layer** (`ports/`)
//!   - `TrackAndTraceApi`: Driving port, one async method per operation
//!   - `AccountGateway`: Driven port for the application server's user API
//! - **Adapters Layer** (`adapters/`)
//!   - `AccountApi`: reqwest client
//!   - `InMemoryAccounts`: map-backed double
//! - **Service** (`service`): `TrackAndTraceService`, `LedgerQueries`
//!
//! ## Operations
//!
//! | Operation | Contract | Dispatched with |
//! |-----------|----------|-----------------|
//! | `create_agent`, `update_agent` | pike | pike |
//! | `create_organization`, `update_organization` | pike | pike |
//! | `create_schema`, `update_schema` | grid_schema | grid_schema |
//! | `create_record`, `finalize_record`, `update_properties` | grid_track_and_trace | pike, grid_track_and_trace, grid_schema |
//! | `create_proposal`, `answer_proposal`, `revoke_reporter` | grid_track_and_trace | pike, grid_track_and_trace, grid_schema |
//!
//! ## Flow
//!
//! ```text
//! Session ──► *_transaction() ──► TrackAndTraceService ──► BatchSubmissionApi
//!   (signer)      (pure)              submit_one                (tnt-04)
//! ```
//!
//! Every operation checks the session's signer before encoding anything.

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use adapters::{AccountApi, InMemoryAccounts};
pub use domain::*;
pub use error::{ApiError, ServiceError};
pub use ports::{AccountGateway, TrackAndTraceApi};
pub use service::{LedgerQueries, TrackAndTraceService};
