//! # TNT-02 Payloads
//!
//! Turns contract actions into payload bytes for the Pike, Schema and
//! Track-and-Trace families.
//!
//! ## Action Table
//!
//! | Key | Family | Wire action |
//! |-----|--------|-------------|
//! | `createAgent` / `updateAgent` | Pike | `CREATE_AGENT` / `UPDATE_AGENT` |
//! | `createOrganization` / `updateOrganization` | Pike | `CREATE_ORGANIZATION` / `UPDATE_ORGANIZATION` |
//! | `createRecordType` / `updateRecordType` | Schema | `SCHEMA_CREATE` / `SCHEMA_UPDATE` |
//! | `createRecord`, `finalizeRecord`, `updateProperties` | Track-and-Trace | same name |
//! | `createProposal`, `answerProposal`, `revokeReporter` | Track-and-Trace | same name |
//!
//! The table is static: [`ActionKey`] parses the key, [`PayloadAction`]
//! carries the typed body.
//!
//! ## Usage Example
//!
//! ```ignore
//! use tnt_02_payloads::{encode, PayloadAction, FinalizeRecordBody};
//!
//! let bytes = encode(&PayloadAction::FinalizeRecord(FinalizeRecordBody {
//!     record_id: "rec-1".into(),
//! }))?;
//! ```

pub mod domain;
pub mod error;

pub use domain::*;
pub use error::PayloadError;
