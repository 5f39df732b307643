//! # Shared Protos
//!
//! Protobuf messages exchanged with the ledger gateway.
//!
//! ## Layers
//!
//! ```text
//! BatchList
//!   └── Batch { header: BatchHeader, transactions }
//!         └── Transaction { header: TransactionHeader, payload }
//!               └── SabrePayload::ExecuteContract { name, version, payload }
//!                     └── PikePayload | SchemaPayload | TrackAndTracePayload
//! ```
//!
//! Messages are declared with `prost` derives rather than generated from
//! `.proto` files so the crate builds without `protoc`. Tags mirror the
//! upstream Sawtooth, Sabre and Grid definitions.

pub mod pike;
pub mod sabre;
pub mod sawtooth;
pub mod schema;
pub mod track_and_trace;

pub use prost::Message;

pub use pike::{
    CreateAgentAction, CreateOrganizationAction, KeyValueEntry, PikePayload, UpdateAgentAction,
    UpdateOrganizationAction,
};
pub use sabre::{ExecuteContractAction, SabrePayload};
pub use sawtooth::{Batch, BatchHeader, BatchList, Transaction, TransactionHeader, TransactionList};
pub use schema::{
    LatLong, PropertyDefinition, PropertyValue, SchemaCreateAction, SchemaPayload,
    SchemaUpdateAction,
};
pub use track_and_trace::{
    AnswerProposalAction, CreateProposalAction, CreateRecordAction, FinalizeRecordAction,
    RevokeReporterAction, TrackAndTracePayload, UpdatePropertiesAction,
};
