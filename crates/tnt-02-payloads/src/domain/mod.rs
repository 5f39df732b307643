//! Domain Layer - action model and encoding.
//!
//! RULES:
//! - No I/O operations
//! - No async code

pub mod action;
pub mod encoder;
pub mod property;

pub use action::{
    ActionKey, AgentBody, AnswerProposalBody, CreateProposalBody, CreateRecordBody,
    CreateRecordTypeBody, FinalizeRecordBody, Metadata, OrganizationBody, PayloadAction,
    PayloadFamily, Response, RevokeReporterBody, Role, UpdatePropertiesBody, UpdateRecordTypeBody,
};
pub use encoder::{encode, encode_at, encode_key, NO_ORGANIZATION};
pub use property::{
    properties_to_wire, DataType, PropertyData, PropertyInput, PropertySchema, FLOAT_PRECISION,
};
