//! Domain Layer - session context and transaction constructors.
//!
//! RULES:
//! - No I/O operations
//! - No async code

pub mod account;
pub mod agents;
pub mod config;
mod envelope;
pub mod records;
pub mod schemas;
pub mod session;

pub use account::{error_message, Authorization, NewUser, StatusReply, UserUpdate};
pub use agents::{
    create_agent_transaction, create_organization_transaction, update_agent_transaction,
    update_organization_transaction,
};
pub use config::{ClientConfig, DEFAULT_API_URL};
pub use records::{
    answer_proposal_transaction, create_proposal_transaction, create_record_transaction,
    finalize_record_transaction, new_record_id, property_scope, revoke_reporter_transaction,
    update_properties_transaction, CreatedRecord, RECORD_DISPATCH,
};
pub use schemas::{create_schema_transaction, update_schema_transaction};
pub use session::Session;
