//! Record type (schema) transactions.

use shared_protos::Transaction;
use tnt_01_addressing::{agent_address, schema_address};
use tnt_02_payloads::{CreateRecordTypeBody, PayloadAction, UpdateRecordTypeBody};

use crate::domain::envelope::sign_action;
use crate::domain::session::Session;
use crate::error::ServiceError;

pub fn create_schema_transaction(
    session: &Session,
    body: CreateRecordTypeBody,
) -> Result<Transaction, ServiceError> {
    let name = body.name.clone();
    schema_transaction(session, &name, PayloadAction::CreateRecordType(body))
}

/// Append property definitions to an existing record type.
pub fn update_schema_transaction(
    session: &Session,
    body: UpdateRecordTypeBody,
) -> Result<Transaction, ServiceError> {
    let name = body.name.clone();
    schema_transaction(session, &name, PayloadAction::UpdateRecordType(body))
}

fn schema_transaction(
    session: &Session,
    name: &str,
    action: PayloadAction,
) -> Result<Transaction, ServiceError> {
    let signer = session.signer()?;
    let schema = schema_address(name).into_string();
    let agent = agent_address(&signer.public_key_hex()).into_string();

    sign_action(signer, &action, vec![schema.clone(), agent], vec![schema], &[])
}
