//! Track-and-Trace record transactions.
//!
//! Every record transaction is dispatched with the Pike, Track-and-Trace and
//! Schema contracts in scope, since the record contract reads agents and
//! record types while it executes.
//!
//! Property state is split across a current-value page and history pages;
//! transactions that touch a property declare both page 0 and page 1.

use shared_protos::Transaction;
use tnt_01_addressing::{
    agent_address, property_addresses, property_page_addresses, proposal_address, record_address,
    schema_address, FamilyDescriptor, HISTORY_PAGE, PIKE, SCHEMA, TRACK_AND_TRACE,
};
use tnt_02_payloads::{
    AnswerProposalBody, CreateProposalBody, CreateRecordBody, FinalizeRecordBody, PayloadAction,
    RevokeReporterBody, UpdatePropertiesBody,
};

use crate::domain::envelope::sign_action;
use crate::domain::session::Session;
use crate::error::ServiceError;

/// Contracts in scope for record transactions.
pub static RECORD_DISPATCH: [&FamilyDescriptor; 3] = [&PIKE, &TRACK_AND_TRACE, &SCHEMA];

/// Outcome of a committed `createRecord`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedRecord {
    pub record_id: String,
    pub transaction_ids: Vec<String>,
}

/// Fresh random record id.
pub fn new_record_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Current and history-page addresses for `names`, current pages first.
pub fn property_scope<S: AsRef<str>>(record_id: &str, names: &[S]) -> Vec<String> {
    property_addresses(record_id, names)
        .into_iter()
        .chain(property_page_addresses(record_id, names, HISTORY_PAGE))
        .map(Into::into)
        .collect()
}

pub fn create_record_transaction(
    session: &Session,
    body: CreateRecordBody,
) -> Result<Transaction, ServiceError> {
    let signer = session.signer()?;
    let record = record_address(&body.record_id).into_string();
    let schema = schema_address(&body.schema).into_string();
    let agent = agent_address(&signer.public_key_hex()).into_string();
    let names: Vec<&str> = body.properties.iter().map(|p| p.name.as_str()).collect();
    let properties = property_scope(&body.record_id, &names);

    let inputs = [record.clone(), schema, agent]
        .into_iter()
        .chain(properties.iter().cloned())
        .collect();
    let outputs = std::iter::once(record).chain(properties).collect();

    let action = PayloadAction::CreateRecord(body);
    sign_action(signer, &action, inputs, outputs, &RECORD_DISPATCH)
}

pub fn finalize_record_transaction(
    session: &Session,
    record_id: &str,
) -> Result<Transaction, ServiceError> {
    let signer = session.signer()?;
    let record = record_address(record_id).into_string();
    let agent = agent_address(&signer.public_key_hex()).into_string();

    let action = PayloadAction::FinalizeRecord(FinalizeRecordBody {
        record_id: record_id.to_string(),
    });
    sign_action(
        signer,
        &action,
        vec![record.clone(), agent],
        vec![record],
        &RECORD_DISPATCH,
    )
}

pub fn update_properties_transaction(
    session: &Session,
    body: UpdatePropertiesBody,
) -> Result<Transaction, ServiceError> {
    let signer = session.signer()?;
    let names: Vec<&str> = body.properties.iter().map(|p| p.name.as_str()).collect();
    let (inputs, outputs) = record_scope(
        &body.record_id,
        &agent_address(&signer.public_key_hex()).into_string(),
        &names,
    );

    let action = PayloadAction::UpdateProperties(body);
    sign_action(signer, &action, inputs, outputs, &RECORD_DISPATCH)
}

/// Offer ownership, custodianship or reporting rights to `receiving_agent`.
pub fn create_proposal_transaction(
    session: &Session,
    body: CreateProposalBody,
) -> Result<Transaction, ServiceError> {
    let signer = session.signer()?;
    let proposal = proposal_address(&body.record_id, &body.receiving_agent).into_string();
    let record = record_address(&body.record_id).into_string();
    let issuer = agent_address(&signer.public_key_hex()).into_string();
    let receiver = agent_address(&body.receiving_agent).into_string();
    let properties = property_scope(&body.record_id, &body.properties);

    let inputs = [proposal.clone(), record.clone(), issuer, receiver]
        .into_iter()
        .chain(properties.iter().cloned())
        .collect();
    let outputs = [proposal, record].into_iter().chain(properties).collect();

    let action = PayloadAction::CreateProposal(body);
    sign_action(signer, &action, inputs, outputs, &RECORD_DISPATCH)
}

/// Accept, reject or cancel a pending proposal.
///
/// `schema` and `properties` name the record type and the properties the
/// proposal covers; they only widen the declared address scope.
pub fn answer_proposal_transaction<S: AsRef<str>>(
    session: &Session,
    body: AnswerProposalBody,
    schema: &str,
    properties: &[S],
) -> Result<Transaction, ServiceError> {
    let signer = session.signer()?;
    let record = record_address(&body.record_id).into_string();
    let agent = agent_address(&signer.public_key_hex()).into_string();
    let proposal = proposal_address(&body.record_id, &body.receiving_agent).into_string();
    let schema = schema_address(schema).into_string();
    let properties = property_scope(&body.record_id, properties);

    let inputs = [record.clone(), agent, proposal.clone(), schema]
        .into_iter()
        .chain(properties.iter().cloned())
        .collect();
    let outputs = [record, proposal].into_iter().chain(properties).collect();

    let action = PayloadAction::AnswerProposal(body);
    sign_action(signer, &action, inputs, outputs, &RECORD_DISPATCH)
}

pub fn revoke_reporter_transaction(
    session: &Session,
    body: RevokeReporterBody,
) -> Result<Transaction, ServiceError> {
    let signer = session.signer()?;
    let (inputs, outputs) = record_scope(
        &body.record_id,
        &agent_address(&signer.public_key_hex()).into_string(),
        &body.properties,
    );

    let action = PayloadAction::RevokeReporter(body);
    sign_action(signer, &action, inputs, outputs, &RECORD_DISPATCH)
}

/// `[record, agent, props..]` in, `[record, props..]` out.
fn record_scope<S: AsRef<str>>(
    record_id: &str,
    agent: &str,
    names: &[S],
) -> (Vec<String>, Vec<String>) {
    let record = record_address(record_id).into_string();
    let properties = property_scope(record_id, names);

    let inputs = [record.clone(), agent.to_string()]
        .into_iter()
        .chain(properties.iter().cloned())
        .collect();
    let outputs = std::iter::once(record).chain(properties).collect();
    (inputs, outputs)
}
