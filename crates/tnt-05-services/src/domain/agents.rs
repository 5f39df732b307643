//! Pike agent and organization transactions.

use shared_protos::Transaction;
use tnt_01_addressing::{agent_address, organization_address};
use tnt_02_payloads::{AgentBody, Metadata, OrganizationBody, PayloadAction};

use crate::domain::envelope::sign_action;
use crate::domain::session::Session;
use crate::error::ServiceError;

/// Register the session's key as an active agent named `name`.
///
/// An empty `org_id` registers the agent outside any organization.
pub fn create_agent_transaction(
    session: &Session,
    name: &str,
    org_id: &str,
) -> Result<Transaction, ServiceError> {
    let signer = session.signer()?;
    let public_key = signer.public_key_hex();
    let agent = agent_address(&public_key).into_string();

    let action = PayloadAction::CreateAgent(AgentBody {
        org_id: org_id.to_string(),
        public_key,
        active: true,
        roles: Vec::new(),
        metadata: vec![Metadata::new("name", name)],
    });
    sign_action(signer, &action, vec![agent.clone()], vec![agent], &[])
}

/// Change the roles or active flag of the agent `body.public_key`.
pub fn update_agent_transaction(
    session: &Session,
    body: AgentBody,
) -> Result<Transaction, ServiceError> {
    let signer = session.signer()?;
    let agent = agent_address(&body.public_key).into_string();

    let action = PayloadAction::UpdateAgent(body);
    sign_action(signer, &action, vec![agent.clone()], vec![agent], &[])
}

pub fn create_organization_transaction(
    session: &Session,
    body: OrganizationBody,
) -> Result<Transaction, ServiceError> {
    let signer = session.signer()?;
    let organization = organization_address(&body.id).into_string();
    let agent = agent_address(&signer.public_key_hex()).into_string();

    let action = PayloadAction::CreateOrganization(body);
    sign_action(
        signer,
        &action,
        vec![organization.clone(), agent.clone()],
        vec![organization, agent],
        &[],
    )
}

pub fn update_organization_transaction(
    session: &Session,
    body: OrganizationBody,
) -> Result<Transaction, ServiceError> {
    let signer = session.signer()?;
    let organization = organization_address(&body.id).into_string();
    let agent = agent_address(&signer.public_key_hex()).into_string();

    let action = PayloadAction::UpdateOrganization(body);
    sign_action(
        signer,
        &action,
        vec![organization.clone(), agent],
        vec![organization],
        &[],
    )
}
