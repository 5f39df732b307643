//! Payload encoding.

use crate::domain::action::{ActionKey, AgentBody, Metadata, OrganizationBody, PayloadAction};
use crate::domain::property::properties_to_wire;
use crate::error::PayloadError;
use shared_protos::pike::{
    CreateAgentAction, CreateOrganizationAction, KeyValueEntry, PikePayload, UpdateAgentAction,
    UpdateOrganizationAction,
};
use shared_protos::schema::{SchemaCreateAction, SchemaPayload, SchemaUpdateAction};
use shared_protos::track_and_trace::{
    AnswerProposalAction, CreateProposalAction, CreateRecordAction, FinalizeRecordAction,
    RevokeReporterAction, TrackAndTracePayload, UpdatePropertiesAction,
};
use shared_protos::Message;
use tracing::trace;

/// Org id given to agents created without an organization.
pub const NO_ORGANIZATION: &str = "000000000";

/// Encode `action`, stamped with the current Unix time.
pub fn encode(action: &PayloadAction) -> Result<Vec<u8>, PayloadError> {
    let now = chrono::Utc::now().timestamp().max(0) as u64;
    encode_at(action, now)
}

/// Encode an action given by its string key and JSON body.
///
/// The key is resolved before the body is looked at.
pub fn encode_key(key: &str, data: serde_json::Value) -> Result<Vec<u8>, PayloadError> {
    let key: ActionKey = key.parse()?;
    encode(&PayloadAction::from_json(key, data)?)
}

/// Encode `action` with an explicit timestamp (seconds since the epoch).
///
/// Only the Track-and-Trace payload carries a timestamp.
pub fn encode_at(action: &PayloadAction, timestamp: u64) -> Result<Vec<u8>, PayloadError> {
    let key = action.key();
    let bytes = match action {
        PayloadAction::CreateAgent(body) => pike(key, |p| {
            p.create_agent = Some(CreateAgentAction {
                org_id: if body.org_id.is_empty() {
                    NO_ORGANIZATION.to_string()
                } else {
                    body.org_id.clone()
                },
                public_key: body.public_key.clone(),
                active: body.active,
                roles: body.roles.clone(),
                metadata: entries(&body.metadata),
            })
        }),
        PayloadAction::UpdateAgent(AgentBody {
            org_id,
            public_key,
            active,
            roles,
            metadata,
        }) => pike(key, |p| {
            p.update_agent = Some(UpdateAgentAction {
                org_id: org_id.clone(),
                public_key: public_key.clone(),
                active: *active,
                roles: roles.clone(),
                metadata: entries(metadata),
            })
        }),
        PayloadAction::CreateOrganization(body) => pike(key, |p| {
            p.create_organization = Some(CreateOrganizationAction {
                id: body.id.clone(),
                name: body.name.clone(),
                address: body.address.clone(),
                metadata: entries(&body.metadata),
            })
        }),
        PayloadAction::UpdateOrganization(OrganizationBody {
            id,
            name,
            address,
            metadata,
        }) => pike(key, |p| {
            p.update_organization = Some(UpdateOrganizationAction {
                id: id.clone(),
                name: name.clone(),
                address: address.clone(),
                metadata: entries(metadata),
            })
        }),
        PayloadAction::CreateRecord(body) => {
            let properties = properties_to_wire(&body.properties)?;
            track_and_trace(key, timestamp, |p| {
                p.create_record = Some(CreateRecordAction {
                    record_id: body.record_id.clone(),
                    schema: body.schema.clone(),
                    properties,
                })
            })
        }
        PayloadAction::FinalizeRecord(body) => track_and_trace(key, timestamp, |p| {
            p.finalize_record = Some(FinalizeRecordAction {
                record_id: body.record_id.clone(),
            })
        }),
        PayloadAction::UpdateProperties(body) => {
            let properties = properties_to_wire(&body.properties)?;
            track_and_trace(key, timestamp, |p| {
                p.update_properties = Some(UpdatePropertiesAction {
                    record_id: body.record_id.clone(),
                    properties,
                })
            })
        }
        PayloadAction::CreateProposal(body) => track_and_trace(key, timestamp, |p| {
            let mut proposal = CreateProposalAction {
                record_id: body.record_id.clone(),
                receiving_agent: body.receiving_agent.clone(),
                properties: body.properties.clone(),
                terms: body.terms.clone(),
                ..Default::default()
            };
            proposal.set_role(body.role.wire());
            p.create_proposal = Some(proposal);
        }),
        PayloadAction::AnswerProposal(body) => track_and_trace(key, timestamp, |p| {
            let mut answer = AnswerProposalAction {
                record_id: body.record_id.clone(),
                receiving_agent: body.receiving_agent.clone(),
                ..Default::default()
            };
            answer.set_role(body.role.wire());
            answer.set_response(body.response.wire());
            p.answer_proposal = Some(answer);
        }),
        PayloadAction::RevokeReporter(body) => track_and_trace(key, timestamp, |p| {
            p.revoke_reporter = Some(RevokeReporterAction {
                record_id: body.record_id.clone(),
                reporter_id: body.reporter_id.clone(),
                properties: body.properties.clone(),
            })
        }),
        PayloadAction::CreateRecordType(body) => schema(key, |p| {
            p.schema_create = Some(SchemaCreateAction {
                schema_name: body.name.clone(),
                description: body.description.clone(),
                properties: body.properties.iter().map(|d| d.to_wire()).collect(),
            })
        }),
        PayloadAction::UpdateRecordType(body) => schema(key, |p| {
            p.schema_update = Some(SchemaUpdateAction {
                schema_name: body.name.clone(),
                properties: body.properties.iter().map(|d| d.to_wire()).collect(),
            })
        }),
    };

    trace!(action = %key, family = %key.family(), size = bytes.len(), "Encoded payload");
    Ok(bytes)
}

fn entries(metadata: &[Metadata]) -> Vec<KeyValueEntry> {
    metadata
        .iter()
        .map(|m| KeyValueEntry::new(m.key.clone(), m.value.clone()))
        .collect()
}

fn pike(key: ActionKey, fill: impl FnOnce(&mut PikePayload)) -> Vec<u8> {
    let mut payload = PikePayload {
        action: key.tag(),
        ..Default::default()
    };
    fill(&mut payload);
    payload.encode_to_vec()
}

fn schema(key: ActionKey, fill: impl FnOnce(&mut SchemaPayload)) -> Vec<u8> {
    let mut payload = SchemaPayload {
        action: key.tag(),
        ..Default::default()
    };
    fill(&mut payload);
    payload.encode_to_vec()
}

fn track_and_trace(
    key: ActionKey,
    timestamp: u64,
    fill: impl FnOnce(&mut TrackAndTracePayload),
) -> Vec<u8> {
    let mut payload = TrackAndTracePayload {
        action: key.tag(),
        timestamp,
        ..Default::default()
    };
    fill(&mut payload);
    payload.encode_to_vec()
}
