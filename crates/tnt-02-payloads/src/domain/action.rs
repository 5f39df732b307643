//! Contract actions and their static key table.

use crate::domain::property::{PropertyInput, PropertySchema};
use crate::error::PayloadError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use shared_protos::track_and_trace::{answer_proposal_action, proposal};
use std::fmt;
use std::str::FromStr;
use tnt_01_addressing::FamilyKey;

/// The contract family an action's payload belongs to.
pub use tnt_01_addressing::FamilyKey as PayloadFamily;

/// A key/value metadata entry on agents and organizations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub key: String,
    pub value: String,
}

impl Metadata {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Body of `createAgent` and `updateAgent`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentBody {
    #[serde(default)]
    pub org_id: String,
    pub public_key: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub metadata: Vec<Metadata>,
}

/// Body of `createOrganization` and `updateOrganization`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationBody {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub metadata: Vec<Metadata>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecordBody {
    pub record_id: String,
    pub schema: String,
    #[serde(default)]
    pub properties: Vec<PropertyInput>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalizeRecordBody {
    pub record_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePropertiesBody {
    pub record_id: String,
    pub properties: Vec<PropertyInput>,
}

/// Role transferred by a proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Owner,
    Custodian,
    Reporter,
}

impl Role {
    pub fn wire(self) -> proposal::Role {
        match self {
            Self::Owner => proposal::Role::Owner,
            Self::Custodian => proposal::Role::Custodian,
            Self::Reporter => proposal::Role::Reporter,
        }
    }
}

/// Answer given to a pending proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Response {
    Accept,
    Reject,
    Cancel,
}

impl Response {
    pub fn wire(self) -> answer_proposal_action::Response {
        match self {
            Self::Accept => answer_proposal_action::Response::Accept,
            Self::Reject => answer_proposal_action::Response::Reject,
            Self::Cancel => answer_proposal_action::Response::Cancel,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProposalBody {
    pub record_id: String,
    pub receiving_agent: String,
    pub role: Role,
    #[serde(default)]
    pub properties: Vec<String>,
    #[serde(default)]
    pub terms: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerProposalBody {
    pub record_id: String,
    pub receiving_agent: String,
    pub role: Role,
    pub response: Response,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevokeReporterBody {
    pub record_id: String,
    pub reporter_id: String,
    #[serde(default)]
    pub properties: Vec<String>,
}

/// Body of `createRecordType`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecordTypeBody {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub properties: Vec<PropertySchema>,
}

/// Body of `updateRecordType`. Properties are appended to the schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecordTypeBody {
    pub name: String,
    pub properties: Vec<PropertySchema>,
}

/// A contract action with its typed body.
#[derive(Debug, Clone, PartialEq)]
pub enum PayloadAction {
    CreateAgent(AgentBody),
    UpdateAgent(AgentBody),
    CreateOrganization(OrganizationBody),
    UpdateOrganization(OrganizationBody),
    CreateRecord(CreateRecordBody),
    FinalizeRecord(FinalizeRecordBody),
    UpdateProperties(UpdatePropertiesBody),
    CreateProposal(CreateProposalBody),
    AnswerProposal(AnswerProposalBody),
    RevokeReporter(RevokeReporterBody),
    CreateRecordType(CreateRecordTypeBody),
    UpdateRecordType(UpdateRecordTypeBody),
}

impl PayloadAction {
    pub fn key(&self) -> ActionKey {
        match self {
            Self::CreateAgent(_) => ActionKey::CreateAgent,
            Self::UpdateAgent(_) => ActionKey::UpdateAgent,
            Self::CreateOrganization(_) => ActionKey::CreateOrganization,
            Self::UpdateOrganization(_) => ActionKey::UpdateOrganization,
            Self::CreateRecord(_) => ActionKey::CreateRecord,
            Self::FinalizeRecord(_) => ActionKey::FinalizeRecord,
            Self::UpdateProperties(_) => ActionKey::UpdateProperties,
            Self::CreateProposal(_) => ActionKey::CreateProposal,
            Self::AnswerProposal(_) => ActionKey::AnswerProposal,
            Self::RevokeReporter(_) => ActionKey::RevokeReporter,
            Self::CreateRecordType(_) => ActionKey::CreateRecordType,
            Self::UpdateRecordType(_) => ActionKey::UpdateRecordType,
        }
    }

    pub fn family(&self) -> PayloadFamily {
        self.key().family()
    }

    /// Build an action from a key and a JSON body.
    pub fn from_json(key: ActionKey, data: serde_json::Value) -> Result<Self, PayloadError> {
        Ok(match key {
            ActionKey::CreateAgent => Self::CreateAgent(body(key, data)?),
            ActionKey::UpdateAgent => Self::UpdateAgent(body(key, data)?),
            ActionKey::CreateOrganization => Self::CreateOrganization(body(key, data)?),
            ActionKey::UpdateOrganization => Self::UpdateOrganization(body(key, data)?),
            ActionKey::CreateRecord => Self::CreateRecord(body(key, data)?),
            ActionKey::FinalizeRecord => Self::FinalizeRecord(body(key, data)?),
            ActionKey::UpdateProperties => Self::UpdateProperties(body(key, data)?),
            ActionKey::CreateProposal => Self::CreateProposal(body(key, data)?),
            ActionKey::AnswerProposal => Self::AnswerProposal(body(key, data)?),
            ActionKey::RevokeReporter => Self::RevokeReporter(body(key, data)?),
            ActionKey::CreateRecordType => Self::CreateRecordType(body(key, data)?),
            ActionKey::UpdateRecordType => Self::UpdateRecordType(body(key, data)?),
        })
    }
}

fn body<T: DeserializeOwned>(key: ActionKey, data: serde_json::Value) -> Result<T, PayloadError> {
    serde_json::from_value(data).map_err(|e| PayloadError::InvalidActionData {
        key: key.as_str().to_string(),
        reason: e.to_string(),
    })
}

/// Fieldless action identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKey {
    CreateAgent,
    UpdateAgent,
    CreateOrganization,
    UpdateOrganization,
    CreateRecord,
    FinalizeRecord,
    UpdateProperties,
    CreateProposal,
    AnswerProposal,
    RevokeReporter,
    CreateRecordType,
    UpdateRecordType,
}

impl ActionKey {
    pub const ALL: [ActionKey; 12] = [
        Self::CreateAgent,
        Self::UpdateAgent,
        Self::CreateOrganization,
        Self::UpdateOrganization,
        Self::CreateRecord,
        Self::FinalizeRecord,
        Self::UpdateProperties,
        Self::CreateProposal,
        Self::AnswerProposal,
        Self::RevokeReporter,
        Self::CreateRecordType,
        Self::UpdateRecordType,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::CreateAgent => "createAgent",
            Self::UpdateAgent => "updateAgent",
            Self::CreateOrganization => "createOrganization",
            Self::UpdateOrganization => "updateOrganization",
            Self::CreateRecord => "createRecord",
            Self::FinalizeRecord => "finalizeRecord",
            Self::UpdateProperties => "updateProperties",
            Self::CreateProposal => "createProposal",
            Self::AnswerProposal => "answerProposal",
            Self::RevokeReporter => "revokeReporter",
            Self::CreateRecordType => "createRecordType",
            Self::UpdateRecordType => "updateRecordType",
        }
    }

    pub fn family(self) -> PayloadFamily {
        match self {
            Self::CreateAgent
            | Self::UpdateAgent
            | Self::CreateOrganization
            | Self::UpdateOrganization => FamilyKey::Pike,
            Self::CreateRecordType | Self::UpdateRecordType => FamilyKey::Schema,
            Self::CreateRecord
            | Self::FinalizeRecord
            | Self::UpdateProperties
            | Self::CreateProposal
            | Self::AnswerProposal
            | Self::RevokeReporter => FamilyKey::TrackAndTrace,
        }
    }

    /// Enum tag of the action within its family's payload.
    pub fn tag(self) -> i32 {
        use shared_protos::pike::pike_payload::Action as Pike;
        use shared_protos::schema::schema_payload::Action as Schema;
        use shared_protos::track_and_trace::track_and_trace_payload::Action as Tnt;

        match self {
            Self::CreateAgent => Pike::CreateAgent as i32,
            Self::UpdateAgent => Pike::UpdateAgent as i32,
            Self::CreateOrganization => Pike::CreateOrganization as i32,
            Self::UpdateOrganization => Pike::UpdateOrganization as i32,
            Self::CreateRecord => Tnt::CreateRecord as i32,
            Self::FinalizeRecord => Tnt::FinalizeRecord as i32,
            Self::UpdateProperties => Tnt::UpdateProperties as i32,
            Self::CreateProposal => Tnt::CreateProposal as i32,
            Self::AnswerProposal => Tnt::AnswerProposal as i32,
            Self::RevokeReporter => Tnt::RevokeReporter as i32,
            Self::CreateRecordType => Schema::SchemaCreate as i32,
            Self::UpdateRecordType => Schema::SchemaUpdate as i32,
        }
    }
}

impl FromStr for ActionKey {
    type Err = PayloadError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == key)
            .ok_or_else(|| PayloadError::UnknownAction(key.to_string()))
    }
}

impl fmt::Display for ActionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
