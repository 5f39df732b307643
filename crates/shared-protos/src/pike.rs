//! # Pike Payload
//!
//! Identity contract: organizations and the agents acting for them.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PikePayload {
    #[prost(enumeration = "pike_payload::Action", tag = "1")]
    pub action: i32,
    #[prost(message, optional, tag = "2")]
    pub create_agent: Option<CreateAgentAction>,
    #[prost(message, optional, tag = "3")]
    pub update_agent: Option<UpdateAgentAction>,
    #[prost(message, optional, tag = "4")]
    pub create_organization: Option<CreateOrganizationAction>,
    #[prost(message, optional, tag = "5")]
    pub update_organization: Option<UpdateOrganizationAction>,
}

pub mod pike_payload {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Action {
        Unset = 0,
        CreateAgent = 1,
        UpdateAgent = 2,
        CreateOrganization = 3,
        UpdateOrganization = 4,
    }
}

#[derive(Clone, PartialEq, Eq, ::prost::Message)]
pub struct KeyValueEntry {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(string, tag = "2")]
    pub value: String,
}

impl KeyValueEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateAgentAction {
    #[prost(string, tag = "1")]
    pub org_id: String,
    #[prost(string, tag = "2")]
    pub public_key: String,
    #[prost(bool, tag = "3")]
    pub active: bool,
    #[prost(string, repeated, tag = "4")]
    pub roles: Vec<String>,
    #[prost(message, repeated, tag = "5")]
    pub metadata: Vec<KeyValueEntry>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateAgentAction {
    #[prost(string, tag = "1")]
    pub org_id: String,
    #[prost(string, tag = "2")]
    pub public_key: String,
    #[prost(bool, tag = "3")]
    pub active: bool,
    #[prost(string, repeated, tag = "4")]
    pub roles: Vec<String>,
    #[prost(message, repeated, tag = "5")]
    pub metadata: Vec<KeyValueEntry>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateOrganizationAction {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub address: String,
    #[prost(message, repeated, tag = "4")]
    pub metadata: Vec<KeyValueEntry>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateOrganizationAction {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub address: String,
    #[prost(message, repeated, tag = "4")]
    pub metadata: Vec<KeyValueEntry>,
}
