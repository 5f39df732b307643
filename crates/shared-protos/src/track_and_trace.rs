//! # Track-and-Trace Payload
//!
//! Record lifecycle, property reporting and role-transfer proposals.

use crate::schema::PropertyValue;

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TrackAndTracePayload {
    #[prost(enumeration = "track_and_trace_payload::Action", tag = "1")]
    pub action: i32,
    /// Seconds since the Unix epoch at encode time.
    #[prost(uint64, tag = "2")]
    pub timestamp: u64,
    #[prost(message, optional, tag = "3")]
    pub create_record: Option<CreateRecordAction>,
    #[prost(message, optional, tag = "4")]
    pub finalize_record: Option<FinalizeRecordAction>,
    #[prost(message, optional, tag = "5")]
    pub update_properties: Option<UpdatePropertiesAction>,
    #[prost(message, optional, tag = "6")]
    pub create_proposal: Option<CreateProposalAction>,
    #[prost(message, optional, tag = "7")]
    pub answer_proposal: Option<AnswerProposalAction>,
    #[prost(message, optional, tag = "8")]
    pub revoke_reporter: Option<RevokeReporterAction>,
}

pub mod track_and_trace_payload {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Action {
        Unset = 0,
        CreateRecord = 1,
        FinalizeRecord = 2,
        UpdateProperties = 3,
        CreateProposal = 4,
        AnswerProposal = 5,
        RevokeReporter = 6,
    }
}

pub mod proposal {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Role {
        Owner = 0,
        Custodian = 1,
        Reporter = 2,
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateRecordAction {
    #[prost(string, tag = "1")]
    pub record_id: String,
    #[prost(string, tag = "2")]
    pub schema: String,
    #[prost(message, repeated, tag = "3")]
    pub properties: Vec<PropertyValue>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FinalizeRecordAction {
    #[prost(string, tag = "1")]
    pub record_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdatePropertiesAction {
    #[prost(string, tag = "1")]
    pub record_id: String,
    #[prost(message, repeated, tag = "2")]
    pub properties: Vec<PropertyValue>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateProposalAction {
    #[prost(string, tag = "1")]
    pub record_id: String,
    #[prost(string, tag = "2")]
    pub receiving_agent: String,
    #[prost(enumeration = "proposal::Role", tag = "3")]
    pub role: i32,
    #[prost(string, repeated, tag = "4")]
    pub properties: Vec<String>,
    #[prost(string, tag = "5")]
    pub terms: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AnswerProposalAction {
    #[prost(string, tag = "1")]
    pub record_id: String,
    #[prost(string, tag = "2")]
    pub receiving_agent: String,
    #[prost(enumeration = "proposal::Role", tag = "3")]
    pub role: i32,
    #[prost(enumeration = "answer_proposal_action::Response", tag = "4")]
    pub response: i32,
}

pub mod answer_proposal_action {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Response {
        Accept = 0,
        Reject = 1,
        Cancel = 2,
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RevokeReporterAction {
    #[prost(string, tag = "1")]
    pub record_id: String,
    #[prost(string, tag = "2")]
    pub reporter_id: String,
    #[prost(string, repeated, tag = "3")]
    pub properties: Vec<String>,
}
