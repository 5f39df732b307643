//! # Sabre Dispatch Payload
//!
//! Every contract call goes to the `sabre` transaction family, which loads
//! the named WebAssembly contract and hands it the inner payload.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SabrePayload {
    #[prost(enumeration = "sabre_payload::Action", tag = "1")]
    pub action: i32,
    #[prost(message, optional, tag = "4")]
    pub execute_contract: Option<ExecuteContractAction>,
}

pub mod sabre_payload {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Action {
        Unset = 0,
        CreateContract = 1,
        DeleteContract = 2,
        ExecuteContract = 3,
        CreateContractRegistry = 4,
        DeleteContractRegistry = 5,
        UpdateContractRegistryOwners = 6,
        CreateNamespaceRegistry = 7,
        DeleteNamespaceRegistry = 8,
        UpdateNamespaceRegistryOwners = 9,
        CreateNamespaceRegistryPermission = 10,
        DeleteNamespaceRegistryPermission = 11,
        CreateSmartPermission = 12,
        UpdateSmartPermission = 13,
        DeleteSmartPermission = 14,
    }
}

/// Names the target contract and repeats the contract-level address lists.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExecuteContractAction {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub version: String,
    #[prost(string, repeated, tag = "3")]
    pub inputs: Vec<String>,
    #[prost(string, repeated, tag = "4")]
    pub outputs: Vec<String>,
    #[prost(bytes = "vec", tag = "5")]
    pub payload: Vec<u8>,
}
