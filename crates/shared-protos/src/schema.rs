//! # Schema Payload
//!
//! Grid schema contract: named property layouts that records must follow,
//! plus the property value message shared with Track-and-Trace.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SchemaPayload {
    #[prost(enumeration = "schema_payload::Action", tag = "1")]
    pub action: i32,
    #[prost(message, optional, tag = "2")]
    pub schema_create: Option<SchemaCreateAction>,
    #[prost(message, optional, tag = "3")]
    pub schema_update: Option<SchemaUpdateAction>,
}

pub mod schema_payload {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Action {
        Unset = 0,
        SchemaCreate = 1,
        SchemaUpdate = 2,
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SchemaCreateAction {
    #[prost(string, tag = "1")]
    pub schema_name: String,
    #[prost(string, tag = "2")]
    pub description: String,
    #[prost(message, repeated, tag = "3")]
    pub properties: Vec<PropertyDefinition>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SchemaUpdateAction {
    #[prost(string, tag = "1")]
    pub schema_name: String,
    #[prost(message, repeated, tag = "2")]
    pub properties: Vec<PropertyDefinition>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PropertyDefinition {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(enumeration = "property_definition::DataType", tag = "2")]
    pub data_type: i32,
    #[prost(bool, tag = "3")]
    pub required: bool,
    #[prost(string, tag = "4")]
    pub description: String,
    #[prost(sint32, tag = "5")]
    pub number_exponent: i32,
    #[prost(string, repeated, tag = "6")]
    pub enum_options: Vec<String>,
    #[prost(message, repeated, tag = "7")]
    pub struct_properties: Vec<PropertyDefinition>,
}

pub mod property_definition {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum DataType {
        Unset = 0,
        Bytes = 1,
        Boolean = 2,
        Number = 3,
        String = 4,
        Enum = 5,
        Struct = 6,
        LatLong = 7,
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PropertyValue {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(enumeration = "property_definition::DataType", tag = "2")]
    pub data_type: i32,
    #[prost(bytes = "vec", tag = "10")]
    pub bytes_value: Vec<u8>,
    #[prost(bool, tag = "11")]
    pub boolean_value: bool,
    #[prost(sint64, tag = "12")]
    pub number_value: i64,
    #[prost(string, tag = "13")]
    pub string_value: String,
    #[prost(uint32, tag = "14")]
    pub enum_value: u32,
    #[prost(message, repeated, tag = "15")]
    pub struct_values: Vec<PropertyValue>,
    #[prost(message, optional, tag = "16")]
    pub lat_long_value: Option<LatLong>,
}

/// Coordinates in millionths of a degree.
#[derive(Clone, Copy, PartialEq, Eq, ::prost::Message)]
pub struct LatLong {
    #[prost(sint64, tag = "1")]
    pub latitude: i64,
    #[prost(sint64, tag = "2")]
    pub longitude: i64,
}
