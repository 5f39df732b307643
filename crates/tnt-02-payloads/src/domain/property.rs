//! Property values and definitions, and their wire transforms.

use crate::error::PayloadError;
use serde::{Deserialize, Serialize};
use shared_protos::schema::property_definition;
use shared_protos::{LatLong, PropertyDefinition, PropertyValue};

/// Fixed-point scale applied to latitude and longitude before encoding.
pub const FLOAT_PRECISION: i64 = 1_000_000;

/// Property data types known to the Schema contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataType {
    Bytes,
    Boolean,
    Number,
    String,
    Enum,
    Struct,
    LatLong,
}

impl DataType {
    pub fn wire(self) -> property_definition::DataType {
        match self {
            Self::Bytes => property_definition::DataType::Bytes,
            Self::Boolean => property_definition::DataType::Boolean,
            Self::Number => property_definition::DataType::Number,
            Self::String => property_definition::DataType::String,
            Self::Enum => property_definition::DataType::Enum,
            Self::Struct => property_definition::DataType::Struct,
            Self::LatLong => property_definition::DataType::LatLong,
        }
    }
}

/// A reported property value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyData {
    Bytes(Vec<u8>),
    Boolean(bool),
    /// Integer value; the schema's `number_exponent` gives its scale.
    Number(i64),
    String(String),
    /// Index into the schema's enum options.
    Enum(u32),
    Struct(Vec<PropertyInput>),
    /// Degrees; scaled by [`FLOAT_PRECISION`] on encode.
    LatLong { latitude: f64, longitude: f64 },
}

impl PropertyData {
    pub fn data_type(&self) -> DataType {
        match self {
            Self::Bytes(_) => DataType::Bytes,
            Self::Boolean(_) => DataType::Boolean,
            Self::Number(_) => DataType::Number,
            Self::String(_) => DataType::String,
            Self::Enum(_) => DataType::Enum,
            Self::Struct(_) => DataType::Struct,
            Self::LatLong { .. } => DataType::LatLong,
        }
    }
}

/// A named property value as supplied by callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyInput {
    pub name: String,
    pub value: PropertyData,
}

impl PropertyInput {
    pub fn new(name: impl Into<String>, value: PropertyData) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Transform into the typed wire value.
    pub fn to_wire(&self) -> Result<PropertyValue, PayloadError> {
        let mut wire = PropertyValue {
            name: self.name.clone(),
            ..Default::default()
        };
        wire.set_data_type(self.value.data_type().wire());

        match &self.value {
            PropertyData::Bytes(bytes) => wire.bytes_value = bytes.clone(),
            PropertyData::Boolean(flag) => wire.boolean_value = *flag,
            PropertyData::Number(number) => wire.number_value = *number,
            PropertyData::String(text) => wire.string_value = text.clone(),
            PropertyData::Enum(index) => wire.enum_value = *index,
            PropertyData::Struct(fields) => {
                wire.struct_values = fields
                    .iter()
                    .map(PropertyInput::to_wire)
                    .collect::<Result<_, _>>()?;
            }
            PropertyData::LatLong {
                latitude,
                longitude,
            } => {
                wire.lat_long_value = Some(LatLong {
                    latitude: scale_degrees(&self.name, *latitude)?,
                    longitude: scale_degrees(&self.name, *longitude)?,
                });
            }
        }
        Ok(wire)
    }
}

/// Transform a list of property inputs, keeping order.
pub fn properties_to_wire(properties: &[PropertyInput]) -> Result<Vec<PropertyValue>, PayloadError> {
    properties.iter().map(PropertyInput::to_wire).collect()
}

fn scale_degrees(name: &str, degrees: f64) -> Result<i64, PayloadError> {
    if !degrees.is_finite() {
        return Err(PayloadError::InvalidProperty {
            name: name.to_string(),
            reason: format!("coordinate {degrees} is not finite"),
        });
    }
    Ok((degrees * FLOAT_PRECISION as f64).round() as i64)
}

/// A property definition within a record type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySchema {
    pub name: String,
    pub data_type: DataType,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub number_exponent: i32,
    #[serde(default)]
    pub enum_options: Vec<String>,
    #[serde(default)]
    pub struct_properties: Vec<PropertySchema>,
}

impl PropertySchema {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            required: false,
            description: String::new(),
            number_exponent: 0,
            enum_options: Vec::new(),
            struct_properties: Vec::new(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn to_wire(&self) -> PropertyDefinition {
        let mut wire = PropertyDefinition {
            name: self.name.clone(),
            required: self.required,
            description: self.description.clone(),
            number_exponent: self.number_exponent,
            enum_options: self.enum_options.clone(),
            struct_properties: self.struct_properties.iter().map(Self::to_wire).collect(),
            ..Default::default()
        };
        wire.set_data_type(self.data_type.wire());
        wire
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_number_value() {
        let wire = PropertyInput::new("weight", PropertyData::Number(42)).to_wire().unwrap();

        assert_eq!(wire.name, "weight");
        assert_eq!(wire.data_type(), property_definition::DataType::Number);
        assert_eq!(wire.number_value, 42);
    }

    #[test]
    fn test_lat_long_scaled() {
        let wire = PropertyInput::new(
            "location",
            PropertyData::LatLong {
                latitude: 44.982734,
                longitude: -93.272107,
            },
        )
        .to_wire()
        .unwrap();

        assert_eq!(
            wire.lat_long_value,
            Some(LatLong {
                latitude: 44_982_734,
                longitude: -93_272_107,
            })
        );
    }

    #[test]
    fn test_non_finite_coordinate_rejected() {
        let result = PropertyInput::new(
            "location",
            PropertyData::LatLong {
                latitude: f64::NAN,
                longitude: 0.0,
            },
        )
        .to_wire();

        assert!(matches!(result, Err(PayloadError::InvalidProperty { .. })));
    }

    #[test]
    fn test_struct_value_nested() {
        let input = PropertyInput::new(
            "dimensions",
            PropertyData::Struct(vec![
                PropertyInput::new("height", PropertyData::Number(3)),
                PropertyInput::new("unit", PropertyData::String("cm".into())),
            ]),
        );
        let wire = input.to_wire().unwrap();

        assert_eq!(wire.data_type(), property_definition::DataType::Struct);
        assert_eq!(wire.struct_values.len(), 2);
        assert_eq!(wire.struct_values[1].string_value, "cm");
    }

    #[test]
    fn test_schema_definition_to_wire() {
        let mut definition = PropertySchema::new("species", DataType::Enum).required();
        definition.enum_options = vec!["cod".into(), "tuna".into()];
        let wire = definition.to_wire();

        assert!(wire.required);
        assert_eq!(wire.data_type(), property_definition::DataType::Enum);
        assert_eq!(wire.enum_options, vec!["cod", "tuna"]);
    }

    #[test]
    fn test_property_input_from_json() {
        let input: PropertyInput = serde_json::from_value(serde_json::json!({
            "name": "location",
            "value": {"latLong": {"latitude": 1.5, "longitude": 2.25}}
        }))
        .unwrap();

        assert_eq!(input.value.data_type(), DataType::LatLong);
    }

    proptest! {
        #[test]
        fn prop_lat_long_within_one_micro_degree(lat in -90.0f64..90.0, long in -180.0f64..180.0) {
            let wire = PropertyInput::new("l", PropertyData::LatLong { latitude: lat, longitude: long })
                .to_wire()
                .unwrap();
            let scaled = wire.lat_long_value.unwrap();
            prop_assert!((scaled.latitude as f64 / FLOAT_PRECISION as f64 - lat).abs() <= 1e-6);
            prop_assert!((scaled.longitude as f64 / FLOAT_PRECISION as f64 - long).abs() <= 1e-6);
        }
    }
}
