//! JSON Schema model and type inference.
//!
//! [`json_schema_for_shape`] is a total switch from a [`FieldShape`] to a
//! draft-07 compatible [`JsonSchema`]. Field tags are layered on afterwards
//! by [`apply_field_tags`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::field::{FieldDescriptor, FieldShape};
use crate::tags::{parse_default_value, parse_enum_values, FieldTags};

/// A JSON Schema node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JsonSchema {
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, JsonSchema>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<JsonSchema>>,

    #[serde(rename = "additionalProperties", skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<Box<JsonSchema>>,

    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub required: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,

    #[serde(rename = "const", skip_serializing_if = "Option::is_none")]
    pub constant: Option<Value>,

    #[serde(rename = "minLength", skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,

    #[serde(rename = "maxLength", skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl JsonSchema {
    /// A schema with only `type` set.
    pub fn of_type(schema_type: &str) -> Self {
        Self {
            schema_type: Some(schema_type.to_string()),
            ..Self::default()
        }
    }

    /// An object schema with no declared properties.
    pub fn object() -> Self {
        Self::of_type("object")
    }

    /// An array schema with the given item schema.
    pub fn array(items: JsonSchema) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::of_type("array")
        }
    }

    /// Announce the draft via `$schema`.
    pub fn with_draft_url(mut self, url: &str) -> Self {
        self.schema = Some(url.to_string());
        self
    }
}

/// Infer the schema of a shape.
pub fn json_schema_for_shape(shape: &FieldShape) -> JsonSchema {
    match shape {
        FieldShape::String => JsonSchema::of_type("string"),
        FieldShape::Boolean => JsonSchema::of_type("boolean"),
        FieldShape::Integer | FieldShape::Unsigned => JsonSchema::of_type("integer"),
        FieldShape::Number => JsonSchema::of_type("number"),
        FieldShape::Timestamp => JsonSchema {
            format: Some("date-time".to_string()),
            ..JsonSchema::of_type("string")
        },
        FieldShape::Enum(variants) => JsonSchema {
            enum_values: Some(variants.iter().cloned().map(Value::String).collect()),
            ..JsonSchema::of_type("string")
        },
        FieldShape::Array(elem) => JsonSchema::array(json_schema_for_shape(elem)),
        FieldShape::Map(value) => JsonSchema {
            additional_properties: Some(Box::new(json_schema_for_shape(value))),
            ..JsonSchema::object()
        },
        FieldShape::Object => JsonSchema::object(),
        FieldShape::Record(fields) => record_schema(fields),
        FieldShape::Optional(inner) => json_schema_for_shape(inner),
        FieldShape::Null => JsonSchema::of_type("null"),
        FieldShape::Any => JsonSchema::default(),
    }
}

/// Object schema for a record; `required` follows declaration order.
pub fn record_schema(fields: &[FieldDescriptor]) -> JsonSchema {
    let mut properties = BTreeMap::new();
    let mut required = Vec::new();

    for field in fields {
        let mut schema = json_schema_for_shape(&field.shape);
        apply_field_tags(&mut schema, &field.tags, &field.shape);
        properties.insert(field.name.clone(), schema);

        if field.tags.required {
            required.push(field.name.clone());
        }
    }

    JsonSchema {
        properties: Some(properties),
        required,
        ..JsonSchema::object()
    }
}

/// Layer tag-driven keywords on top of an inferred schema.
pub fn apply_field_tags(schema: &mut JsonSchema, tags: &FieldTags, shape: &FieldShape) {
    if let Some(raw) = tags.default.as_deref() {
        schema.default = Some(parse_default_value(raw, shape));
    }

    if let Some(raw) = tags.enum_values.as_deref() {
        let values = parse_enum_values(raw);
        if !values.is_empty() {
            schema.enum_values = Some(values);
        }
    }

    if let Some(format) = tags.format.as_deref().filter(|f| !f.is_empty()) {
        schema.format = Some(format.to_string());
    }

    if let Some(description) = tags.description.as_deref().filter(|d| !d.is_empty()) {
        schema.description = Some(description.to_string());
    }

    if tags.min_length.is_some() {
        schema.min_length = tags.min_length;
    }
    if tags.max_length.is_some() {
        schema.max_length = tags.max_length;
    }
    if tags.minimum.is_some() {
        schema.minimum = tags.minimum;
    }
    if tags.maximum.is_some() {
        schema.maximum = tags.maximum;
    }

    if let Some(pattern) = tags.pattern.as_deref().filter(|p| !p.is_empty()) {
        schema.pattern = Some(pattern.to_string());
    }
}
