//! Generation from a JSON sample document.
//!
//! The sample's values are inspected to infer field shapes: objects become
//! records, arrays take the shape of their first element, and integral
//! numbers become integers. No field is required.

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Error, Result};
use crate::export::FormArtifact;
use crate::field::{FieldDescriptor, FieldShape};
use crate::generate::artifact_from_fields;
use crate::options::Options;

/// Generate both artifacts from a JSON object sample.
pub fn generate_from_json(bytes: &[u8], options: &Options) -> Result<FormArtifact> {
    let fields = fields_from_json(bytes)?;
    debug!(fields = fields.len(), "inferred fields from JSON sample");
    Ok(artifact_from_fields(&fields, options))
}

/// Infer the root field list of a JSON object sample.
pub fn fields_from_json(bytes: &[u8]) -> Result<Vec<FieldDescriptor>> {
    let value: Value = serde_json::from_slice(bytes).map_err(Error::InvalidJson)?;

    match value {
        Value::Object(map) => Ok(fields_from_object(&map)),
        other => Err(Error::NotJsonObject {
            found: json_type_name(&other),
        }),
    }
}

fn fields_from_object(map: &Map<String, Value>) -> Vec<FieldDescriptor> {
    map.iter()
        .map(|(key, value)| FieldDescriptor::new(key.clone(), shape_of(value)))
        .collect()
}

/// Shape of one sample value.
pub fn shape_of(value: &Value) -> FieldShape {
    match value {
        Value::Null => FieldShape::Null,
        Value::Bool(_) => FieldShape::Boolean,
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() || n.as_f64().is_some_and(|f| f.is_finite() && f.fract() == 0.0) {
                FieldShape::Integer
            } else {
                FieldShape::Number
            }
        }
        Value::String(_) => FieldShape::String,
        Value::Array(items) => {
            let element = items.first().map(shape_of).unwrap_or(FieldShape::Any);
            FieldShape::Array(Box::new(element))
        }
        Value::Object(map) => FieldShape::Record(fields_from_object(map)),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
