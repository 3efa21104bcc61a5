//! Generation from an OpenAPI 3.x document.
//!
//! Only `components.schemas` is read. `$ref`s of the form
//! `#/components/schemas/<Name>` are resolved; references that cannot be
//! resolved, or that loop back to a schema already being expanded, become a
//! bare object.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::export::FormArtifact;
use crate::field::{FieldDescriptor, FieldShape};
use crate::jsonschema::JsonSchema;
use crate::options::Options;
use crate::synth::synthesize;
use crate::tags::FieldTags;

const COMPONENT_REF_PREFIX: &str = "#/components/schemas/";

#[derive(Debug, Default, Deserialize)]
struct OpenApiDocument {
    #[serde(default)]
    components: Components,
}

#[derive(Debug, Default, Deserialize)]
struct Components {
    #[serde(default)]
    schemas: BTreeMap<String, Value>,
}

/// The subset of an OpenAPI schema object that maps onto JSON Schema.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OpenApiSchema {
    #[serde(rename = "type")]
    schema_type: Option<String>,
    #[serde(default)]
    properties: BTreeMap<String, OpenApiSchema>,
    items: Option<Box<OpenApiSchema>>,
    additional_properties: Option<AdditionalProperties>,
    #[serde(default)]
    required: Vec<String>,
    format: Option<String>,
    default: Option<Value>,
    #[serde(rename = "enum")]
    enum_values: Option<Vec<Value>>,
    description: Option<String>,
    title: Option<String>,
    #[serde(rename = "$ref")]
    reference: Option<String>,
    min_length: Option<u64>,
    max_length: Option<u64>,
    minimum: Option<f64>,
    maximum: Option<f64>,
    pattern: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum AdditionalProperties {
    Flag(bool),
    Schema(Box<OpenApiSchema>),
}

impl OpenApiSchema {
    fn additional_schema(&self) -> Option<&OpenApiSchema> {
        match &self.additional_properties {
            Some(AdditionalProperties::Schema(schema)) => Some(schema),
            _ => None,
        }
    }
}

/// Generate both artifacts for `components.schemas[schema_name]`.
pub fn generate_from_openapi(bytes: &[u8], schema_name: &str, options: &Options) -> Result<FormArtifact> {
    let document: OpenApiDocument =
        serde_json::from_slice(bytes).map_err(|e| Error::InvalidOpenApi(e.to_string()))?;

    if document.components.schemas.is_empty() {
        return Err(Error::InvalidOpenApi("no components.schemas found".to_string()));
    }

    let raw = document
        .components
        .schemas
        .get(schema_name)
        .ok_or_else(|| Error::SchemaNotFound(schema_name.to_string()))?;

    let target: OpenApiSchema = serde_json::from_value(raw.clone()).map_err(|e| {
        Error::InvalidOpenApi(format!("cannot parse schema '{}': {}", schema_name, e))
    })?;

    let mut schemas = BTreeMap::new();
    for (name, raw) in &document.components.schemas {
        match serde_json::from_value::<OpenApiSchema>(raw.clone()) {
            Ok(schema) => {
                schemas.insert(name.clone(), schema);
            }
            Err(err) => warn!(schema = %name, error = %err, "skipping unparsable component schema"),
        }
    }

    let resolver = Resolver { schemas: &schemas };

    let mut visiting = vec![schema_name.to_string()];
    let schema = resolver
        .json_schema(&target, &mut visiting)
        .with_draft_url(options.draft.url());

    let mut visiting = vec![schema_name.to_string()];
    let fields = resolver.fields(&target, &mut visiting);
    debug!(schema = %schema_name, fields = fields.len(), "converted OpenAPI schema");

    Ok(FormArtifact::new(schema, synthesize(&fields, options)))
}

struct Resolver<'a> {
    schemas: &'a BTreeMap<String, OpenApiSchema>,
}

impl<'a> Resolver<'a> {
    /// Look up a component reference. `None` when it does not point at a
    /// known component schema.
    fn lookup(&self, reference: &str) -> Option<(&'a str, &'a OpenApiSchema)> {
        let name = reference.strip_prefix(COMPONENT_REF_PREFIX)?;
        self.schemas
            .get_key_value(name)
            .map(|(name, schema)| (name.as_str(), schema))
    }

    /// Run `f` on the target of `reference`, or return `None` when it is
    /// unresolvable or already being expanded.
    fn follow<T>(
        &self,
        reference: &str,
        visiting: &mut Vec<String>,
        f: impl FnOnce(&Self, &'a OpenApiSchema, &mut Vec<String>) -> T,
    ) -> Option<T> {
        let Some((name, target)) = self.lookup(reference) else {
            debug!(reference = %reference, "unresolvable reference");
            return None;
        };

        if visiting.iter().any(|v| v == name) {
            debug!(reference = %reference, "cyclic reference");
            return None;
        }

        visiting.push(name.to_string());
        let out = f(self, target, visiting);
        visiting.pop();
        Some(out)
    }

    fn json_schema(&self, schema: &OpenApiSchema, visiting: &mut Vec<String>) -> JsonSchema {
        if let Some(reference) = &schema.reference {
            return self
                .follow(reference, visiting, |r, target, v| r.json_schema(target, v))
                .unwrap_or_else(JsonSchema::object);
        }

        let properties = (!schema.properties.is_empty()).then(|| {
            schema
                .properties
                .iter()
                .map(|(name, prop)| (name.clone(), self.json_schema(prop, visiting)))
                .collect()
        });

        JsonSchema {
            schema_type: schema.schema_type.clone(),
            title: schema.title.clone(),
            description: schema.description.clone(),
            properties,
            items: schema
                .items
                .as_deref()
                .map(|items| Box::new(self.json_schema(items, visiting))),
            additional_properties: schema
                .additional_schema()
                .map(|extra| Box::new(self.json_schema(extra, visiting))),
            required: schema.required.clone(),
            format: schema.format.clone(),
            default: schema.default.clone(),
            enum_values: schema.enum_values.clone().filter(|values| !values.is_empty()),
            min_length: schema.min_length,
            max_length: schema.max_length,
            minimum: schema.minimum,
            maximum: schema.maximum,
            pattern: schema.pattern.clone(),
            ..JsonSchema::default()
        }
    }

    fn fields(&self, schema: &OpenApiSchema, visiting: &mut Vec<String>) -> Vec<FieldDescriptor> {
        if let Some(reference) = &schema.reference {
            return self
                .follow(reference, visiting, |r, target, v| r.fields(target, v))
                .unwrap_or_default();
        }

        schema
            .properties
            .iter()
            .map(|(name, prop)| {
                let mut tags = FieldTags::new().with_required(schema.required.contains(name));
                tags.description = prop.description.clone();
                FieldDescriptor::new(name.clone(), self.shape(prop, visiting)).with_tags(tags)
            })
            .collect()
    }

    fn shape(&self, schema: &OpenApiSchema, visiting: &mut Vec<String>) -> FieldShape {
        if let Some(reference) = &schema.reference {
            return self
                .follow(reference, visiting, |r, target, v| r.shape(target, v))
                .unwrap_or(FieldShape::Object);
        }

        match schema.schema_type.as_deref() {
            Some("string") => match (&schema.enum_values, schema.format.as_deref()) {
                (Some(values), _) if !values.is_empty() => FieldShape::Enum(
                    values
                        .iter()
                        .map(|v| match v {
                            Value::String(s) => s.clone(),
                            other => other.to_string(),
                        })
                        .collect(),
                ),
                (_, Some("date-time")) => FieldShape::Timestamp,
                _ => FieldShape::String,
            },
            Some("integer") => FieldShape::Integer,
            Some("number") => FieldShape::Number,
            Some("boolean") => FieldShape::Boolean,
            Some("null") => FieldShape::Null,
            Some("array") => FieldShape::Array(Box::new(
                schema
                    .items
                    .as_deref()
                    .map(|items| self.shape(items, visiting))
                    .unwrap_or(FieldShape::Any),
            )),
            Some("object") | None if !schema.properties.is_empty() => {
                FieldShape::Record(self.fields(schema, visiting))
            }
            Some("object") => match schema.additional_schema() {
                Some(extra) => FieldShape::Map(Box::new(self.shape(extra, visiting))),
                None => FieldShape::Object,
            },
            _ => FieldShape::Any,
        }
    }
}
