//! Typed generation front-end.
//!
//! Generates both artifacts from any [`FormSchema`] type whose shape is a
//! record.

use crate::error::{Error, Result};
use crate::export::FormArtifact;
use crate::field::FieldDescriptor;
use crate::jsonschema::{record_schema, JsonSchema};
use crate::options::Options;
use crate::synth::synthesize;
use crate::traits::FormSchema;
use crate::uischema::UiNode;

/// JSON Schema of `T` with default options.
pub fn generate_json_schema<T: FormSchema>() -> Result<JsonSchema> {
    generate_json_schema_with_options::<T>(&Options::default())
}

/// JSON Schema of `T`, announcing the draft selected in `options`.
pub fn generate_json_schema_with_options<T: FormSchema>(options: &Options) -> Result<JsonSchema> {
    let fields = root_fields::<T>()?;
    Ok(json_schema_from_fields(&fields, options))
}

/// UI schema of `T` with default options.
pub fn generate_ui_schema<T: FormSchema>() -> Result<UiNode> {
    generate_ui_schema_with_options::<T>(&Options::default())
}

/// UI schema of `T`.
pub fn generate_ui_schema_with_options<T: FormSchema>(options: &Options) -> Result<UiNode> {
    let fields = root_fields::<T>()?;
    Ok(synthesize(&fields, options))
}

/// Both artifacts of `T`.
pub fn generate<T: FormSchema>(options: &Options) -> Result<FormArtifact> {
    let fields = root_fields::<T>()?;
    Ok(artifact_from_fields(&fields, options))
}

/// Root JSON Schema for a record's fields.
pub(crate) fn json_schema_from_fields(fields: &[FieldDescriptor], options: &Options) -> JsonSchema {
    record_schema(fields).with_draft_url(options.draft.url())
}

pub(crate) fn artifact_from_fields(fields: &[FieldDescriptor], options: &Options) -> FormArtifact {
    FormArtifact::new(
        json_schema_from_fields(fields, options),
        synthesize(fields, options),
    )
}

fn root_fields<T: FormSchema>() -> Result<Vec<FieldDescriptor>> {
    let shape = T::field_shape();
    match shape.as_record() {
        Some(fields) => Ok(fields.to_vec()),
        None => Err(Error::UnsupportedRoot {
            type_name: T::type_name().to_string(),
            shape: shape.describe(),
        }),
    }
}
