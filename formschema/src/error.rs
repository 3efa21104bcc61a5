//! Error types for the generation front-ends.
//!
//! The layout engine itself is total; errors only come from inspecting the
//! root type and from parsing external documents.

use thiserror::Error;

/// Errors returned by the schema generators.
#[derive(Debug, Error)]
pub enum Error {
    /// The root type is not a record.
    #[error("unsupported root type '{type_name}': expected a record, found {shape}")]
    UnsupportedRoot {
        type_name: String,
        shape: &'static str,
    },

    /// A JSON sample could not be parsed.
    #[error("invalid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// A JSON sample parsed, but its top level is not an object.
    #[error("expected a JSON object at the top level, found {found}")]
    NotJsonObject { found: &'static str },

    /// An OpenAPI document could not be parsed.
    #[error("invalid OpenAPI document: {0}")]
    InvalidOpenApi(String),

    /// The requested schema is missing from `components.schemas`.
    #[error("schema '{0}' not found in components.schemas")]
    SchemaNotFound(String),

    /// No type is registered under the requested name.
    #[error("unknown type '{0}'")]
    UnknownType(String),

    /// Serializing an artifact failed.
    #[error("failed to serialize artifact: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Result alias for generator operations.
pub type Result<T> = std::result::Result<T, Error>;
