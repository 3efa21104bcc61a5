//! # formschema-cli
//!
//! CLI library for generating JSON Schema and JSON Forms UI schema
//! artifacts from JSON samples and OpenAPI documents.
//!
//! ## Architecture
//!
//! - [`config`] - `formschema.toml` loading and CLI overrides
//! - [`source`] - Input documents, generation and freshness checks
//! - [`writer`] - Artifact output and dry-run support
//! - [`error`] - Error types and exit codes

pub mod config;
pub mod error;
pub mod source;
pub mod writer;

pub use config::{Config, ConfigManager};
pub use error::{CliError, CliResult};
pub use source::{check_artifact, Freshness, Source};
pub use writer::FileWriter;
