//! Input documents and artifact generation.
//!
//! A [`Source`] names the document a form is generated from. The same
//! source drives both writing an artifact and checking that an artifact on
//! disk is still current.

use std::path::{Path, PathBuf};

use formschema::{generate_from_json, generate_from_openapi, FormArtifact, Options};
use serde_json::Value;

use crate::error::{CliResult, InputError};

/// Document a form is generated from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// JSON object sample.
    Sample(PathBuf),

    /// OpenAPI 3 document and the component schema to use.
    OpenApi { path: PathBuf, schema: String },
}

impl Source {
    pub fn path(&self) -> &Path {
        match self {
            Source::Sample(path) | Source::OpenApi { path, .. } => path,
        }
    }

    /// Read the document and generate both artifacts.
    pub fn generate(&self, options: &Options) -> CliResult<FormArtifact> {
        let bytes = read_input(self.path())?;
        let artifact = match self {
            Source::Sample(_) => generate_from_json(&bytes, options)?,
            Source::OpenApi { schema, .. } => generate_from_openapi(&bytes, schema, options)?,
        };
        Ok(artifact)
    }
}

fn read_input(path: &Path) -> CliResult<Vec<u8>> {
    std::fs::read(path).map_err(|e| InputError::from_io(path.to_path_buf(), e).into())
}

/// Outcome of comparing an artifact file with a fresh generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    UpToDate,
    Stale,
}

/// Compare the artifact stored at `path` with `expected`.
///
/// The comparison is structural, so formatting differences do not count.
/// A file that is not valid JSON is stale; a missing file is an error.
pub fn check_artifact(path: &Path, expected: &FormArtifact) -> CliResult<Freshness> {
    let bytes = read_input(path)?;
    let Ok(existing) = serde_json::from_slice::<Value>(&bytes) else {
        return Ok(Freshness::Stale);
    };

    if existing == expected.to_value()? {
        Ok(Freshness::UpToDate)
    } else {
        Ok(Freshness::Stale)
    }
}
