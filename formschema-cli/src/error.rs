//! Error types for the CLI.
//!
//! This module defines the error types used throughout the CLI, each
//! carrying the path it concerns so messages point at the offending file.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Main error type for CLI operations.
#[derive(Debug, Error)]
pub enum CliError {
    /// Error reading an input document.
    #[error("Failed to read input: {0}")]
    Input(#[from] InputError),

    /// Error generating the artifacts.
    #[error("Failed to generate form: {0}")]
    Generate(#[from] formschema::Error),

    /// Error loading configuration.
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    /// Error writing output files.
    #[error("Failed to write output: {0}")]
    Write(#[from] WriteError),

    /// The artifact on disk differs from a fresh generation.
    #[error("Artifact is out of date: {path}")]
    Stale { path: PathBuf },

    /// A precondition of the command was not met.
    #[error("{0}")]
    Usage(String),
}

impl CliError {
    /// Process exit code for this error: 2 for a stale artifact, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Stale { .. } => 2,
            _ => 1,
        }
    }
}

/// Error reading an input document.
#[derive(Debug, Error)]
pub enum InputError {
    /// Input file does not exist.
    #[error("Input file not found: {path}")]
    NotFound { path: PathBuf },

    /// IO error reading the input.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file named explicitly but missing.
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    /// Invalid TOML syntax or shape.
    #[error("Invalid TOML in {path}: {message}")]
    InvalidToml { path: PathBuf, message: String },

    /// IO error reading config.
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `init` refused to overwrite an existing file.
    #[error("Configuration file already exists: {path} (use --force to overwrite)")]
    AlreadyExists { path: PathBuf },
}

/// Error writing output files.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to create directory.
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write file.
    #[error("Failed to write file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl InputError {
    /// Classify an IO error on `path`.
    pub fn from_io(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }
}

impl ConfigError {
    /// Create an invalid TOML error.
    pub fn invalid_toml(path: PathBuf, message: impl Into<String>) -> Self {
        Self::InvalidToml {
            path,
            message: message.into(),
        }
    }
}
