//! Artifact output.
//!
//! Renders a [`FormArtifact`] as pretty JSON and writes it to disk, or hands
//! the text back in dry-run mode.

use std::path::{Path, PathBuf};

use formschema::FormArtifact;

use crate::error::{CliResult, WriteError};

/// Result of a write operation.
#[derive(Debug)]
pub enum WriteResult {
    /// File was written.
    Written { path: PathBuf, bytes: usize },

    /// Dry run, nothing touched the disk.
    DryRun { content: String, path: PathBuf },
}

/// Writes artifacts, honouring dry-run mode.
#[derive(Debug)]
pub struct FileWriter {
    dry_run: bool,
}

impl FileWriter {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Render `artifact` and write it to `path`, creating parent
    /// directories as needed.
    pub fn write_artifact(&self, path: &Path, artifact: &FormArtifact) -> CliResult<WriteResult> {
        let content = render(artifact)?;
        self.write(path, &content)
    }

    /// Write `content` to `path`.
    pub fn write(&self, path: &Path, content: &str) -> CliResult<WriteResult> {
        if self.dry_run {
            return Ok(WriteResult::DryRun {
                content: content.to_string(),
                path: path.to_path_buf(),
            });
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| WriteError::CreateDir {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        std::fs::write(path, content).map_err(|e| WriteError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(WriteResult::Written {
            path: path.to_path_buf(),
            bytes: content.len(),
        })
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }
}

impl WriteResult {
    /// Path written, or that would have been written.
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written { path, .. } | WriteResult::DryRun { path, .. } => path,
        }
    }

    pub fn was_written(&self) -> bool {
        matches!(self, WriteResult::Written { .. })
    }
}

/// Artifact file text: pretty JSON with a trailing newline.
pub fn render(artifact: &FormArtifact) -> CliResult<String> {
    let mut content = artifact.to_json_pretty()?;
    content.push('\n');
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use formschema::{generate_from_json, Options};
    use tempfile::TempDir;

    fn artifact() -> FormArtifact {
        generate_from_json(br#"{"name": "Ada"}"#, &Options::new()).unwrap()
    }

    #[test]
    fn test_write_artifact() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("form.json");

        let result = FileWriter::new(false)
            .write_artifact(&path, &artifact())
            .unwrap();

        assert!(result.was_written());
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.ends_with("}\n"));
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["uischema"]["type"], "VerticalLayout");
    }

    #[test]
    fn test_write_creates_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/dir/form.json");

        let result = FileWriter::new(false).write(&path, "{}").unwrap();

        assert!(matches!(result, WriteResult::Written { bytes: 2, .. }));
        assert!(path.exists());
    }

    #[test]
    fn test_dry_run_does_not_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("form.json");

        let writer = FileWriter::new(true);
        assert!(writer.is_dry_run());
        let result = writer.write_artifact(&path, &artifact()).unwrap();

        assert!(!path.exists());
        assert_eq!(result.path(), path.as_path());
        match result {
            WriteResult::DryRun { content, .. } => assert_eq!(content, render(&artifact()).unwrap()),
            other => panic!("Expected dry run, got {:?}", other),
        }
    }
}
