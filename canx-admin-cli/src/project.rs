//! Target-project file placement
//!
//! Generated files are placed through [`ArtifactSink`] so commands never
//! touch the file system directly and tests can substitute an in-memory
//! sink. The on-disk implementation never overwrites: an existing file is a
//! reported skip, not an error.

use crate::scaffold::GeneratedFile;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Result of placing one generated file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// File was written
    Created,
    /// File already existed and was left untouched
    Skipped,
}

/// Destination for generated files
pub trait ArtifactSink {
    /// Place one generated file, creating parent directories as needed
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation or the write itself fails.
    /// An already-existing file is not an error; it yields
    /// [`WriteOutcome::Skipped`].
    fn place(&mut self, file: &GeneratedFile) -> Result<WriteOutcome>;
}

/// A CanxJS project directory on disk
pub struct ProjectDir {
    root: PathBuf,
}

impl ProjectDir {
    /// Open a project rooted at the given directory
    #[must_use]
    pub const fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Open the project in the current working directory
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn current() -> Result<Self> {
        let root = std::env::current_dir().context("Failed to get current directory")?;
        Ok(Self::new(root))
    }
}

impl ArtifactSink for ProjectDir {
    fn place(&mut self, file: &GeneratedFile) -> Result<WriteOutcome> {
        let full_path = self.root.join(&file.path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        if full_path.exists() {
            return Ok(WriteOutcome::Skipped);
        }

        fs::write(&full_path, &file.content)
            .with_context(|| format!("Failed to write file: {}", full_path.display()))?;

        Ok(WriteOutcome::Created)
    }
}
