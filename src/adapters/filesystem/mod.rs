//! Filesystem adapter for the registry port.

mod registry_source;

use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Filesystem-backed registry source.
///
/// Relative registry paths resolve against `root`; absolute paths are used
/// as given.
#[derive(Debug, Clone)]
pub struct FilesystemRegistrySource {
    root: PathBuf,
}

impl FilesystemRegistrySource {
    /// Create a source resolving relative paths against the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a source rooted at the current working directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    pub(crate) fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() { path.to_path_buf() } else { self.root.join(path) }
    }
}
