use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::RegistrySource;

/// In-memory registry source for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryRegistrySource {
    files: HashMap<PathBuf, String>,
}

impl MemoryRegistrySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registry(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }
}

impl RegistrySource for MemoryRegistrySource {
    fn read_registry(&self, path: &Path) -> Result<String, AppError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| AppError::ConfigNotFound(path.display().to_string()))
    }

    fn registry_exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }
}
