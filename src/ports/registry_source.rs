//! Registry document access.

use std::path::Path;

use crate::domain::AppError;

/// Port for reading the registry document.
///
/// Implementations return `AppError::ConfigNotFound` for a missing document
/// and `AppError::Io` for any other read failure.
pub trait RegistrySource {
    /// Read the registry document as UTF-8 text.
    fn read_registry(&self, path: &Path) -> Result<String, AppError>;

    /// Check whether a registry document exists at `path`.
    fn registry_exists(&self, path: &Path) -> bool;
}
