//! `RegistrySource` implementation for `FilesystemRegistrySource`.

use std::fs;
use std::io;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::RegistrySource;

use super::FilesystemRegistrySource;

impl RegistrySource for FilesystemRegistrySource {
    fn read_registry(&self, path: &Path) -> Result<String, AppError> {
        let full_path = self.resolve_path(path);
        log::debug!("Reading configuration from {}", full_path.display());
        fs::read_to_string(&full_path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => AppError::ConfigNotFound(full_path.display().to_string()),
            io::ErrorKind::InvalidData => {
                AppError::parse_error(full_path.display().to_string(), "file is not valid UTF-8")
            }
            _ => AppError::from(err),
        })
    }

    fn registry_exists(&self, path: &Path) -> bool {
        self.resolve_path(path).is_file()
    }
}
