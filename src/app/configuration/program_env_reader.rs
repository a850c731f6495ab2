//! Program environment loading from a registry source.

use std::path::Path;

use crate::domain::{AppError, ProgramEnv};
use crate::ports::RegistrySource;

/// Read, parse and validate the registry at `path`.
///
/// Parse failures are returned as errors. Validation failures are not: the
/// returned environment carries them and callers check `is_valid()`.
pub fn load_program_env<S: RegistrySource + ?Sized>(
    source: &S,
    path: &Path,
) -> Result<ProgramEnv, AppError> {
    if !source.registry_exists(path) {
        return Err(AppError::ConfigNotFound(path.display().to_string()));
    }
    let content = source.read_registry(path)?;
    let origin = path.display().to_string();
    log::debug!("Parsing configuration {} ({} bytes)", origin, content.len());
    ProgramEnv::parse(&content, &origin)
}
