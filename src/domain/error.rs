use std::io;

use thiserror::Error;

use crate::domain::configuration::ValidationError;

/// Library-wide error type for sciml-bench operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Registry file does not exist at the given path.
    #[error("Configuration file not found: {0}")]
    ConfigNotFound(String),

    /// Registry document is unreadable or not a mapping at the top level.
    #[error("Failed to parse configuration {path}: {details}")]
    ConfigParse { path: String, details: String },

    /// Registry parsed but failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ValidationError),

    /// Benchmark name is not declared in the registry.
    #[error("Benchmark '{0}' not found in configuration")]
    BenchmarkNotFound(String),

    /// Dataset name is not declared in the registry.
    #[error("Dataset '{0}' not found in configuration")]
    DatasetNotFound(String),

    /// Dataset declares no download command.
    #[error("No download command configured for dataset '{0}'")]
    NoDownloadCommand(String),

    /// Output serialization failed.
    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

impl AppError {
    pub fn parse_error<P: Into<String>, D: ToString>(path: P, details: D) -> Self {
        AppError::ConfigParse { path: path.into(), details: details.to_string() }
    }

    /// Provide an `io::ErrorKind`-like view for callers mapping errors to exit paths.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::ConfigParse { .. } | AppError::Render(_) => io::ErrorKind::InvalidData,
            AppError::InvalidConfiguration(_) => io::ErrorKind::InvalidInput,
            AppError::ConfigNotFound(_)
            | AppError::BenchmarkNotFound(_)
            | AppError::DatasetNotFound(_)
            | AppError::NoDownloadCommand(_) => io::ErrorKind::NotFound,
        }
    }
}
