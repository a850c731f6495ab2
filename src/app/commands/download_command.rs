use serde::Serialize;

use crate::domain::{AppError, ProgramEnv};

/// Download command resolved for one dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedDownload {
    pub dataset: String,
    pub end_point: String,
    pub command_name: String,
    pub command: String,
}

pub fn execute(env: &ProgramEnv, dataset: &str) -> Result<ResolvedDownload, AppError> {
    env.ensure_valid()?;
    let entry = env.dataset(dataset).ok_or_else(|| AppError::DatasetNotFound(dataset.into()))?;
    let command_name = entry
        .download_command
        .clone()
        .ok_or_else(|| AppError::NoDownloadCommand(dataset.into()))?;
    let command = env
        .get_download_command(dataset)
        .ok_or_else(|| AppError::NoDownloadCommand(dataset.into()))?;

    Ok(ResolvedDownload {
        dataset: dataset.to_string(),
        end_point: entry.end_point.clone().unwrap_or_default(),
        command_name,
        command: command.to_string(),
    })
}
