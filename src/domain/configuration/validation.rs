//! Registry validation: an ordered rule chain that stops at the first failure.

use super::program_env::ProgramEnv;

/// Reason a registry failed validation. `Display` is the stored message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing data mirrors.")]
    MissingDataMirrors,

    #[error("Missing datasets.")]
    MissingDatasets,

    #[error("Missing benchmarks.")]
    MissingBenchmarks,

    #[error("Missing download-commands.")]
    MissingDownloadCommands,

    #[error("Missing end-point for at least one dataset.")]
    MissingEndPoint,

    #[error("Invalid download command for at least one dataset.")]
    InvalidDownloadCommand,

    #[error("No datasets are linked to at least one benchmark.")]
    BenchmarkWithoutDatasets,
}

type Rule = fn(&ProgramEnv) -> Result<(), ValidationError>;

/// Rules in evaluation order. The order decides which message a registry
/// with several problems reports.
const RULES: [Rule; 6] = [
    require_mirrors,
    require_datasets,
    require_benchmarks,
    require_download_commands,
    check_dataset_records,
    check_benchmark_records,
];

/// Run every rule in order, returning the first failure.
pub fn validate(env: &ProgramEnv) -> Result<(), ValidationError> {
    RULES.iter().try_for_each(|rule| rule(env))
}

fn require(present: bool, error: ValidationError) -> Result<(), ValidationError> {
    if present { Ok(()) } else { Err(error) }
}

fn require_mirrors(env: &ProgramEnv) -> Result<(), ValidationError> {
    require(env.mirrors().is_some_and(|m| !m.is_empty()), ValidationError::MissingDataMirrors)
}

fn require_datasets(env: &ProgramEnv) -> Result<(), ValidationError> {
    require(env.datasets().is_some_and(|d| !d.is_empty()), ValidationError::MissingDatasets)
}

fn require_benchmarks(env: &ProgramEnv) -> Result<(), ValidationError> {
    require(env.benchmarks().is_some_and(|b| !b.is_empty()), ValidationError::MissingBenchmarks)
}

fn require_download_commands(env: &ProgramEnv) -> Result<(), ValidationError> {
    require(
        env.download_commands().is_some_and(|c| !c.is_empty()),
        ValidationError::MissingDownloadCommands,
    )
}

// Each dataset is checked for both conditions before moving to the next.
fn check_dataset_records(env: &ProgramEnv) -> Result<(), ValidationError> {
    let Some(commands) = env.download_commands() else {
        return Err(ValidationError::MissingDownloadCommands);
    };
    for (_, dataset) in env.datasets().unwrap_or_default() {
        if dataset.end_point.is_none() {
            return Err(ValidationError::MissingEndPoint);
        }
        if let Some(command) = &dataset.download_command {
            if !commands.contains(command) {
                return Err(ValidationError::InvalidDownloadCommand);
            }
        }
    }
    Ok(())
}

fn check_benchmark_records(env: &ProgramEnv) -> Result<(), ValidationError> {
    require(
        env.benchmarks().unwrap_or_default().iter().all(|(_, bench)| bench.datasets.is_some()),
        ValidationError::BenchmarkWithoutDatasets,
    )
}
