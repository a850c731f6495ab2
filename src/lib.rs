//! sciml-bench: benchmark registry loading, validation and resolution.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

use adapters::FilesystemRegistrySource;

pub use app::commands::download_command::ResolvedDownload;
pub use app::commands::info::BenchmarkInfo;
pub use app::commands::list::{BenchmarkSummary, DatasetSummary};
pub use app::commands::plan::{DownloadPlan, PlannedDataset};
pub use app::commands::validate::ValidateOutcome;
pub use domain::configuration::DEFAULT_BENCH_TYPES;
pub use domain::{
    AppError, BenchSections, DirectoryPaths, DownloadCommandTable, MirrorSet, ProgramEnv,
    ValidationError,
};
pub use ports::RegistrySource;

/// Load the registry at `path`, resolving relative paths against the current directory.
///
/// A registry that fails validation is still returned; check
/// `ProgramEnv::is_valid` before use.
pub fn load_config(path: impl AsRef<Path>) -> Result<ProgramEnv, AppError> {
    let source = FilesystemRegistrySource::current()?;
    app::load_program_env(&source, path.as_ref())
}

/// Load the registry at `path` and fail unless it validates.
pub fn load_valid_config(path: impl AsRef<Path>) -> Result<ProgramEnv, AppError> {
    let env = load_config(path)?;
    env.ensure_valid()?;
    Ok(env)
}

// =============================================================================
// Driver APIs
// =============================================================================

/// Check a loaded registry.
pub fn validate(env: &ProgramEnv) -> ValidateOutcome {
    app::commands::validate::execute(env)
}

/// Benchmarks in document order.
pub fn list_benchmarks(env: &ProgramEnv) -> Result<Vec<BenchmarkSummary>, AppError> {
    app::commands::list::benchmarks(env)
}

/// Datasets in document order.
pub fn list_datasets(env: &ProgramEnv) -> Result<Vec<DatasetSummary>, AppError> {
    app::commands::list::datasets(env)
}

/// Resolved sections of a known benchmark.
pub fn benchmark_info(env: &ProgramEnv, benchmark: &str) -> Result<BenchmarkInfo, AppError> {
    app::commands::info::execute(env, benchmark)
}

/// Download command and end-point for a dataset.
pub fn resolve_download(env: &ProgramEnv, dataset: &str) -> Result<ResolvedDownload, AppError> {
    app::commands::download_command::execute(env, dataset)
}

/// Datasets a benchmark needs and where each is expected under the dataset root.
pub fn plan_benchmark(env: &ProgramEnv, benchmark: &str) -> Result<DownloadPlan, AppError> {
    app::commands::plan::execute(env, benchmark)
}
