//! Dataset resolution for a benchmark run.
//!
//! Lists what a downloader has to materialize before the benchmark can run
//! and where each dataset is expected to land. Nothing is downloaded here.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::{AppError, ProgramEnv};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadPlan {
    pub benchmark: String,
    pub dataset_root: PathBuf,
    pub output_dir: PathBuf,
    pub dependencies: Vec<String>,
    pub datasets: Vec<PlannedDataset>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedDataset {
    pub name: String,
    pub end_point: String,
    pub download_command: Option<String>,
    pub target_dir: PathBuf,
}

pub fn execute(env: &ProgramEnv, benchmark: &str) -> Result<DownloadPlan, AppError> {
    env.ensure_valid()?;
    if env.benchmark(benchmark).is_none() {
        return Err(AppError::BenchmarkNotFound(benchmark.to_string()));
    }

    let sections = env.get_bench_sections(benchmark);
    let directories = env.directories();

    let datasets = sections
        .datasets
        .unwrap_or_default()
        .into_iter()
        .map(|name| {
            let entry = env.dataset(&name).ok_or_else(|| AppError::DatasetNotFound(name.clone()))?;
            Ok(PlannedDataset {
                end_point: entry.end_point.clone().unwrap_or_default(),
                download_command: env.get_download_command(&name).map(String::from),
                target_dir: directories.dataset_path(&name),
                name,
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    log::debug!("Resolved {} dataset(s) for benchmark {}", datasets.len(), benchmark);

    Ok(DownloadPlan {
        benchmark: benchmark.to_string(),
        dataset_root: directories.dataset_dir.clone(),
        output_dir: directories.output_dir.join(benchmark),
        dependencies: sections.dependencies.unwrap_or_default().into_iter().collect(),
        datasets,
    })
}
