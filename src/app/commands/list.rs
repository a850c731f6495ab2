use serde::Serialize;

use crate::domain::{AppError, ProgramEnv};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BenchmarkSummary {
    pub name: String,
    pub is_example: bool,
    pub types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetSummary {
    pub name: String,
    pub end_point: Option<String>,
    pub download_command: Option<String>,
}

/// Benchmarks in document order with their resolved flag and types.
pub fn benchmarks(env: &ProgramEnv) -> Result<Vec<BenchmarkSummary>, AppError> {
    env.ensure_valid()?;
    Ok(env
        .benchmark_names()
        .into_iter()
        .map(|name| BenchmarkSummary {
            name: name.to_string(),
            is_example: env.get_bench_example_flag(name).unwrap_or(false),
            types: env.get_bench_types(name).unwrap_or_default().into_iter().collect(),
        })
        .collect())
}

/// Datasets in document order.
pub fn datasets(env: &ProgramEnv) -> Result<Vec<DatasetSummary>, AppError> {
    env.ensure_valid()?;
    Ok(env
        .datasets()
        .unwrap_or_default()
        .iter()
        .map(|(name, entry)| DatasetSummary {
            name: name.clone(),
            end_point: entry.end_point.clone(),
            download_command: entry.download_command.clone(),
        })
        .collect())
}
