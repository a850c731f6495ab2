use serde::Serialize;

use crate::domain::{AppError, BenchSections, ProgramEnv};

/// Resolved sections of one benchmark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BenchmarkInfo {
    pub name: String,
    #[serde(flatten)]
    pub sections: BenchSections,
}

pub fn execute(env: &ProgramEnv, benchmark: &str) -> Result<BenchmarkInfo, AppError> {
    env.ensure_valid()?;
    if env.benchmark(benchmark).is_none() {
        return Err(AppError::BenchmarkNotFound(benchmark.to_string()));
    }
    Ok(BenchmarkInfo { name: benchmark.to_string(), sections: env.get_bench_sections(benchmark) })
}
