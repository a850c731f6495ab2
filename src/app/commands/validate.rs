use serde::Serialize;

use crate::domain::{DirectoryPaths, Mirror, ProgramEnv};

/// Result of checking a loaded registry.
#[derive(Debug, Clone, Serialize)]
pub struct ValidateOutcome {
    pub valid: bool,
    pub error: Option<String>,
    pub directories: DirectoryPaths,
    pub mirrors: Vec<Mirror>,
    pub download_commands: Vec<String>,
    pub benchmarks: usize,
    pub datasets: usize,
}

impl ValidateOutcome {
    pub fn exit_code(&self) -> i32 {
        if self.valid { 0 } else { 1 }
    }
}

pub fn execute(env: &ProgramEnv) -> ValidateOutcome {
    let (valid, error) = env.is_config_valid();
    ValidateOutcome {
        valid,
        error,
        directories: env.directories().clone(),
        mirrors: env.mirrors().map(|set| set.iter().cloned().collect()).unwrap_or_default(),
        download_commands: env
            .download_commands()
            .map(|table| table.iter().map(|(name, _)| name.to_string()).collect())
            .unwrap_or_default(),
        benchmarks: env.benchmark_names().len(),
        datasets: env.dataset_names().len(),
    }
}
