//! CLI Adapter.

mod inspect;
mod validate;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::adapters::FilesystemRegistrySource;
use crate::app::commands::OutputFormat;
use crate::app::load_program_env;
use crate::domain::{AppError, ProgramEnv};

#[derive(Parser)]
#[command(name = "sciml-bench")]
#[command(version)]
#[command(about = "Inspect and validate the sciml-bench benchmark registry", long_about = None)]
struct Cli {
    /// Path to the registry document
    #[arg(short, long, global = true, env = "SCIML_BENCH_CONFIG", default_value = "config.yml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the registry and report the first problem found
    #[clap(visible_alias = "v")]
    Validate,
    /// List benchmarks, or datasets with --datasets
    #[clap(visible_alias = "ls")]
    List {
        /// List datasets instead of benchmarks
        #[arg(short, long)]
        datasets: bool,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Show the resolved sections of a benchmark
    Info {
        /// Benchmark name
        benchmark: String,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Show the download command configured for a dataset
    #[clap(name = "download-command", visible_alias = "dc")]
    DownloadCommand {
        /// Dataset name
        dataset: String,
    },
    /// Resolve which datasets a benchmark needs and where they are expected
    Plan {
        /// Benchmark name
        benchmark: String,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<i32, AppError> = load(&cli.config).and_then(|env| match cli.command {
        Commands::Validate => Ok(validate::run_validate(&env)),
        Commands::List { datasets, format } => inspect::run_list(&env, datasets, format).map(|_| 0),
        Commands::Info { benchmark, format } => {
            inspect::run_info(&env, &benchmark, format).map(|_| 0)
        }
        Commands::DownloadCommand { dataset } => {
            inspect::run_download_command(&env, &dataset).map(|_| 0)
        }
        Commands::Plan { benchmark, format } => {
            inspect::run_plan(&env, &benchmark, format).map(|_| 0)
        }
    });

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn load(config: &Path) -> Result<ProgramEnv, AppError> {
    let source = FilesystemRegistrySource::current()?;
    load_program_env(&source, config)
}
