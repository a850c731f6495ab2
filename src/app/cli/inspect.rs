use crate::app::commands::output::{join_names, to_json};
use crate::app::commands::{OutputFormat, download_command, info, list, plan};
use crate::domain::{AppError, ProgramEnv};

pub(super) fn run_list(
    env: &ProgramEnv,
    datasets: bool,
    format: OutputFormat,
) -> Result<(), AppError> {
    if datasets {
        let summaries = list::datasets(env)?;
        match format {
            OutputFormat::Json => println!("{}", to_json(&summaries)?),
            OutputFormat::Text => {
                for dataset in summaries {
                    let command = dataset.download_command.as_deref().unwrap_or("-");
                    println!(
                        "{}\t{}\t{}",
                        dataset.name,
                        dataset.end_point.as_deref().unwrap_or("-"),
                        command
                    );
                }
            }
        }
        return Ok(());
    }

    let summaries = list::benchmarks(env)?;
    match format {
        OutputFormat::Json => println!("{}", to_json(&summaries)?),
        OutputFormat::Text => {
            for bench in summaries {
                let marker = if bench.is_example { " (example)" } else { "" };
                println!("{}{}\t{}", bench.name, marker, bench.types.join(","));
            }
        }
    }
    Ok(())
}

pub(super) fn run_info(
    env: &ProgramEnv,
    benchmark: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let info = info::execute(env, benchmark)?;
    match format {
        OutputFormat::Json => println!("{}", to_json(&info)?),
        OutputFormat::Text => {
            let sections = &info.sections;
            println!("Benchmark:    {}", info.name);
            println!("Datasets:     {}", join_names(sections.datasets.as_ref()));
            println!("Dependencies: {}", join_names(sections.dependencies.as_ref()));
            println!("Example:      {}", sections.is_example.unwrap_or(false));
            println!("Types:        {}", join_names(sections.types.as_ref()));
        }
    }
    Ok(())
}

pub(super) fn run_download_command(env: &ProgramEnv, dataset: &str) -> Result<(), AppError> {
    let resolved = download_command::execute(env, dataset)?;
    println!("Dataset:   {}", resolved.dataset);
    println!("End-point: {}", resolved.end_point);
    println!("Command:   {} ({})", resolved.command, resolved.command_name);
    Ok(())
}

pub(super) fn run_plan(
    env: &ProgramEnv,
    benchmark: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let plan = plan::execute(env, benchmark)?;
    match format {
        OutputFormat::Json => println!("{}", to_json(&plan)?),
        OutputFormat::Text => {
            println!("Benchmark: {}", plan.benchmark);
            println!("Outputs:   {}", plan.output_dir.display());
            if !plan.dependencies.is_empty() {
                println!("Requires:  {}", plan.dependencies.join(", "));
            }
            for dataset in &plan.datasets {
                println!("  • {} -> {}", dataset.name, dataset.target_dir.display());
                println!("      from {}", dataset.end_point);
                if let Some(command) = &dataset.download_command {
                    println!("      via  {}", command);
                }
            }
        }
    }
    Ok(())
}
