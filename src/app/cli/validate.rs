use crate::app::commands::validate;
use crate::domain::ProgramEnv;

pub(super) fn run_validate(env: &ProgramEnv) -> i32 {
    let outcome = validate::execute(env);
    match &outcome.error {
        None => {
            println!("✅ Configuration is valid.");
            println!(
                "  {} benchmark(s), {} dataset(s), {} mirror(s)",
                outcome.benchmarks,
                outcome.datasets,
                outcome.mirrors.len()
            );
            for mirror in &outcome.mirrors {
                match &mirror.name {
                    Some(name) => println!("  Mirror:   {} ({})", mirror.location, name),
                    None => println!("  Mirror:   {}", mirror.location),
                }
            }
            println!("  Commands: {}", outcome.download_commands.join(", "));
            println!("  Datasets: {}", outcome.directories.dataset_dir.display());
            println!("  Outputs:  {}", outcome.directories.output_dir.display());
            println!("  Models:   {}", outcome.directories.model_dir.display());
        }
        Some(message) => {
            eprintln!("❌ Invalid configuration: {}", message);
        }
    }
    outcome.exit_code()
}
