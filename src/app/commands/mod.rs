//! Driver-side commands over a loaded `ProgramEnv`.

pub mod download_command;
pub mod info;
pub mod list;
pub mod output;
pub mod plan;
pub mod validate;

pub use output::OutputFormat;
