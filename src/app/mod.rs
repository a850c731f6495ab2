pub mod cli;
pub mod commands;
pub mod configuration;

pub use configuration::load_program_env;
