//! Output format shared by the inspection commands.

use serde::Serialize;

use crate::domain::AppError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render a command result as pretty JSON.
pub fn to_json<T: Serialize>(output: &T) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(output)?)
}

/// Join a set of names for text output, `-` when absent.
pub fn join_names<'a, I>(names: Option<I>) -> String
where
    I: IntoIterator<Item = &'a String>,
{
    match names {
        Some(names) => {
            let joined: Vec<&str> = names.into_iter().map(String::as_str).collect();
            if joined.is_empty() { "(none)".to_string() } else { joined.join(", ") }
        }
        None => "-".to_string(),
    }
}
