//! Root directories used by benchmark runs.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const DEFAULT_DATASET_ROOT_DIR: &str = "~/sciml_bench/datasets";
pub const DEFAULT_OUTPUT_ROOT_DIR: &str = "~/sciml_bench/outputs";
pub const DEFAULT_MODELS_DIR: &str = "~/sciml_bench/models";

/// `directories` section as written in the registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DirectoriesSection {
    #[serde(default)]
    pub dataset_root_dir: Option<String>,
    #[serde(default)]
    pub output_root_dir: Option<String>,
    #[serde(default)]
    pub models_dir: Option<String>,
}

/// Dataset, output and model roots with `~` already expanded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryPaths {
    pub dataset_dir: PathBuf,
    pub output_dir: PathBuf,
    pub model_dir: PathBuf,
}

impl DirectoryPaths {
    /// Resolve a section against the given home directory.
    pub fn resolve(section: &DirectoriesSection, home: Option<&Path>) -> Self {
        let pick = |value: &Option<String>, default: &str| {
            expand_home(value.as_deref().unwrap_or(default), home)
        };
        Self {
            dataset_dir: pick(&section.dataset_root_dir, DEFAULT_DATASET_ROOT_DIR),
            output_dir: pick(&section.output_root_dir, DEFAULT_OUTPUT_ROOT_DIR),
            model_dir: pick(&section.models_dir, DEFAULT_MODELS_DIR),
        }
    }

    /// Resolve a section against `$HOME`.
    pub fn from_section(section: &DirectoriesSection) -> Self {
        let home = std::env::var_os("HOME").filter(|h| !h.is_empty()).map(PathBuf::from);
        Self::resolve(section, home.as_deref())
    }

    /// Folder a dataset is expected to be materialized in.
    pub fn dataset_path(&self, dataset_name: &str) -> PathBuf {
        self.dataset_dir.join(dataset_name)
    }
}

/// Expand a leading `~` or `~/` against `home`. Other paths pass through.
pub fn expand_home(raw: &str, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(raw);
    };
    if raw == "~" {
        return home.to_path_buf();
    }
    match raw.strip_prefix("~/") {
        Some(rest) => home.join(rest),
        None => PathBuf::from(raw),
    }
}
