//! Validated benchmark registry and its per-benchmark resolvers.

use std::collections::BTreeSet;
use std::path::Path;

use serde::Serialize;

use super::directories::DirectoryPaths;
use super::document::{BenchmarkEntry, DatasetEntry, RegistryDocument};
use super::registry::{DownloadCommandTable, MirrorSet};
use super::validation::{self, ValidationError};
use crate::domain::AppError;

/// Benchmark types assumed when a benchmark does not declare `types`.
pub const DEFAULT_BENCH_TYPES: [&str; 2] = ["training", "inference"];

/// Program environment built from one registry document.
///
/// Validated once on construction and read-only afterwards. An invalid
/// registry still constructs; the failure is kept and every resolver
/// returns `None`.
#[derive(Debug, Clone)]
pub struct ProgramEnv {
    mirrors: Option<MirrorSet>,
    download_commands: Option<DownloadCommandTable>,
    directories: DirectoryPaths,
    datasets: Option<Vec<(String, DatasetEntry)>>,
    benchmarks: Option<Vec<(String, BenchmarkEntry)>>,
    config_error: Option<ValidationError>,
}

/// The four resolved sections of a benchmark.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BenchSections {
    pub datasets: Option<BTreeSet<String>>,
    pub dependencies: Option<BTreeSet<String>>,
    pub is_example: Option<bool>,
    pub types: Option<BTreeSet<String>>,
}

pub type BenchSectionsTuple = (
    Option<BTreeSet<String>>,
    Option<BTreeSet<String>>,
    Option<bool>,
    Option<BTreeSet<String>>,
);

impl BenchSections {
    pub fn into_tuple(self) -> BenchSectionsTuple {
        (self.datasets, self.dependencies, self.is_example, self.types)
    }
}

impl ProgramEnv {
    /// Parse and validate registry YAML.
    pub fn from_yaml_str(content: &str) -> Result<Self, AppError> {
        Self::parse(content, "<string>")
    }

    /// Parse and validate registry YAML read from `origin`.
    pub fn parse(content: &str, origin: &str) -> Result<Self, AppError> {
        let document = RegistryDocument::parse(content, origin)?;
        Ok(Self::from_document(document))
    }

    /// Build from a parsed document, expanding `~` against `$HOME`.
    pub fn from_document(document: RegistryDocument) -> Self {
        let directories =
            DirectoryPaths::from_section(&document.directories.clone().unwrap_or_default());
        Self::assemble(document, directories)
    }

    /// Build from a parsed document, expanding `~` against `home`.
    pub fn from_document_with_home(document: RegistryDocument, home: Option<&Path>) -> Self {
        let directories =
            DirectoryPaths::resolve(&document.directories.clone().unwrap_or_default(), home);
        Self::assemble(document, directories)
    }

    fn assemble(document: RegistryDocument, directories: DirectoryPaths) -> Self {
        let mut env = Self {
            mirrors: document.data_mirrors.map(MirrorSet::from),
            download_commands: document.download_commands.map(DownloadCommandTable::new),
            directories,
            datasets: document.datasets,
            benchmarks: document.benchmarks,
            config_error: None,
        };

        match validation::validate(&env) {
            Ok(()) => log::debug!(
                "Configuration valid: {} benchmark(s), {} dataset(s), {} mirror(s)",
                env.benchmarks().map_or(0, <[_]>::len),
                env.datasets().map_or(0, <[_]>::len),
                env.mirrors().map_or(0, MirrorSet::len),
            ),
            Err(err) => {
                log::warn!("Configuration invalid: {}", err);
                env.config_error = Some(err);
            }
        }
        env
    }

    // -------------------------------------------------------------------------
    // Validity
    // -------------------------------------------------------------------------

    pub fn is_valid(&self) -> bool {
        self.config_error.is_none()
    }

    pub fn config_error(&self) -> Option<ValidationError> {
        self.config_error
    }

    /// Validity flag and stored message, as one pair.
    pub fn is_config_valid(&self) -> (bool, Option<String>) {
        (self.is_valid(), self.config_error.map(|err| err.to_string()))
    }

    /// Turn a stored validation failure into an error for `?` propagation.
    pub fn ensure_valid(&self) -> Result<(), AppError> {
        match self.config_error {
            Some(err) => Err(AppError::InvalidConfiguration(err)),
            None => Ok(()),
        }
    }

    // -------------------------------------------------------------------------
    // Raw sections
    // -------------------------------------------------------------------------

    pub fn mirrors(&self) -> Option<&MirrorSet> {
        self.mirrors.as_ref()
    }

    pub fn download_commands(&self) -> Option<&DownloadCommandTable> {
        self.download_commands.as_ref()
    }

    pub fn directories(&self) -> &DirectoryPaths {
        &self.directories
    }

    pub fn datasets(&self) -> Option<&[(String, DatasetEntry)]> {
        self.datasets.as_deref()
    }

    pub fn benchmarks(&self) -> Option<&[(String, BenchmarkEntry)]> {
        self.benchmarks.as_deref()
    }

    /// Dataset names in document order.
    pub fn dataset_names(&self) -> Vec<&str> {
        self.datasets().unwrap_or_default().iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Benchmark names in document order.
    pub fn benchmark_names(&self) -> Vec<&str> {
        self.benchmarks().unwrap_or_default().iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn dataset(&self, name: &str) -> Option<&DatasetEntry> {
        self.datasets().unwrap_or_default().iter().find(|(key, _)| key == name).map(|(_, d)| d)
    }

    pub fn benchmark(&self, name: &str) -> Option<&BenchmarkEntry> {
        self.benchmarks().unwrap_or_default().iter().find(|(key, _)| key == name).map(|(_, b)| b)
    }

    // -------------------------------------------------------------------------
    // Resolvers
    // -------------------------------------------------------------------------

    /// Command template for a dataset.
    ///
    /// `None` when the registry is invalid, the dataset is unknown, or the
    /// dataset has no `download_command`.
    pub fn get_download_command(&self, dataset_name: &str) -> Option<&str> {
        if !self.is_valid() {
            return None;
        }
        let command = self.dataset(dataset_name)?.download_command.as_deref()?;
        self.download_commands()?.get(command)
    }

    pub fn get_bench_datasets(&self, benchmark_name: &str) -> Option<BTreeSet<String>> {
        self.valid_benchmark(benchmark_name)?.datasets.as_ref().map(|list| list.to_set())
    }

    pub fn get_bench_dependencies(&self, benchmark_name: &str) -> Option<BTreeSet<String>> {
        self.valid_benchmark(benchmark_name)?.dependencies.as_ref().map(|list| list.to_set())
    }

    /// Declared types, or `training` + `inference` when absent.
    pub fn get_bench_types(&self, benchmark_name: &str) -> Option<BTreeSet<String>> {
        let benchmark = self.valid_benchmark(benchmark_name)?;
        Some(match &benchmark.types {
            Some(list) => list.to_set(),
            None => DEFAULT_BENCH_TYPES.iter().map(|t| t.to_string()).collect(),
        })
    }

    /// Declared example flag, or `false` when absent.
    pub fn get_bench_example_flag(&self, benchmark_name: &str) -> Option<bool> {
        Some(self.valid_benchmark(benchmark_name)?.is_example.unwrap_or(false))
    }

    pub fn get_bench_sections(&self, benchmark_name: &str) -> BenchSections {
        BenchSections {
            datasets: self.get_bench_datasets(benchmark_name),
            dependencies: self.get_bench_dependencies(benchmark_name),
            is_example: self.get_bench_example_flag(benchmark_name),
            types: self.get_bench_types(benchmark_name),
        }
    }

    fn valid_benchmark(&self, benchmark_name: &str) -> Option<&BenchmarkEntry> {
        if !self.is_valid() {
            return None;
        }
        self.benchmark(benchmark_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RegistryYamlBuilder;

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn load(yaml: &str) -> ProgramEnv {
        let document = RegistryDocument::parse(yaml, "test.yml").expect("parse");
        ProgramEnv::from_document_with_home(document, Some(Path::new("/home/bench")))
    }

    #[test]
    fn scenario_duplicate_tokens_and_no_download_command() {
        let env = load(r#"
datasets: {d1: {end_point: "http://x"}}
download_commands: {wget: "wget {url}"}
benchmarks: {b1: {datasets: "d1,d1,"}}
data_mirrors: ["m1"]
"#);

        assert_eq!(env.is_config_valid(), (true, None));
        assert_eq!(env.get_bench_datasets("b1"), Some(set(&["d1"])));
        assert_eq!(env.get_download_command("d1"), None);
    }

    #[test]
    fn scenario_missing_end_point() {
        let env = load(r#"
datasets: {d1: {download_command: "bogus"}}
download_commands: {wget: "wget {url}"}
benchmarks: {b1: {datasets: "d1,d1,"}}
data_mirrors: ["m1"]
"#);

        assert_eq!(
            env.is_config_valid(),
            (false, Some("Missing end-point for at least one dataset.".to_string()))
        );
        assert!(matches!(env.ensure_valid(), Err(AppError::InvalidConfiguration(_))));
    }

    #[test]
    fn resolves_download_command_through_table() {
        let env = load(&RegistryYamlBuilder::new().dataset("d1", "http://x", Some("wget")).build());
        assert_eq!(env.get_download_command("d1"), Some("wget {url} -P {dir}"));
    }

    #[test]
    fn download_command_for_unknown_dataset_is_none() {
        let env = load(&RegistryYamlBuilder::new().build());
        assert_eq!(env.get_download_command("nope"), None);
    }

    #[test]
    fn types_default_to_training_and_inference() {
        let env = load(&RegistryYamlBuilder::new().build());
        assert_eq!(env.get_bench_types("b1"), Some(set(&["training", "inference"])));
    }

    #[test]
    fn types_are_filtered_tokens_when_declared() {
        let yaml = RegistryYamlBuilder::new()
            .benchmark_field("b1", "types", "\"training,,inference,\"")
            .build();
        let env = load(&yaml);
        assert_eq!(env.get_bench_types("b1"), Some(set(&["training", "inference"])));

        let yaml = RegistryYamlBuilder::new().benchmark_field("b1", "types", "inference").build();
        let env = load(&yaml);
        assert_eq!(env.get_bench_types("b1"), Some(set(&["inference"])));
    }

    #[test]
    fn example_flag_defaults_to_false() {
        let env = load(&RegistryYamlBuilder::new().build());
        assert_eq!(env.get_bench_example_flag("b1"), Some(false));

        let yaml = RegistryYamlBuilder::new().benchmark_field("b1", "is_example", "true").build();
        let env = load(&yaml);
        assert_eq!(env.get_bench_example_flag("b1"), Some(true));
    }

    #[test]
    fn dependencies_absent_is_none() {
        let env = load(&RegistryYamlBuilder::new().build());
        assert_eq!(env.get_bench_dependencies("b1"), None);

        let yaml = RegistryYamlBuilder::new()
            .benchmark_field("b1", "dependencies", "\"torch,,lightning\"")
            .build();
        let env = load(&yaml);
        assert_eq!(env.get_bench_dependencies("b1"), Some(set(&["torch", "lightning"])));
    }

    #[test]
    fn unknown_benchmark_yields_all_none() {
        let env = load(&RegistryYamlBuilder::new().build());
        assert_eq!(env.get_bench_sections("missing"), BenchSections::default());
    }

    #[test]
    fn invalid_registry_yields_none_everywhere() {
        let yaml = RegistryYamlBuilder::new()
            .without_mirrors()
            .dataset("d1", "http://x", Some("wget"))
            .build();
        let env = load(&yaml);

        assert!(!env.is_valid());
        assert_eq!(env.config_error(), Some(ValidationError::MissingDataMirrors));
        assert_eq!(env.get_download_command("d1"), None);
        assert_eq!(env.get_bench_types("b1"), None);
        assert_eq!(env.get_bench_example_flag("b1"), None);
        assert_eq!(env.get_bench_sections("b1"), BenchSections::default());
    }

    #[test]
    fn sections_compose_the_four_resolvers() {
        let env = load(&RegistryYamlBuilder::new()
            .benchmark_field("b1", "dependencies", "torch")
            .benchmark_field("b1", "is_example", "true")
            .build());

        let (datasets, dependencies, is_example, types) = env.get_bench_sections("b1").into_tuple();
        assert_eq!(datasets, Some(set(&["d1"])));
        assert_eq!(dependencies, Some(set(&["torch"])));
        assert_eq!(is_example, Some(true));
        assert_eq!(types, Some(set(&["training", "inference"])));
    }

    #[test]
    fn directories_are_expanded_against_home() {
        let env = load(&RegistryYamlBuilder::new().build());
        let dirs = env.directories();
        assert_eq!(dirs.dataset_dir, Path::new("/home/bench/sciml_bench/datasets"));
        assert_eq!(dirs.output_dir, Path::new("/home/bench/sciml_bench/outputs"));
        assert_eq!(dirs.model_dir, Path::new("/home/bench/sciml_bench/models"));
    }

    #[test]
    fn names_follow_document_order() {
        let env = load(&RegistryYamlBuilder::new()
            .dataset("zz", "http://z", None)
            .dataset("aa", "http://a", None)
            .build());
        assert_eq!(env.dataset_names(), vec!["d1", "zz", "aa"]);
        assert_eq!(env.benchmark_names(), vec!["b1"]);
    }

    #[test]
    fn merged_dataset_fields_count_for_validation_and_resolution() {
        let env = load(r#"
common: &common {end_point: "http://x", download_command: wget}
datasets: {d1: {<<: *common}}
download_commands: {wget: "wget {url}"}
benchmarks: {b1: {datasets: d1}}
data_mirrors: ["m1"]
"#);

        assert_eq!(env.is_config_valid(), (true, None));
        assert_eq!(env.get_download_command("d1"), Some("wget {url}"));
    }

    #[test]
    fn numeric_dataset_names_resolve() {
        let env = load(r#"
datasets: {2021: {end_point: 8080}}
download_commands: {wget: "wget {url}"}
benchmarks: {b1: {datasets: 2021, is_example: yes}}
data_mirrors: ["m1"]
"#);

        assert!(env.is_valid());
        assert_eq!(env.dataset_names(), vec!["2021"]);
        assert_eq!(env.get_bench_datasets("b1"), Some(set(&["2021"])));
        assert_eq!(env.get_bench_example_flag("b1"), Some(true));
    }
}
