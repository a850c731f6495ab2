//! Benchmark registry: parsing, validation and per-benchmark resolution.

pub mod directories;
pub mod document;
pub mod name_list;
pub mod program_env;
pub mod registry;
mod scalar;
pub mod validation;

pub use directories::{DirectoriesSection, DirectoryPaths};
pub use document::{BenchmarkEntry, DatasetEntry, MirrorSpec, RegistryDocument};
pub use name_list::NameList;
pub use program_env::{BenchSections, BenchSectionsTuple, DEFAULT_BENCH_TYPES, ProgramEnv};
pub use registry::{DownloadCommandTable, Mirror, MirrorSet};
pub use validation::ValidationError;
