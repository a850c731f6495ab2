pub mod configuration;
pub mod error;

pub use configuration::{
    BenchSections, BenchmarkEntry, DatasetEntry, DirectoryPaths, DownloadCommandTable, Mirror,
    MirrorSet, ProgramEnv, RegistryDocument, ValidationError,
};
pub use error::AppError;
