pub mod filesystem;
pub mod memory_registry_source;

pub use filesystem::FilesystemRegistrySource;
pub use memory_registry_source::MemoryRegistrySource;
