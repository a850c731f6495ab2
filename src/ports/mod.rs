mod registry_source;

pub use registry_source::RegistrySource;
