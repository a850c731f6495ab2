mod registry_yaml_builder;

pub use registry_yaml_builder::RegistryYamlBuilder;
