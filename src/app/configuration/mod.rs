//! Registry loading through the `RegistrySource` port.
//!
//! Pure parsing and validation live in `domain::configuration`.

mod program_env_reader;

pub use program_env_reader::load_program_env;
