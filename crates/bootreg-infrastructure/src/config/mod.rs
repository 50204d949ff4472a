//! Bootstrap configuration
//!
//! Declarative description of which plugins a process runs at startup,
//! loaded with Figment from a TOML file and `BOOTREG__` environment
//! variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{BootstrapConfig, LoggingConfig};
