//! Configuration Reader Plugin
//!
//! Reads one YAML, JSON or TOML file and keeps it in the registry as a
//! [`ConfigReader`](bootreg_infrastructure::di::ConfigReader).

pub mod reader;

pub use reader::{ConfigReaderPlugin, locate_config_file, with_config_reader, with_config_target};
