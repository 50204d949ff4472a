//! Configuration types module

pub mod bootstrap;
pub mod logging;

pub use bootstrap::BootstrapConfig;
pub use logging::LoggingConfig;
