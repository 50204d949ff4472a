//! # bootreg - Plugin Implementations
//!
//! One plugin per registry slot. Each plugin takes an option record from
//! `bootreg-domain`, builds its resource and stores the handle in the
//! [`Registry`](bootreg_infrastructure::Registry) only once it is ready.
//!
//! ## Plugins
//!
//! | Slot | Plugin | Retries |
//! |------|--------|---------|
//! | Key-value | [`RedisPlugin`] | yes, PING liveness check |
//! | Relational pool | [`PostgresPlugin`] | yes, pool construction |
//! | Configuration | [`ConfigReaderPlugin`] | no |
//! | Logger | [`LoggerPlugin`] | no |
//!
//! ## Usage
//!
//! ```ignore
//! use bootreg_infrastructure::Registry;
//! use bootreg_providers::{with_logger, with_redis};
//!
//! let registry = Registry::with_plugins([
//!     with_logger(LoggerOptions::default()),
//!     with_redis(RedisOptions::new("localhost:6379")),
//! ])?;
//! ```

pub use bootreg_domain::error::{Error, Result};
pub use bootreg_infrastructure::di::Plugin;

/// Provider-specific constants
pub mod constants;

/// Configuration file reader
pub mod config;

/// Relational connection pools
pub mod database;

/// Key-value store clients
pub mod key_value;

/// Structured logger
pub mod logging;

pub use self::config::{ConfigReaderPlugin, with_config_reader, with_config_target};
pub use self::database::{PostgresPlugin, with_postgres};
pub use self::key_value::{RedisPlugin, with_redis};
pub use self::logging::{LevelStyle, LoggerPlugin, with_logger};
