//! # bootreg
//!
//! A process-wide bootstrap registry: one value holding the shared handles
//! a backend service needs at startup (Redis client, configuration reader,
//! PostgreSQL pool, structured logger), filled by composable plugins.
//!
//! ## Example
//!
//! ```ignore
//! use bootreg::{Registry, with_logger, with_postgres, with_redis};
//!
//! let registry = Registry::with_plugins([
//!     with_logger(LoggerOptions::default()),
//!     with_redis(RedisOptions::new("localhost:6379")),
//!     with_postgres(PostgresOptions::new("host=localhost user=postgres")),
//! ])?;
//!
//! let pool = registry.pg_pool().expect("pool configured above");
//! ```
//!
//! Or declaratively, from a `bootreg.toml` and `BOOTREG__*` variables:
//!
//! ```ignore
//! let config = ConfigLoader::new().load()?;
//! let registry = bootreg::bootstrap(&config)?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - error taxonomy, resource kinds, option records
//! - `infrastructure` - registry, plugin trait, retry helper, config loading
//! - `providers` - the Redis, PostgreSQL, configuration reader and logger plugins

/// Domain layer - error taxonomy and option records
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use bootreg_domain::*;
}

/// Infrastructure layer - registry, retry and configuration
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use bootreg_infrastructure::*;
}

/// Plugin implementations
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use bootreg_providers::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the composition entry points
pub use infrastructure::config::{BootstrapConfig, ConfigLoader};
pub use infrastructure::{Plugin, Registry};

// Re-export plugin constructors
pub use providers::{with_config_reader, with_config_target, with_logger, with_postgres, with_redis};

/// Plugins for every section present in `config`
///
/// Ordered logger, configuration reader, Redis, PostgreSQL, so the logger
/// exists before any plugin that may spend time retrying.
pub fn plugins(config: &BootstrapConfig) -> Vec<Box<dyn Plugin>> {
    let mut plugins = Vec::new();
    if let Some(options) = &config.logger {
        plugins.push(with_logger(options.clone()));
    }
    if let Some(options) = &config.config_reader {
        plugins.push(with_config_reader(options.clone()));
    }
    if let Some(options) = &config.redis {
        plugins.push(with_redis(options.clone()));
    }
    if let Some(options) = &config.postgres {
        plugins.push(with_postgres(options.clone()));
    }
    plugins
}

/// Build a registry from `config`
///
/// Fails with the first plugin error; the partially filled registry is
/// dropped. Use [`Registry::add_plugins`] with [`plugins`] to keep it.
pub fn bootstrap(config: &BootstrapConfig) -> Result<Registry> {
    Registry::with_plugins(plugins(config))
}
