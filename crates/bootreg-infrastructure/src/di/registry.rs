//! Registry and composition driver

use super::handles::{ConfigReader, Logger, PgPool, RedisClient};
use super::plugin::Plugin;
use crate::logging::{log_plugin_applied, log_plugin_failed};
use crate::utils::TimedOperation;
use bootreg_domain::error::Result;
use bootreg_domain::value_objects::ResourceKind;
use std::fmt;
use tracing::debug;

/// Shared startup handles
///
/// Each slot is either empty or holds a fully initialized handle. Slots
/// are only ever set or overwritten, never cleared. The registry does no
/// locking of its own: populate it on one thread, then share it read-only.
#[derive(Default)]
pub struct Registry {
    redis: Option<RedisClient>,
    config: Option<ConfigReader>,
    pg_pool: Option<PgPool>,
    logger: Option<Logger>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry and apply `plugins` to it
    ///
    /// On failure the partially populated registry is dropped; use
    /// [`Registry::add_plugins`] on an existing registry to keep it.
    pub fn with_plugins<'a, I>(plugins: I) -> Result<Self>
    where
        I: IntoIterator<Item = Box<dyn Plugin + 'a>>,
    {
        let mut registry = Self::new();
        registry.add_plugins(plugins)?;
        Ok(registry)
    }

    /// Apply `plugins` in order, stopping at the first failure
    ///
    /// The failing plugin's error is returned unchanged. Handles stored by
    /// earlier plugins stay in place and later plugins are not applied.
    pub fn add_plugins<'a, I>(&mut self, plugins: I) -> Result<()>
    where
        I: IntoIterator<Item = Box<dyn Plugin + 'a>>,
    {
        for plugin in plugins {
            self.add_plugin(plugin)?;
        }
        Ok(())
    }

    /// Apply a single plugin
    pub fn add_plugin<'a>(&mut self, plugin: Box<dyn Plugin + 'a>) -> Result<()> {
        let name = plugin.name().to_string();
        debug!(plugin = %name, "Applying plugin");

        let timer = TimedOperation::start();
        match plugin.apply(self) {
            Ok(()) => {
                log_plugin_applied(&name, timer.elapsed_ms());
                Ok(())
            }
            Err(err) => {
                log_plugin_failed(&name, &err);
                Err(err)
            }
        }
    }

    // ========================================================================
    // Handles
    // ========================================================================

    /// Redis client, if the Redis plugin was applied
    pub fn redis(&self) -> Option<&RedisClient> {
        self.redis.as_ref()
    }

    /// Configuration reader, if the config plugin was applied
    pub fn config(&self) -> Option<&ConfigReader> {
        self.config.as_ref()
    }

    /// PostgreSQL pool, if the PostgreSQL plugin was applied
    pub fn pg_pool(&self) -> Option<&PgPool> {
        self.pg_pool.as_ref()
    }

    /// Logger, if the logger plugin was applied
    pub fn logger(&self) -> Option<&Logger> {
        self.logger.as_ref()
    }

    // ========================================================================
    // Slot setters (used by plugins)
    // ========================================================================

    /// Store a connected Redis client
    pub fn set_redis(&mut self, client: RedisClient) {
        self.redis = Some(client);
    }

    /// Store a loaded configuration reader
    pub fn set_config(&mut self, reader: ConfigReader) {
        self.config = Some(reader);
    }

    /// Store a constructed PostgreSQL pool
    pub fn set_pg_pool(&mut self, pool: PgPool) {
        self.pg_pool = Some(pool);
    }

    /// Store a built logger
    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = Some(logger);
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Whether the slot for `kind` holds a handle
    pub fn contains(&self, kind: ResourceKind) -> bool {
        match kind {
            ResourceKind::KeyValue => self.redis.is_some(),
            ResourceKind::Config => self.config.is_some(),
            ResourceKind::RelationalPool => self.pg_pool.is_some(),
            ResourceKind::Logger => self.logger.is_some(),
        }
    }

    /// Kinds currently holding a handle
    pub fn populated(&self) -> Vec<ResourceKind> {
        ResourceKind::ALL
            .into_iter()
            .filter(|kind| self.contains(*kind))
            .collect()
    }

    /// True if no slot holds a handle
    pub fn is_empty(&self) -> bool {
        self.populated().is_empty()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("populated", &self.populated())
            .finish()
    }
}
