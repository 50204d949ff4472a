//! PostgreSQL pool plugin
//!
//! The connection source is parsed once, up front; a source that does not
//! parse is a configuration error and no attempt is made. Each attempt
//! then builds a fresh manager and pool. Building succeeds once `min_idle`
//! connections are open, so with the default of one connection a
//! successful build means the server was reachable.

use crate::constants::PLUGIN_NAME_POSTGRES;
use bootreg_domain::error::Result;
use bootreg_domain::value_objects::{PostgresOptions, ResourceKind};
use bootreg_infrastructure::di::{PgPool, Plugin, Registry};
use bootreg_infrastructure::error_ext::ErrorContext;
use bootreg_infrastructure::retry::{Sleeper, ThreadSleeper, retry_with_policy};
use r2d2_postgres::PostgresConnectionManager;
use r2d2_postgres::postgres::{Config, NoTls};
use std::sync::Arc;
use tracing::debug;

/// PostgreSQL pool plugin
///
/// Populates the relational pool slot of the registry.
pub struct PostgresPlugin {
    options: PostgresOptions,
    sleeper: Arc<dyn Sleeper>,
}

impl PostgresPlugin {
    /// Create a plugin that sleeps on the calling thread between attempts
    pub fn new(options: PostgresOptions) -> Self {
        Self {
            options,
            sleeper: Arc::new(ThreadSleeper),
        }
    }

    /// Replace the sleeper used between attempts
    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Options this plugin builds the pool with
    pub fn options(&self) -> &PostgresOptions {
        &self.options
    }

    /// Build the pool, retrying per the configured policy
    ///
    /// Exhausting every attempt is reported as
    /// [`Error::RetriesExhausted`](bootreg_domain::Error::RetriesExhausted);
    /// the plugin never reports success without a pool.
    pub fn build_pool(&self) -> Result<PgPool> {
        self.options.validate()?;
        let mut config = parse_source(&self.options.source)?;
        config.connect_timeout(self.options.connection_timeout);

        let idle_timeout = if self.options.max_idle_time.is_zero() {
            None
        } else {
            Some(self.options.max_idle_time)
        };

        let pool = retry_with_policy(
            ResourceKind::RelationalPool,
            &self.options.retry,
            self.sleeper.as_ref(),
            |attempt| {
                debug!(
                    max_connections = self.options.max_connections,
                    min_idle = self.options.min_idle,
                    attempt = attempt + 1,
                    "Building PostgreSQL pool"
                );
                let manager = PostgresConnectionManager::new(config.clone(), NoTls);
                r2d2::Pool::builder()
                    .max_size(self.options.max_connections)
                    .min_idle(Some(self.options.min_idle))
                    .idle_timeout(idle_timeout)
                    .connection_timeout(self.options.connection_timeout)
                    .build(manager)
            },
        )?;

        Ok(pool)
    }
}

impl Plugin for PostgresPlugin {
    fn name(&self) -> &str {
        PLUGIN_NAME_POSTGRES
    }

    fn apply(self: Box<Self>, registry: &mut Registry) -> Result<()> {
        let pool = self.build_pool()?;
        registry.set_pg_pool(pool);
        Ok(())
    }
}

/// Box a [`PostgresPlugin`] for `options`
pub fn with_postgres(options: PostgresOptions) -> Box<dyn Plugin> {
    Box::new(PostgresPlugin::new(options))
}

/// Parse a URI or key-value connection source
pub fn parse_source(source: &str) -> Result<Config> {
    source
        .parse::<Config>()
        .config_context("Invalid PostgreSQL source")
}
