//! Bootstrap configuration types

use super::logging::LoggingConfig;
use bootreg_domain::value_objects::{
    ConfigReaderOptions, LoggerOptions, PostgresOptions, RedisOptions, ResourceKind,
};
use serde::{Deserialize, Serialize};

/// Which resources to initialize at startup, and how
///
/// A missing section means the matching plugin is not run.
///
/// ```toml
/// [logger]
/// service_name = "orders"
/// output_path = "/var/log/orders.log"
///
/// [redis]
/// addr = "cache:6379"
///
/// [postgres]
/// source = "postgresql://orders@db/orders"
/// max_connections = 20
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// bootreg's own diagnostics
    pub logging: LoggingConfig,

    /// Structured logger plugin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logger: Option<LoggerOptions>,

    /// Configuration reader plugin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_reader: Option<ConfigReaderOptions>,

    /// Redis plugin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redis: Option<RedisOptions>,

    /// PostgreSQL plugin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postgres: Option<PostgresOptions>,
}

impl BootstrapConfig {
    /// Resource kinds this configuration asks for, in plugin order
    pub fn requested(&self) -> Vec<ResourceKind> {
        let mut kinds = Vec::new();
        if self.logger.is_some() {
            kinds.push(ResourceKind::Logger);
        }
        if self.config_reader.is_some() {
            kinds.push(ResourceKind::Config);
        }
        if self.redis.is_some() {
            kinds.push(ResourceKind::KeyValue);
        }
        if self.postgres.is_some() {
            kinds.push(ResourceKind::RelationalPool);
        }
        kinds
    }
}
