use serde::{Deserialize, Serialize};
use std::fmt;

/// A slot in the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// Key-value store client
    KeyValue,
    /// Configuration reader
    Config,
    /// Relational connection pool
    RelationalPool,
    /// Structured logger
    Logger,
}

impl ResourceKind {
    /// Every kind, in registry field order
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::KeyValue,
        ResourceKind::Config,
        ResourceKind::RelationalPool,
        ResourceKind::Logger,
    ];

    /// Short name used in log fields
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::KeyValue => "redis",
            Self::Config => "config",
            Self::RelationalPool => "postgres",
            Self::Logger => "logger",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::KeyValue => "Redis",
            Self::Config => "configuration reader",
            Self::RelationalPool => "PostgreSQL pool",
            Self::Logger => "logger",
        };
        f.write_str(name)
    }
}
