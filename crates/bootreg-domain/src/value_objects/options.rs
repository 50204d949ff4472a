//! Option records, one per resource kind
//!
//! Every record deserializes with `#[serde(default)]` so a bootstrap
//! configuration can set only the fields it cares about. Durations are
//! stored in configuration files as `*_secs` fields.

use crate::constants::*;
use crate::error::{Error, Result};
use crate::value_objects::retry::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

// ============================================================================
// Key-value store
// ============================================================================

/// Redis client options
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedisOptions {
    /// `host:port` of the server
    pub addr: String,

    /// ACL user name, if the server uses one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Password; empty means no AUTH
    pub password: String,

    /// Logical database index
    pub db: i64,

    /// Upper bound for establishing one connection
    #[serde(rename = "connect_timeout_secs", with = "super::duration_secs")]
    pub connect_timeout: Duration,

    /// Liveness retry policy
    pub retry: RetryPolicy,
}

impl RedisOptions {
    /// Options for `addr` with every other field defaulted
    pub fn new<S: Into<String>>(addr: S) -> Self {
        Self {
            addr: addr.into(),
            ..Self::default()
        }
    }

    /// Set the password
    pub fn with_password<S: Into<String>>(mut self, password: S) -> Self {
        self.password = password.into();
        self
    }

    /// Set the logical database
    pub fn with_db(mut self, db: i64) -> Self {
        self.db = db;
        self
    }

    /// Set the retry policy
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Reject values the client would refuse or misinterpret
    pub fn validate(&self) -> Result<()> {
        if self.addr.trim().is_empty() {
            return Err(Error::configuration("Redis address cannot be empty"));
        }
        if self.db < 0 {
            return Err(Error::configuration(format!(
                "Redis database index cannot be negative: {}",
                self.db
            )));
        }
        if self.connect_timeout.is_zero() {
            return Err(Error::configuration("Redis connect timeout cannot be 0"));
        }
        self.retry.validate()
    }
}

impl Default for RedisOptions {
    fn default() -> Self {
        Self {
            addr: DEFAULT_REDIS_ADDR.to_string(),
            username: None,
            password: String::new(),
            db: DEFAULT_REDIS_DB,
            connect_timeout: Duration::from_secs(DEFAULT_REDIS_CONNECT_TIMEOUT_SECS),
            retry: RetryPolicy::default(),
        }
    }
}

impl fmt::Debug for RedisOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisOptions")
            .field("addr", &self.addr)
            .field("username", &self.username)
            .field("password", &if self.password.is_empty() { "" } else { "***" })
            .field("db", &self.db)
            .field("connect_timeout", &self.connect_timeout)
            .field("retry", &self.retry)
            .finish()
    }
}

// ============================================================================
// Relational pool
// ============================================================================

/// PostgreSQL pool options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostgresOptions {
    /// Connection source, URI (`postgresql://...`) or key-value DSN
    pub source: String,

    /// Maximum pooled connections
    pub max_connections: u32,

    /// Idle time after which a pooled connection is closed; 0 disables
    #[serde(rename = "max_idle_time_secs", with = "super::duration_secs")]
    pub max_idle_time: Duration,

    /// Connections established while the pool is built
    pub min_idle: u32,

    /// Upper bound for one pool construction attempt
    #[serde(rename = "connection_timeout_secs", with = "super::duration_secs")]
    pub connection_timeout: Duration,

    /// Construction retry policy
    pub retry: RetryPolicy,
}

impl PostgresOptions {
    /// Options for `source` with every other field defaulted
    pub fn new<S: Into<String>>(source: S) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }

    /// Set pool sizing
    pub fn with_pool_limits(mut self, max_connections: u32, max_idle_time: Duration) -> Self {
        self.max_connections = max_connections;
        self.max_idle_time = max_idle_time;
        self
    }

    /// Set the per-attempt construction timeout
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// Set the retry policy
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Reject sizing the pool builder would panic on
    pub fn validate(&self) -> Result<()> {
        if self.max_connections == 0 {
            return Err(Error::configuration(
                "PostgreSQL max connections cannot be 0",
            ));
        }
        if self.min_idle > self.max_connections {
            return Err(Error::configuration(format!(
                "PostgreSQL min idle ({}) exceeds max connections ({})",
                self.min_idle, self.max_connections
            )));
        }
        if self.connection_timeout.is_zero() {
            return Err(Error::configuration(
                "PostgreSQL connection timeout cannot be 0",
            ));
        }
        self.retry.validate()
    }
}

impl Default for PostgresOptions {
    fn default() -> Self {
        Self {
            source: String::new(),
            max_connections: DEFAULT_PG_MAX_CONNECTIONS,
            max_idle_time: Duration::from_secs(DEFAULT_PG_MAX_IDLE_SECS),
            min_idle: DEFAULT_PG_MIN_IDLE,
            connection_timeout: Duration::from_secs(DEFAULT_PG_CONNECTION_TIMEOUT_SECS),
            retry: RetryPolicy::default(),
        }
    }
}

// ============================================================================
// Configuration reader
// ============================================================================

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigFormat {
    /// YAML document
    Yaml,
    /// JSON document
    Json,
    /// TOML document
    Toml,
}

impl ConfigFormat {
    /// File extensions tried, in order
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Yaml => &["yaml", "yml"],
            Self::Json => &["json"],
            Self::Toml => &["toml"],
        }
    }
}

impl FromStr for ConfigFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            other => Err(Error::configuration(format!(
                "Unsupported config file type: {}. Use yaml, json, or toml",
                other
            ))),
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extensions()[0])
    }
}

/// Configuration file location and the section to decode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigReaderOptions {
    /// Directory searched for the file
    pub path: PathBuf,

    /// File name without extension
    pub file_name: String,

    /// Format name (`yaml`, `json`, `toml`)
    pub file_type: String,

    /// Top-level key decoded into the caller's target
    pub section: String,
}

impl ConfigReaderOptions {
    /// Options for `<path>/<file_name>.<file_type>`, decoding `section`
    pub fn new<P, N, T, S>(path: P, file_name: N, file_type: T, section: S) -> Self
    where
        P: Into<PathBuf>,
        N: Into<String>,
        T: Into<String>,
        S: Into<String>,
    {
        Self {
            path: path.into(),
            file_name: file_name.into(),
            file_type: file_type.into(),
            section: section.into(),
        }
    }

    /// Parsed file format
    pub fn format(&self) -> Result<ConfigFormat> {
        self.file_type.parse()
    }
}

impl Default for ConfigReaderOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CONFIG_READER_PATH),
            file_name: DEFAULT_CONFIG_READER_FILE_NAME.to_string(),
            file_type: DEFAULT_CONFIG_READER_FILE_TYPE.to_string(),
            section: DEFAULT_CONFIG_READER_SECTION.to_string(),
        }
    }
}

// ============================================================================
// Logger
// ============================================================================

/// Structured logger options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerOptions {
    /// Level code: -1 debug, 0 info, 1 warn, 2 error, 3 dpanic, 4 panic, 5 fatal
    pub level: i8,

    /// Development mode (stack traces from warn upwards)
    pub development: bool,

    /// Never attach stack traces
    pub disable_stacktrace: bool,

    /// `json` or `console`
    pub encoding: String,

    /// Text placed before every timestamp
    pub prefix: String,

    /// Level style name, e.g. `LowercaseColorLevelEncoder`
    pub level_style: String,

    /// Value of the `serviceName` field on every record
    pub service_name: String,

    /// Log file written alongside the console
    pub output_path: PathBuf,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOGGER_LEVEL,
            development: false,
            disable_stacktrace: true,
            encoding: DEFAULT_LOGGER_ENCODING.to_string(),
            prefix: String::new(),
            level_style: DEFAULT_LOGGER_LEVEL_STYLE.to_string(),
            service_name: String::new(),
            output_path: PathBuf::from(DEFAULT_LOGGER_OUTPUT_PATH),
        }
    }
}
