//! Domain layer constants
//!
//! Defaults for the plugin option records. Infrastructure-specific
//! constants (config file names, env prefixes) live in
//! `bootreg_infrastructure::constants`.

// ============================================================================
// RETRY CONSTANTS
// ============================================================================

/// Attempts made against a remote resource before giving up
pub const DEFAULT_RETRY_ATTEMPTS: u32 = 5;

/// Linear backoff step in seconds; attempt `i` is followed by `i * step`
pub const DEFAULT_RETRY_STEP_SECS: u64 = 1;

// ============================================================================
// KEY-VALUE (REDIS) CONSTANTS
// ============================================================================

/// Default Redis address
pub const DEFAULT_REDIS_ADDR: &str = "localhost:6379";

/// Default Redis logical database
pub const DEFAULT_REDIS_DB: i64 = 0;

/// Per-attempt Redis connect timeout in seconds
pub const DEFAULT_REDIS_CONNECT_TIMEOUT_SECS: u64 = 5;

// ============================================================================
// RELATIONAL POOL (POSTGRES) CONSTANTS
// ============================================================================

/// Default maximum pool size
pub const DEFAULT_PG_MAX_CONNECTIONS: u32 = 10;

/// Default maximum idle time of a pooled connection in seconds (1 hour)
pub const DEFAULT_PG_MAX_IDLE_SECS: u64 = 3600;

/// Connections opened while the pool is constructed
pub const DEFAULT_PG_MIN_IDLE: u32 = 1;

/// Per-attempt pool construction timeout in seconds
pub const DEFAULT_PG_CONNECTION_TIMEOUT_SECS: u64 = 5;

/// Source written by `bootreg init`
pub const DEFAULT_PG_SOURCE_EXAMPLE: &str = "postgresql://postgres@localhost:5432/postgres";

// ============================================================================
// CONFIG READER CONSTANTS
// ============================================================================

/// Default directory searched for the configuration file
pub const DEFAULT_CONFIG_READER_PATH: &str = "./";

/// Default configuration file base name
pub const DEFAULT_CONFIG_READER_FILE_NAME: &str = "config";

/// Default configuration file format
pub const DEFAULT_CONFIG_READER_FILE_TYPE: &str = "yaml";

/// Default section decoded from the configuration file
pub const DEFAULT_CONFIG_READER_SECTION: &str = "release";

// ============================================================================
// LOGGER CONSTANTS
// ============================================================================

/// Info level code (-1 debug, 0 info, 1 warn, 2 error, 3 dpanic, 4 panic, 5 fatal)
pub const DEFAULT_LOGGER_LEVEL: i8 = 0;

/// JSON encoding name
pub const LOGGER_ENCODING_JSON: &str = "json";

/// Human-readable encoding name
pub const LOGGER_ENCODING_CONSOLE: &str = "console";

/// Default logger encoding
pub const DEFAULT_LOGGER_ENCODING: &str = LOGGER_ENCODING_CONSOLE;

/// Default level rendering style
pub const DEFAULT_LOGGER_LEVEL_STYLE: &str = "LowercaseColorLevelEncoder";

/// Default log file
pub const DEFAULT_LOGGER_OUTPUT_PATH: &str = "./service.log";

/// Date-time pattern rendered after the configured prefix
pub const LOGGER_TIME_PATTERN: &str = "%Y/%m/%d - %H:%M:%S%.3f";

/// Field carrying the service name on every record
pub const LOGGER_SERVICE_NAME_KEY: &str = "serviceName";
