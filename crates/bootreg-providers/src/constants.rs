//! Provider Constants
//!
//! Constants specific to plugin implementations. Option defaults live in
//! `bootreg-domain`.

// ============================================================================
// PLUGIN NAMES
// ============================================================================

/// Redis plugin name used in log records
pub const PLUGIN_NAME_REDIS: &str = "redis";

/// PostgreSQL plugin name used in log records
pub const PLUGIN_NAME_POSTGRES: &str = "postgres";

/// Configuration reader plugin name used in log records
pub const PLUGIN_NAME_CONFIG_READER: &str = "config_reader";

/// Logger plugin name used in log records
pub const PLUGIN_NAME_LOGGER: &str = "logger";

// ============================================================================
// REDIS
// ============================================================================

/// URL scheme for plain TCP connections
pub const REDIS_URL_SCHEME: &str = "redis";

/// Liveness check command
pub const REDIS_PING_COMMAND: &str = "PING";

// ============================================================================
// LOGGER
// ============================================================================

/// JSON key for the record time
pub const LOGGER_TIME_KEY: &str = "time";

/// JSON key for the level label
pub const LOGGER_LEVEL_KEY: &str = "level";

/// JSON key for the emitting target
pub const LOGGER_NAME_KEY: &str = "logger";

/// JSON key for the source location
pub const LOGGER_CALLER_KEY: &str = "caller";

/// JSON key for the message
pub const LOGGER_MESSAGE_KEY: &str = "msg";

/// JSON key for captured stack traces
pub const LOGGER_STACKTRACE_KEY: &str = "stacktrace";

/// Field name tracing gives the formatted message
pub const TRACING_MESSAGE_FIELD: &str = "message";
