//! Infrastructure layer constants
//!
//! Option defaults are defined in `bootreg_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default bootstrap configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "bootreg.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "bootreg";

/// Environment variable prefix for configuration (`BOOTREG__REDIS__ADDR`)
pub const CONFIG_ENV_PREFIX: &str = "BOOTREG";

/// Separator between the prefix and nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default level for bootreg's own diagnostics
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding an `EnvFilter` directive
pub const LOG_FILTER_ENV: &str = "BOOTREG_LOG";
