//! Structured logging with tracing
//!
//! Level parsing shared with the logger plugin, subscriber setup for
//! bootreg's own diagnostics, and the log helpers used while composing a
//! registry.

use bootreg_domain::error::{Error, Result};
use bootreg_domain::value_objects::ResourceKind;

// Re-export LoggingConfig for convenience
pub use crate::config::LoggingConfig;
use crate::constants::LOG_FILTER_ENV;
use std::fmt::Display;
use std::time::Duration;
use tracing::level_filters::LevelFilter;
use tracing::{debug, error, info, warn, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Install a global subscriber for bootreg's own diagnostics
///
/// `BOOTREG_LOG` overrides the configured level with an `EnvFilter`
/// directive. Fails if a global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let registry = Registry::default().with(filter);
    let installed = if config.json_format {
        registry
            .with(fmt::layer().json().with_target(true).with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .try_init()
    };
    installed.map_err(|e| Error::internal(format!("Failed to install logging: {}", e)))?;

    debug!("Logging initialized with level: {}", level);
    Ok(())
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::Configuration {
            message: format!(
                "Invalid log level: {}. Use trace, debug, info, warn, or error",
                level
            ),
            source: None,
        }),
    }
}

/// Map a numeric level code onto a tracing filter
///
/// Codes follow the -1 debug, 0 info, 1 warn, 2 error convention. Codes
/// 3 to 5 (dpanic, panic, fatal) have no tracing counterpart and keep
/// error-level records; anything below -1 enables trace.
pub fn level_from_code(code: i8) -> LevelFilter {
    match code {
        i8::MIN..=-2 => LevelFilter::TRACE,
        -1 => LevelFilter::DEBUG,
        0 => LevelFilter::INFO,
        1 => LevelFilter::WARN,
        _ => LevelFilter::ERROR,
    }
}

/// Log configuration loading status
pub fn log_config_loaded(config_path: &std::path::Path, success: bool) {
    if success {
        info!("Configuration loaded from {}", config_path.display());
    } else {
        warn!("Configuration file not found: {}", config_path.display());
    }
}

/// Log a failed connection attempt and the delay before the next one
pub fn log_retry_attempt(
    resource: ResourceKind,
    attempt: u32,
    max_attempts: u32,
    delay: Duration,
    err: &dyn Display,
) {
    warn!(
        resource = resource.as_str(),
        attempt,
        max_attempts,
        delay_ms = delay.as_millis() as u64,
        error = %err,
        "Connection attempt failed"
    );
}

/// Log a plugin that was applied to the registry
pub fn log_plugin_applied(plugin: &str, elapsed_ms: u64) {
    info!(plugin, elapsed_ms, "Plugin applied");
}

/// Log a plugin that stopped the composition
pub fn log_plugin_failed(plugin: &str, err: &Error) {
    error!(plugin, error = %err, "Plugin failed, remaining plugins skipped");
}
