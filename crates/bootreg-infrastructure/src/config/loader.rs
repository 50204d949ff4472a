//! Configuration loader
//!
//! Loads the bootstrap configuration from default values, a TOML file and
//! environment variables using Figment.

use crate::config::BootstrapConfig;
use crate::constants::*;
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use bootreg_domain::constants::{LOGGER_ENCODING_CONSOLE, LOGGER_ENCODING_JSON};
use bootreg_domain::error::{Error, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration from all sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. `BootstrapConfig::default()`
    /// 2. TOML configuration file (explicit path, or the first default location found)
    /// 3. Environment variables, e.g. `BOOTREG__REDIS__ADDR`
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// file is not.
    pub fn load(&self) -> Result<BootstrapConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(BootstrapConfig::default()));

        if let Some(config_path) = &self.config_path {
            if !config_path.exists() {
                log_config_loaded(config_path, false);
                return Err(Error::not_found(config_path.display().to_string()));
            }
            figment = figment.merge(Toml::file(config_path));
            log_config_loaded(config_path, true);
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}{}", CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR))
                .split(CONFIG_ENV_SEPARATOR),
        );

        let config: BootstrapConfig = figment
            .extract()
            .config_context("Failed to extract bootstrap configuration")?;

        validate_bootstrap_config(&config)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &BootstrapConfig, path: P) -> Result<()> {
        let toml_string = toml::to_string_pretty(config)
            .config_context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;

        Ok(())
    }

    /// Get the configured file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
            dirs::config_dir()
                .map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME))
                .unwrap_or_default(),
        ];

        candidates
            .into_iter()
            .find(|path| !path.as_os_str().is_empty() && path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate bootstrap configuration
///
/// Catches values that would otherwise fail deep inside a plugin, or panic
/// inside a downstream builder, before any connection is attempted.
pub fn validate_bootstrap_config(config: &BootstrapConfig) -> Result<()> {
    validate_logging_config(config)?;
    validate_logger_options(config)?;
    validate_config_reader_options(config)?;
    validate_redis_options(config)?;
    validate_postgres_options(config)?;
    Ok(())
}

fn validate_logging_config(config: &BootstrapConfig) -> Result<()> {
    parse_log_level(&config.logging.level).map(|_| ())
}

fn validate_logger_options(config: &BootstrapConfig) -> Result<()> {
    if let Some(logger) = &config.logger {
        let encoding = logger.encoding.as_str();
        if encoding != LOGGER_ENCODING_JSON && encoding != LOGGER_ENCODING_CONSOLE {
            return Err(Error::configuration(format!(
                "Invalid logger encoding: {}. Use {} or {}",
                logger.encoding, LOGGER_ENCODING_JSON, LOGGER_ENCODING_CONSOLE
            )));
        }
        if logger.output_path.as_os_str().is_empty() {
            return Err(Error::configuration("Logger output path cannot be empty"));
        }
    }
    Ok(())
}

fn validate_config_reader_options(config: &BootstrapConfig) -> Result<()> {
    if let Some(reader) = &config.config_reader {
        reader.format()?;
        if reader.file_name.is_empty() {
            return Err(Error::configuration("Config reader file name cannot be empty"));
        }
    }
    Ok(())
}

fn validate_redis_options(config: &BootstrapConfig) -> Result<()> {
    match &config.redis {
        Some(redis) => redis.validate(),
        None => Ok(()),
    }
}

fn validate_postgres_options(config: &BootstrapConfig) -> Result<()> {
    if let Some(postgres) = &config.postgres {
        if postgres.source.trim().is_empty() {
            return Err(Error::configuration("PostgreSQL source cannot be empty"));
        }
        postgres.validate()?;
    }
    Ok(())
}
