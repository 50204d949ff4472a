//! Resource handles stored in the registry

use crate::error_ext::ErrorContext;
use bootreg_domain::error::{Error, Result};
use bootreg_domain::value_objects::ConfigFormat;
use figment::Figment;
use figment::value::{Dict, Value};
use r2d2_postgres::PostgresConnectionManager;
use r2d2_postgres::postgres::NoTls;
use serde::de::DeserializeOwned;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::Dispatch;

/// Redis client handle
pub use redis::Client as RedisClient;

/// PostgreSQL connection pool handle
pub type PgPool = r2d2::Pool<PostgresConnectionManager<NoTls>>;

/// A loaded configuration file
///
/// Keeps the parsed document so later consumers can decode other sections
/// without reading the file again.
#[derive(Debug, Clone)]
pub struct ConfigReader {
    figment: Figment,
    source_path: PathBuf,
    format: ConfigFormat,
}

impl ConfigReader {
    /// Wrap a parsed document
    pub fn new(figment: Figment, source_path: PathBuf, format: ConfigFormat) -> Self {
        Self {
            figment,
            source_path,
            format,
        }
    }

    /// Underlying figment
    pub fn figment(&self) -> &Figment {
        &self.figment
    }

    /// File the document was read from
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Format the document was parsed as
    pub fn format(&self) -> ConfigFormat {
        self.format
    }

    /// Decode the value at `key` (dotted paths allowed)
    ///
    /// Keys match case-insensitively when no exact match exists.
    pub fn extract_section<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let resolved = self.resolve_key(key);
        self.figment.extract_inner(&resolved).with_config_context(|| {
            format!(
                "Failed to decode section '{}' of {}",
                key,
                self.source_path.display()
            )
        })
    }

    /// Raw value at `key`, if present
    pub fn find_value(&self, key: &str) -> Option<Value> {
        self.figment.find_value(&self.resolve_key(key)).ok()
    }

    /// Whether `key` is present
    pub fn contains(&self, key: &str) -> bool {
        self.figment.contains(&self.resolve_key(key))
    }

    /// Spelling of `key` as it appears in the document
    ///
    /// Each dotted segment prefers an exact match, then the first key equal
    /// ignoring ASCII case. Unresolvable keys come back unchanged.
    fn resolve_key(&self, key: &str) -> String {
        if key.is_empty() || self.figment.contains(key) {
            return key.to_string();
        }
        let Ok(mut dict) = self.figment.extract::<Dict>() else {
            return key.to_string();
        };

        let mut resolved = Vec::new();
        let mut segments = key.split('.').peekable();
        while let Some(segment) = segments.next() {
            let found = match dict.remove(segment) {
                Some(value) => Some((segment.to_string(), value)),
                None => std::mem::take(&mut dict)
                    .into_iter()
                    .find(|(name, _)| name.eq_ignore_ascii_case(segment)),
            };
            let Some((name, value)) = found else {
                return key.to_string();
            };
            resolved.push(name);
            if segments.peek().is_some() {
                match value {
                    Value::Dict(_, inner) => dict = inner,
                    _ => return key.to_string(),
                }
            }
        }
        resolved.join(".")
    }
}

/// Structured logger handle
///
/// Owns a `tracing` dispatcher without installing it. Code that should
/// log through it runs inside [`Logger::in_scope`]; a binary that wants it
/// process-wide calls [`Logger::install_global`] once.
#[derive(Clone)]
pub struct Logger {
    dispatch: Dispatch,
    service_name: String,
    output_path: PathBuf,
}

impl Logger {
    /// Wrap a dispatcher built for `service_name`
    pub fn new(dispatch: Dispatch, service_name: String, output_path: PathBuf) -> Self {
        Self {
            dispatch,
            service_name,
            output_path,
        }
    }

    /// Dispatcher carrying the configured layers
    pub fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    /// Service name attached to every record
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Log file written alongside the console
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Run `f` with this logger as the thread's default dispatcher
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }

    /// Make this logger the process-wide default
    pub fn install_global(&self) -> Result<()> {
        tracing::dispatcher::set_global_default(self.dispatch.clone())
            .map_err(|e| Error::internal(format!("Failed to install global logger: {}", e)))
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("service_name", &self.service_name)
            .field("output_path", &self.output_path)
            .finish_non_exhaustive()
    }
}
