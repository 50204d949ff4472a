//! Logger plugin
//!
//! Building the logger opens the output file in append mode, creating it
//! and its parent directories when missing. Nothing is installed globally;
//! the registry keeps the dispatcher in a
//! [`Logger`](bootreg_infrastructure::di::Logger) handle.

use super::format::{Encoding, RecordFormat};
use super::style::LevelStyle;
use super::time::PrefixedTime;
use crate::constants::PLUGIN_NAME_LOGGER;
use bootreg_domain::error::{Error, Result};
use bootreg_domain::value_objects::LoggerOptions;
use bootreg_infrastructure::di::{Logger, Plugin, Registry};
use bootreg_infrastructure::error_ext::ErrorContext;
use bootreg_infrastructure::logging::level_from_code;
use std::path::Path;
use tracing::{Dispatch, Level};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::Layer;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;

/// Structured logger plugin
///
/// Populates the logger slot of the registry.
pub struct LoggerPlugin {
    options: LoggerOptions,
}

impl LoggerPlugin {
    /// Create a plugin for `options`
    pub fn new(options: LoggerOptions) -> Self {
        Self { options }
    }

    /// Options this plugin builds the logger with
    pub fn options(&self) -> &LoggerOptions {
        &self.options
    }
}

impl Plugin for LoggerPlugin {
    fn name(&self) -> &str {
        PLUGIN_NAME_LOGGER
    }

    fn apply(self: Box<Self>, registry: &mut Registry) -> Result<()> {
        let logger = build_logger(&self.options)?;
        registry.set_logger(logger);
        Ok(())
    }
}

/// Box a [`LoggerPlugin`] for `options`
pub fn with_logger(options: LoggerOptions) -> Box<dyn Plugin> {
    Box::new(LoggerPlugin::new(options))
}

/// Build a logger handle for `options`
///
/// An unknown encoding is a configuration error. An unknown level style
/// falls back to [`LevelStyle::LowercaseColor`] with a warning. Console
/// records of every level go to standard output.
pub fn build_logger(options: &LoggerOptions) -> Result<Logger> {
    build_logger_with_console(options, std::io::stdout)
}

/// [`build_logger`] writing console records to `console`
///
/// Failures to write a record are reported on standard error by both
/// layers.
pub fn build_logger_with_console<W>(options: &LoggerOptions, console: W) -> Result<Logger>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let encoding: Encoding = options.encoding.parse()?;
    let style = LevelStyle::from_name_or_default(&options.level_style);
    let level = level_from_code(options.level);

    let stacktrace_from = if options.disable_stacktrace {
        None
    } else if options.development {
        Some(Level::WARN)
    } else {
        Some(Level::ERROR)
    };

    let records = RecordFormat::new(encoding, style, PrefixedTime::new(&options.prefix))
        .with_service_name(&options.service_name)
        .with_stacktrace_from(stacktrace_from);

    let file_layer = tracing_subscriber::fmt::layer()
        .event_format(records.clone())
        .with_writer(open_output(&options.output_path)?)
        .with_ansi(false)
        .log_internal_errors(true)
        .with_filter(level);

    let console_layer = tracing_subscriber::fmt::layer()
        .event_format(records)
        .with_writer(console)
        .log_internal_errors(true)
        .with_filter(level);

    let subscriber = tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer);

    Ok(Logger::new(
        Dispatch::new(subscriber),
        options.service_name.clone(),
        options.output_path.clone(),
    ))
}

fn open_output(path: &Path) -> Result<RollingFileAppender> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            Error::configuration(format!(
                "Logger output path has no file name: {}",
                path.display()
            ))
        })?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
        .io_context(format!("Failed to open log output {}", path.display()))
}
