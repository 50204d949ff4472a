//! Record encoders
//!
//! Both encodings carry the same information: time (with prefix), level,
//! caller, message, fields, the service name and an optional stack trace.
//!
//! Console records are tab separated:
//!
//! ```text
//! [orders] 2024/01/31 - 13:04:05.123 	info	[src/main.rs:12]	started	{"serviceName": "orders"}
//! ```
//!
//! JSON records are one object per line with the keys `time`, `level`,
//! `logger`, `caller`, `msg` and `serviceName`, followed by event fields.

use super::style::LevelStyle;
use super::time::PrefixedTime;
use crate::constants::*;
use bootreg_domain::constants::{
    LOGGER_ENCODING_CONSOLE, LOGGER_ENCODING_JSON, LOGGER_SERVICE_NAME_KEY,
};
use bootreg_domain::error::{Error, Result};
use serde_json::{Map, Value};
use std::backtrace::Backtrace;
use std::fmt::{self, Write as _};
use std::str::FromStr;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Metadata, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Output encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// One JSON object per line
    Json,
    /// Tab separated, human readable
    Console,
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            LOGGER_ENCODING_JSON => Ok(Self::Json),
            LOGGER_ENCODING_CONSOLE => Ok(Self::Console),
            other => Err(Error::configuration(format!(
                "Invalid logger encoding: {}. Use {} or {}",
                other, LOGGER_ENCODING_JSON, LOGGER_ENCODING_CONSOLE
            ))),
        }
    }
}

/// Formats every record written by the logger plugin
#[derive(Debug, Clone)]
pub struct RecordFormat {
    encoding: Encoding,
    style: LevelStyle,
    time: PrefixedTime,
    service_name: String,
    stacktrace_from: Option<Level>,
}

impl RecordFormat {
    /// Formatter for `encoding`
    pub fn new(encoding: Encoding, style: LevelStyle, time: PrefixedTime) -> Self {
        Self {
            encoding,
            style,
            time,
            service_name: String::new(),
            stacktrace_from: None,
        }
    }

    /// Attach `service_name` to every record
    pub fn with_service_name<S: Into<String>>(mut self, service_name: S) -> Self {
        self.service_name = service_name.into();
        self
    }

    /// Capture a stack trace for records at `level` or more severe
    pub fn with_stacktrace_from(mut self, level: Option<Level>) -> Self {
        self.stacktrace_from = level;
        self
    }

    fn stacktrace(&self, level: &Level) -> Option<String> {
        // tracing orders levels by verbosity: ERROR < WARN < ... < TRACE
        let threshold = self.stacktrace_from?;
        (*level <= threshold).then(|| Backtrace::force_capture().to_string())
    }

    fn format_console<S, N>(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result
    where
        S: Subscriber + for<'a> LookupSpan<'a>,
        N: for<'a> FormatFields<'a> + 'static,
    {
        let meta = event.metadata();
        let ansi = writer.has_ansi_escapes();

        write!(
            writer,
            "{}\t{}",
            self.time.now(),
            self.style.render(meta.level(), ansi)
        )?;
        if let Some(caller) = caller(meta) {
            write!(writer, "\t{}", caller)?;
        }
        writer.write_char('\t')?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        write!(
            writer,
            "\t{{\"{}\": {}}}",
            LOGGER_SERVICE_NAME_KEY,
            json_string(&self.service_name)?
        )?;
        if let Some(trace) = self.stacktrace(meta.level()) {
            write!(writer, "\n{}", trace.trim_end())?;
        }
        writeln!(writer)
    }

    fn format_json(&self, mut writer: Writer<'_>, event: &Event<'_>) -> fmt::Result {
        let meta = event.metadata();

        let mut fields = Map::new();
        event.record(&mut JsonVisitor(&mut fields));

        let mut record = Map::new();
        record.insert(LOGGER_TIME_KEY.to_string(), Value::from(self.time.now()));
        record.insert(
            LOGGER_LEVEL_KEY.to_string(),
            Value::from(self.style.label(meta.level())),
        );
        record.insert(LOGGER_NAME_KEY.to_string(), Value::from(meta.target()));
        if let Some(caller) = caller(meta) {
            record.insert(LOGGER_CALLER_KEY.to_string(), Value::from(caller));
        }
        record.insert(
            LOGGER_MESSAGE_KEY.to_string(),
            fields
                .remove(TRACING_MESSAGE_FIELD)
                .unwrap_or_else(|| Value::from("")),
        );
        record.insert(
            LOGGER_SERVICE_NAME_KEY.to_string(),
            Value::from(self.service_name.as_str()),
        );
        record.extend(fields);
        if let Some(trace) = self.stacktrace(meta.level()) {
            record.insert(LOGGER_STACKTRACE_KEY.to_string(), Value::from(trace));
        }

        let line = serde_json::to_string(&record).map_err(|_| fmt::Error)?;
        writeln!(writer, "{}", line)
    }
}

impl<S, N> FormatEvent<S, N> for RecordFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        match self.encoding {
            Encoding::Console => self.format_console(ctx, writer, event),
            Encoding::Json => self.format_json(writer, event),
        }
    }
}

/// `[file:line]` of the emitting call site
fn caller(meta: &Metadata<'_>) -> Option<String> {
    let file = meta.file()?;
    Some(match meta.line() {
        Some(line) => format!("[{}:{}]", file, line),
        None => format!("[{}]", file),
    })
}

fn json_string(value: &str) -> std::result::Result<String, fmt::Error> {
    serde_json::to_string(value).map_err(|_| fmt::Error)
}

/// Collects event fields into a JSON object
struct JsonVisitor<'a>(&'a mut Map<String, Value>);

impl Visit for JsonVisitor<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0
            .insert(field.name().to_string(), Value::from(format!("{:?}", value)));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), Value::from(value));
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.0.insert(field.name().to_string(), Value::from(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.0.insert(field.name().to_string(), Value::from(value));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.0.insert(field.name().to_string(), Value::from(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.0.insert(field.name().to_string(), Value::from(value));
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.0
            .insert(field.name().to_string(), Value::from(value.to_string()));
    }
}
