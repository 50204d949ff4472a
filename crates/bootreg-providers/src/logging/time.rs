//! Record timestamps

use bootreg_domain::constants::LOGGER_TIME_PATTERN;
use chrono::Local;
use std::fmt;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

/// Local time preceded by a fixed prefix
///
/// Renders `"<prefix> 2024/01/31 - 13:04:05.123 "`, trailing space
/// included.
#[derive(Debug, Clone, Default)]
pub struct PrefixedTime {
    prefix: String,
}

impl PrefixedTime {
    /// Timestamps preceded by `prefix`
    pub fn new<S: Into<String>>(prefix: S) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Prefix placed before every timestamp
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Current time as a string
    pub fn now(&self) -> String {
        format!("{} {} ", self.prefix, Local::now().format(LOGGER_TIME_PATTERN))
    }
}

impl FormatTime for PrefixedTime {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        w.write_str(&self.now())
    }
}
