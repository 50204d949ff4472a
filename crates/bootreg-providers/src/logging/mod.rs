//! Structured Logger Plugin
//!
//! Builds a `tracing` dispatcher that writes every record to the console
//! and to a log file. Console records of every level go to stdout;
//! stderr only carries the logger's own write failures.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`plugin`] | `LoggerPlugin` and subscriber assembly |
//! | [`format`] | Console and JSON record encoders |
//! | [`style`] | Level label styles |
//! | [`time`] | Prefixed timestamps |

pub mod format;
pub mod plugin;
pub mod style;
pub mod time;

pub use format::{Encoding, RecordFormat};
pub use plugin::{LoggerPlugin, build_logger, build_logger_with_console, with_logger};
pub use style::LevelStyle;
pub use time::PrefixedTime;
