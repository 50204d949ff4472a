//! # Domain Layer
//!
//! Pure types shared by every bootreg crate: the error taxonomy, the kinds
//! of resource a registry can hold, and the option records each plugin is
//! configured with.
//!
//! Nothing here talks to the outside world. Option records are validated
//! here only where a bad value would otherwise panic inside a downstream
//! library; everything else is validated by the library being configured.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | `Error` enum and `Result` alias |
//! | [`constants`] | Default values for option records |
//! | [`value_objects`] | Resource kinds, retry policy and plugin options |

pub mod constants;
pub mod error;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::{
    ConfigFormat, ConfigReaderOptions, LoggerOptions, PostgresOptions, RedisOptions,
    ResourceKind, RetryPolicy,
};
