//! Domain Value Objects
//!
//! Plain data describing what a registry holds and how each resource is
//! configured. None of these types perform I/O.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`ResourceKind`] | Registry slot identifier |
//! | [`RetryPolicy`] | Attempt bound and linear backoff step |
//! | [`RedisOptions`] | Key-value client options |
//! | [`PostgresOptions`] | Relational pool options |
//! | [`ConfigReaderOptions`] | Configuration file location and section |
//! | [`LoggerOptions`] | Structured logger options |

/// Plugin option records
pub mod options;
/// Resource kinds held by a registry
pub mod resource;
/// Retry policy
pub mod retry;

mod duration_secs;

pub use options::{ConfigFormat, ConfigReaderOptions, LoggerOptions, PostgresOptions, RedisOptions};
pub use resource::ResourceKind;
pub use retry::RetryPolicy;
