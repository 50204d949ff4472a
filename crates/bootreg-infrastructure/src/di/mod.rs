//! Registry and plugin composition
//!
//! The registry is the composition root of a service: it holds the shared
//! handles created at startup. It is populated by applying plugins in
//! order, once, on a single thread; afterwards it is shared read-only
//! (typically behind an `Arc`).
//!
//! ```text
//! [logger, config, redis, postgres] ──apply in order──▶ Registry
//!                     │ first failure stops the sequence
//!                     ▼
//!            Err returned unchanged, earlier handles kept
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let registry = Registry::with_plugins([
//!     with_logger(logger_options),
//!     with_redis(redis_options),
//! ])?;
//!
//! let client = registry.redis().expect("redis plugin was applied");
//! ```

pub mod handles;
pub mod plugin;
pub mod registry;

pub use handles::{ConfigReader, Logger, PgPool, RedisClient};
pub use plugin::{plugin_fn, FnPlugin, Plugin};
pub use registry::Registry;
