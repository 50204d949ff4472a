// Clippy allows for complex patterns in infrastructure code
#![allow(clippy::collapsible_if)]

//! # Infrastructure Layer
//!
//! The registry, the plugin composition driver and the cross-cutting
//! pieces every plugin shares.
//!
//! Concrete plugins (Redis, PostgreSQL, configuration reader, logger) live
//! in the `bootreg-providers` crate and plug into [`di::Plugin`].
//!
//! ## Module Categories
//!
//! ### Composition
//! | Module | Description |
//! |--------|-------------|
//! | [`di`] | `Registry`, `Plugin` trait, resource handles |
//! | [`retry`] | Bounded retry with linear backoff |
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-backed bootstrap configuration |
//! | [`constants`] | Config file names and env prefixes |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Level parsing and structured log helpers |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;
pub mod retry;
pub mod utils;

// Re-export commonly used types
pub use di::{Plugin, Registry};
pub use error_ext::ErrorContext;
pub use retry::{Sleeper, ThreadSleeper};
pub use utils::TimedOperation;
