//! Relational Pool Plugins
//!
//! | Plugin | Handle | Success condition |
//! |--------|--------|-------------------|
//! | [`PostgresPlugin`] | `r2d2::Pool` | pool built with `min_idle` connections |

pub mod postgres;

pub use self::postgres::{PostgresPlugin, parse_source, with_postgres};
