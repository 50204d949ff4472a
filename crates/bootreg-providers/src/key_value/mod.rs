//! Key-Value Store Plugins
//!
//! | Plugin | Handle | Liveness check |
//! |--------|--------|----------------|
//! | [`RedisPlugin`] | `redis::Client` | `PING` round trip |

pub mod redis;

pub use self::redis::{RedisPlugin, redis_url, with_redis};
