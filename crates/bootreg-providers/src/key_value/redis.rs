//! Redis client plugin
//!
//! Opens a fresh client on every attempt and confirms it with a `PING`
//! round trip before storing it. A client that failed is dropped, never
//! reused for the next attempt.
//!
//! ## Example
//!
//! ```ignore
//! use bootreg_providers::key_value::RedisPlugin;
//!
//! let plugin = RedisPlugin::new(RedisOptions::new("localhost:6379").with_db(1));
//! registry.add_plugin(Box::new(plugin))?;
//! ```

use crate::constants::{PLUGIN_NAME_REDIS, REDIS_PING_COMMAND, REDIS_URL_SCHEME};
use bootreg_domain::error::{Error, Result};
use bootreg_domain::value_objects::{RedisOptions, ResourceKind};
use bootreg_infrastructure::di::{Plugin, RedisClient, Registry};
use bootreg_infrastructure::error_ext::ErrorContext;
use bootreg_infrastructure::retry::{Sleeper, ThreadSleeper, retry_with_policy};
use redis::{ConnectionInfo, IntoConnectionInfo, RedisResult};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Redis client plugin
///
/// Populates the key-value slot of the registry.
pub struct RedisPlugin {
    options: RedisOptions,
    sleeper: Arc<dyn Sleeper>,
}

impl RedisPlugin {
    /// Create a plugin that sleeps on the calling thread between attempts
    pub fn new(options: RedisOptions) -> Self {
        Self {
            options,
            sleeper: Arc::new(ThreadSleeper),
        }
    }

    /// Replace the sleeper used between attempts
    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Options this plugin connects with
    pub fn options(&self) -> &RedisOptions {
        &self.options
    }

    /// Connect and verify liveness, retrying per the configured policy
    ///
    /// A malformed address fails before the first attempt. Once every
    /// attempt has failed the error is [`Error::RetriesExhausted`].
    pub fn connect(&self) -> Result<RedisClient> {
        self.options.validate()?;
        let info = connection_info(&self.options)?;
        let timeout = self.options.connect_timeout;

        let client = retry_with_policy(
            ResourceKind::KeyValue,
            &self.options.retry,
            self.sleeper.as_ref(),
            |attempt| {
                debug!(
                    addr = %self.options.addr,
                    db = self.options.db,
                    attempt = attempt + 1,
                    "Connecting to Redis"
                );
                open_and_ping(&info, timeout)
            },
        )?;

        Ok(client)
    }
}

impl Plugin for RedisPlugin {
    fn name(&self) -> &str {
        PLUGIN_NAME_REDIS
    }

    fn apply(self: Box<Self>, registry: &mut Registry) -> Result<()> {
        let client = self.connect()?;
        registry.set_redis(client);
        Ok(())
    }
}

/// Box a [`RedisPlugin`] for `options`
pub fn with_redis(options: RedisOptions) -> Box<dyn Plugin> {
    Box::new(RedisPlugin::new(options))
}

/// Connection URL for `options`, credentials included
pub fn redis_url(options: &RedisOptions) -> Result<Url> {
    let mut url = Url::parse(&format!(
        "{}://{}/{}",
        REDIS_URL_SCHEME,
        options.addr.trim(),
        options.db
    ))
    .with_config_context(|| format!("Invalid Redis address: {}", options.addr))?;

    if let Some(username) = options.username.as_deref().filter(|u| !u.is_empty()) {
        url.set_username(username)
            .map_err(|()| Error::configuration("Redis address cannot carry a user name"))?;
    }
    if !options.password.is_empty() {
        url.set_password(Some(&options.password))
            .map_err(|()| Error::configuration("Redis address cannot carry a password"))?;
    }
    Ok(url)
}

fn connection_info(options: &RedisOptions) -> Result<ConnectionInfo> {
    redis_url(options)?
        .as_str()
        .into_connection_info()
        .with_config_context(|| format!("Invalid Redis address: {}", options.addr))
}

fn open_and_ping(info: &ConnectionInfo, timeout: Duration) -> RedisResult<RedisClient> {
    let client = RedisClient::open(info.clone())?;
    let mut connection = client.get_connection_with_timeout(timeout)?;
    redis::cmd(REDIS_PING_COMMAND).query::<String>(&mut connection)?;
    Ok(client)
}
