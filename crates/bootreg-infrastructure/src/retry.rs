//! Bounded retry with linear backoff
//!
//! Shared by every plugin that contacts a remote resource. The operation is
//! handed the 0-indexed attempt number; after failed attempt `i` the helper
//! sleeps `backoff(i)` before trying again or giving up. With the default
//! policy that is 0, 1, 2, 3 and 4 seconds across five attempts.
//!
//! Sleeping goes through [`Sleeper`] so the schedule can be observed
//! without waiting on a real clock.
//!
//! ```ignore
//! let client = retry_with_policy(ResourceKind::KeyValue, &policy, &ThreadSleeper, |_| {
//!     let client = redis::Client::open(url.as_str())?;
//!     ping(&client).map(|_| client)
//! })?;
//! ```

use crate::logging::log_retry_attempt;
use bootreg_domain::error::Error;
use bootreg_domain::value_objects::{ResourceKind, RetryPolicy};
use std::fmt;
use std::sync::Mutex;
use std::time::Duration;
use tracing::debug;

/// Blocks the calling thread between attempts
pub trait Sleeper: Send + Sync {
    /// Sleep for `duration`
    fn sleep(&self, duration: Duration);
}

/// Sleeps with `std::thread::sleep`
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Records requested delays instead of sleeping
#[derive(Debug, Default)]
pub struct RecordingSleeper {
    delays: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Delays requested so far, in order
    pub fn delays(&self) -> Vec<Duration> {
        self.delays
            .lock()
            .map(|delays| delays.clone())
            .unwrap_or_default()
    }

    /// Number of sleeps requested so far
    pub fn calls(&self) -> usize {
        self.delays.lock().map(|delays| delays.len()).unwrap_or(0)
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, duration: Duration) {
        if let Ok(mut delays) = self.delays.lock() {
            delays.push(duration);
        }
    }
}

/// Every attempt failed
#[derive(Debug)]
pub struct Exhausted<E> {
    /// Resource that was being contacted
    pub resource: ResourceKind,
    /// Attempts made
    pub attempts: u32,
    /// Failure of the final attempt
    pub last_error: E,
}

impl<E> From<Exhausted<E>> for Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn from(exhausted: Exhausted<E>) -> Self {
        Error::retries_exhausted_with_source(
            exhausted.resource,
            exhausted.attempts,
            exhausted.last_error,
        )
    }
}

/// Run `operation` until it succeeds or `max_attempts` attempts have failed
///
/// Returns on the first success without further attempts. A bound of 0 is
/// treated as 1; callers validate their policy before getting here.
pub fn retry<T, E, B, F>(
    resource: ResourceKind,
    max_attempts: u32,
    backoff: B,
    sleeper: &dyn Sleeper,
    mut operation: F,
) -> Result<T, Exhausted<E>>
where
    E: fmt::Display,
    B: Fn(u32) -> Duration,
    F: FnMut(u32) -> Result<T, E>,
{
    let max_attempts = max_attempts.max(1);
    let mut attempt = 0;
    loop {
        match operation(attempt) {
            Ok(value) => {
                debug!(
                    resource = resource.as_str(),
                    attempts = attempt + 1,
                    "Resource reachable"
                );
                return Ok(value);
            }
            Err(err) => {
                let delay = backoff(attempt);
                log_retry_attempt(resource, attempt + 1, max_attempts, delay, &err);
                sleeper.sleep(delay);
                attempt += 1;
                if attempt >= max_attempts {
                    return Err(Exhausted {
                        resource,
                        attempts: attempt,
                        last_error: err,
                    });
                }
            }
        }
    }
}

/// [`retry`] driven by a [`RetryPolicy`]
pub fn retry_with_policy<T, E, F>(
    resource: ResourceKind,
    policy: &RetryPolicy,
    sleeper: &dyn Sleeper,
    operation: F,
) -> Result<T, Exhausted<E>>
where
    E: fmt::Display,
    F: FnMut(u32) -> Result<T, E>,
{
    retry(
        resource,
        policy.max_attempts,
        |attempt| policy.delay_after(attempt),
        sleeper,
        operation,
    )
}
