use crate::constants::{DEFAULT_RETRY_ATTEMPTS, DEFAULT_RETRY_STEP_SECS};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Bounded retry with linear backoff
///
/// After failed attempt `i` (0-indexed) the caller sleeps `i * backoff_step`,
/// so the defaults give delays of 0, 1, 2, 3 and 4 seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Total attempts, including the first
    pub max_attempts: u32,

    /// Backoff growth per attempt
    #[serde(rename = "backoff_step_secs", with = "super::duration_secs")]
    pub backoff_step: Duration,
}

impl RetryPolicy {
    /// Policy with an explicit attempt bound and step
    pub fn new(max_attempts: u32, backoff_step: Duration) -> Self {
        Self {
            max_attempts,
            backoff_step,
        }
    }

    /// Delay slept after failed attempt `attempt`
    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.backoff_step.saturating_mul(attempt)
    }

    /// Reject policies that would never attempt anything
    pub fn validate(&self) -> Result<()> {
        if self.max_attempts == 0 {
            return Err(Error::configuration("Retry attempts cannot be 0"));
        }
        Ok(())
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_RETRY_ATTEMPTS,
            backoff_step: Duration::from_secs(DEFAULT_RETRY_STEP_SECS),
        }
    }
}
