//! Timing instrumentation helpers

use std::time::{Duration, Instant};

/// Tracks elapsed time of a plugin application or connection attempt
///
/// # Example
///
/// ```ignore
/// use bootreg_infrastructure::utils::TimedOperation;
///
/// let timer = TimedOperation::start();
/// plugin.apply(&mut registry)?;
/// log_plugin_applied(name, timer.elapsed_ms());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TimedOperation {
    start: Instant,
}

impl TimedOperation {
    /// Start timing now
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Elapsed time in whole milliseconds
    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.start.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    /// Elapsed time as Duration
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
