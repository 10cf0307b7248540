// SPDX-License-Identifier: MPL-2.0
//! System clock adapter.

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use crate::application::port::time::TimeSource;

/// Time source backed by the operating-system clocks.
///
/// The wall reading comes from [`SystemTime`]; the high-resolution reading
/// is the elapsed time of a process-local [`Instant`] origin, which is
/// monotonic and immune to wall-clock adjustments.
#[derive(Debug, Clone)]
pub struct SystemTimeSource {
    origin: Instant,
}

impl SystemTimeSource {
    /// Creates a source anchored at the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemTimeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for SystemTimeSource {
    fn wall_millis(&self) -> f64 {
        // A wall clock set before the epoch reads as the epoch itself.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0.0, |elapsed| elapsed.as_secs_f64() * 1_000.0)
    }

    fn perf_millis(&self) -> Option<f64> {
        Some(self.origin.elapsed().as_secs_f64() * 1_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wall_reading_is_past_the_epoch() {
        let source = SystemTimeSource::new();
        assert!(source.wall_millis() > 0.0);
    }

    #[test]
    fn perf_reading_is_available_and_monotonic() {
        let source = SystemTimeSource::new();
        let first = source.perf_millis().expect("perf reading available");
        let second = source.perf_millis().expect("perf reading available");
        assert!(second >= first);
    }
}
