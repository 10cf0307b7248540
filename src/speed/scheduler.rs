// SPDX-License-Identifier: MPL-2.0
//! Scaled timer scheduling.
//!
//! A nominal game delay is divided by the multiplier before reaching the
//! underlying scheduler, so a callback asking for "one virtual second"
//! fires after `1000 / multiplier` real milliseconds. Frame timestamps go
//! the other way: the schedule is untouched and only the carried value is
//! converted to virtual time.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::Interval;

use crate::speed::clock::VirtualClock;

/// Smallest period the underlying scheduler accepts for repeating timers.
const MIN_INTERVAL: Duration = Duration::from_nanos(1);

/// Divides a nominal delay by the multiplier.
///
/// Negative or non-finite delays clamp to zero. A non-positive multiplier
/// never reaches the division; it is treated as 1.
#[must_use]
pub fn scale_delay(nominal_ms: f64, multiplier: f64) -> f64 {
    let nominal = if nominal_ms.is_finite() && nominal_ms > 0.0 {
        nominal_ms
    } else {
        0.0
    };
    let divisor = if multiplier > 0.0 { multiplier } else { 1.0 };
    nominal / divisor
}

/// Timer facade over a [`VirtualClock`].
///
/// One-shot and repeating delays are rate-scaled; frame timestamps are
/// value-translated only.
#[derive(Clone)]
pub struct ScaledTimers {
    clock: Arc<VirtualClock>,
}

impl ScaledTimers {
    /// Timers driven by the given virtual clock.
    #[must_use]
    pub fn new(clock: Arc<VirtualClock>) -> Self {
        Self { clock }
    }

    /// The real delay handed to the underlying scheduler for a nominal
    /// game delay.
    #[must_use]
    pub fn real_delay(&self, nominal: Duration) -> Duration {
        let scaled_ms = scale_delay(
            nominal.as_secs_f64() * 1_000.0,
            self.clock.multiplier().value(),
        );
        Duration::from_secs_f64(scaled_ms / 1_000.0)
    }

    /// One-shot delay: sleeps for the scaled real duration.
    pub async fn sleep_scaled(&self, nominal: Duration) {
        tokio::time::sleep(self.real_delay(nominal)).await;
    }

    /// Repeating delay: ticks every scaled real period.
    #[must_use]
    pub fn interval_scaled(&self, nominal: Duration) -> Interval {
        // tokio rejects a zero period.
        tokio::time::interval(self.real_delay(nominal).max(MIN_INTERVAL))
    }

    /// Converts a real frame timestamp to virtual time.
    #[must_use]
    pub fn virtualize_frame_timestamp(&self, real_timestamp: f64) -> f64 {
        self.clock.virtualize_timestamp(real_timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::time::TimeSource;
    use crate::domain::speed::SpeedMultiplier;
    use crate::test_utils::ManualTimeSource;

    fn timers_at(multiplier: f64) -> ScaledTimers {
        let source = Arc::new(ManualTimeSource::starting_at(0.0));
        let clock = Arc::new(VirtualClock::new(
            source as Arc<dyn TimeSource>,
            SpeedMultiplier::new(multiplier),
        ));
        ScaledTimers::new(clock)
    }

    #[test]
    fn nominal_two_seconds_at_ten_x_is_two_hundred_millis() {
        assert_eq!(scale_delay(2_000.0, 10.0), 200.0);

        let timers = timers_at(10.0);
        assert_eq!(
            timers.real_delay(Duration::from_millis(2_000)),
            Duration::from_millis(200)
        );
    }

    #[test]
    fn negative_and_non_finite_delays_clamp_to_zero() {
        assert_eq!(scale_delay(-5.0, 10.0), 0.0);
        assert_eq!(scale_delay(f64::NAN, 10.0), 0.0);
        assert_eq!(scale_delay(f64::INFINITY, 10.0), 0.0);
    }

    #[test]
    fn non_positive_multiplier_never_reaches_the_division() {
        assert_eq!(scale_delay(1_000.0, 0.0), 1_000.0);
        assert_eq!(scale_delay(1_000.0, -4.0), 1_000.0);
    }

    #[test]
    fn one_x_passes_delays_through() {
        let timers = timers_at(1.0);
        assert_eq!(
            timers.real_delay(Duration::from_millis(750)),
            Duration::from_millis(750)
        );
    }

    #[tokio::test]
    async fn sleep_scaled_completes() {
        let timers = timers_at(20.0);
        // 100ms nominal at 20x is 5ms real; this completes promptly.
        timers.sleep_scaled(Duration::from_millis(100)).await;
    }

    #[tokio::test]
    async fn interval_scaled_ticks_with_a_zero_nominal_period() {
        let timers = timers_at(10.0);
        let mut interval = timers.interval_scaled(Duration::ZERO);
        // The first tick resolves immediately even though the nominal
        // period collapsed to the scheduler minimum.
        let _ = interval.tick().await;
    }
}
