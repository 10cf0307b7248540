// SPDX-License-Identifier: MPL-2.0
//! Virtual clock service.
//!
//! Decorates a [`TimeSource`] with the affine transform from
//! [`crate::domain::clock`]: every reading the game sees is
//! `virtualAnchor + (real - realAnchor) * multiplier`. The wall clock and
//! the high-resolution clock each carry their own anchor pair, and both are
//! re-anchored whenever the multiplier changes so virtual time stays
//! continuous across the change.

use std::sync::{Arc, Mutex};

use crate::application::port::time::TimeSource;
use crate::domain::clock::AnchoredClock;
use crate::domain::speed::SpeedMultiplier;

struct ClockState {
    multiplier: SpeedMultiplier,
    wall: AnchoredClock,
    /// Absent when the time source lacks a high-resolution reading; that
    /// transform is then skipped entirely.
    perf: Option<AnchoredClock>,
}

/// Shareable virtual clock over a real time source.
pub struct VirtualClock {
    source: Arc<dyn TimeSource>,
    state: Mutex<ClockState>,
}

impl VirtualClock {
    /// Anchors a virtual clock to the source's current readings.
    #[must_use]
    pub fn new(source: Arc<dyn TimeSource>, multiplier: SpeedMultiplier) -> Self {
        let wall = AnchoredClock::new(source.wall_millis());
        let perf = source.perf_millis().map(AnchoredClock::new);
        Self {
            source,
            state: Mutex::new(ClockState {
                multiplier,
                wall,
                perf,
            }),
        }
    }

    /// Current multiplier.
    #[must_use]
    pub fn multiplier(&self) -> SpeedMultiplier {
        self.lock_state().multiplier
    }

    /// Virtual wall-clock reading, floored to whole milliseconds.
    #[must_use]
    pub fn now_millis(&self) -> f64 {
        let state = self.lock_state();
        state
            .wall
            .project(self.source.wall_millis(), state.multiplier.value())
            .floor()
    }

    /// Virtual high-resolution reading, or `None` when the source has no
    /// high-resolution clock.
    #[must_use]
    pub fn perf_now(&self) -> Option<f64> {
        let state = self.lock_state();
        let anchor = state.perf?;
        let real = self.source.perf_millis()?;
        Some(anchor.project(real, state.multiplier.value()))
    }

    /// Converts a real frame timestamp to virtual time.
    ///
    /// Frame timestamps ride the high-resolution transform when the source
    /// has one, the wall transform otherwise. Only the carried value is
    /// virtualized; frame pacing stays at the real display rate.
    #[must_use]
    pub fn virtualize_timestamp(&self, real_timestamp: f64) -> f64 {
        let state = self.lock_state();
        match state.perf {
            Some(anchor) => anchor.project(real_timestamp, state.multiplier.value()),
            None => state.wall.project(real_timestamp, state.multiplier.value()),
        }
    }

    /// Applies a new multiplier, re-anchoring both clocks at the current
    /// real readings so the virtual values stay continuous.
    ///
    /// Non-finite input falls back to the multiplier already in effect.
    /// Returns the clamped, applied value.
    pub fn set_multiplier(&self, value: f64) -> SpeedMultiplier {
        let mut state = self.lock_state();
        let old = state.multiplier.value();
        let applied = SpeedMultiplier::clamp_or(value, state.multiplier);

        state.wall = state.wall.rebase(self.source.wall_millis(), old);
        if let (Some(anchor), Some(real)) = (state.perf, self.source.perf_millis()) {
            state.perf = Some(anchor.rebase(real, old));
        }
        state.multiplier = applied;
        applied
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, ClockState> {
        // A panic while holding the lock leaves only stale anchors behind;
        // the readings stay usable.
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ManualTimeSource;

    fn clock_at(source: &Arc<ManualTimeSource>, multiplier: f64) -> VirtualClock {
        VirtualClock::new(
            Arc::clone(source) as Arc<dyn TimeSource>,
            SpeedMultiplier::new(multiplier),
        )
    }

    #[test]
    fn wall_reading_scales_elapsed_time() {
        let source = Arc::new(ManualTimeSource::starting_at(1_000.0));
        let clock = clock_at(&source, 10.0);

        source.advance(100.0);
        assert_eq!(clock.now_millis(), 2_000.0);
    }

    #[test]
    fn wall_reading_is_floored() {
        let source = Arc::new(ManualTimeSource::starting_at(0.0));
        let clock = clock_at(&source, 10.0);

        source.advance(0.55);
        assert_eq!(clock.now_millis(), 5.0);
    }

    #[test]
    fn perf_reading_is_not_floored() {
        let source = Arc::new(ManualTimeSource::starting_at(0.0));
        let clock = clock_at(&source, 10.0);

        source.advance(0.55);
        let perf = clock.perf_now().expect("perf clock available");
        assert!((perf - 5.5).abs() < 1e-9);
    }

    #[test]
    fn perf_reading_is_skipped_without_a_high_resolution_source() {
        let source = Arc::new(ManualTimeSource::wall_only(1_000.0));
        let clock = clock_at(&source, 10.0);

        assert_eq!(clock.perf_now(), None);
    }

    #[test]
    fn multiplier_reads_are_idempotent() {
        let source = Arc::new(ManualTimeSource::starting_at(0.0));
        let clock = clock_at(&source, 12.5);

        assert_eq!(clock.multiplier(), clock.multiplier());
    }

    #[test]
    fn set_multiplier_preserves_continuity() {
        let source = Arc::new(ManualTimeSource::starting_at(0.0));
        let clock = clock_at(&source, 10.0);
        source.advance(100.0);

        let before = clock.now_millis();
        let applied = clock.set_multiplier(2.0);
        let after = clock.now_millis();

        assert_eq!(applied.value(), 2.0);
        assert_eq!(before, after);

        // Rate going forward matches the new multiplier.
        source.advance(100.0);
        assert_eq!(clock.now_millis(), before + 200.0);
    }

    #[test]
    fn set_multiplier_zero_clamps_to_minimum() {
        let source = Arc::new(ManualTimeSource::starting_at(0.0));
        let clock = clock_at(&source, 10.0);

        let applied = clock.set_multiplier(0.0);
        assert_eq!(applied.value(), 1.0);
    }

    #[test]
    fn set_multiplier_non_finite_keeps_prior_value() {
        let source = Arc::new(ManualTimeSource::starting_at(0.0));
        let clock = clock_at(&source, 7.0);

        let applied = clock.set_multiplier(f64::NAN);
        assert_eq!(applied.value(), 7.0);
    }

    #[test]
    fn frame_timestamps_use_the_perf_transform_when_available() {
        let source = Arc::new(ManualTimeSource::starting_at(0.0));
        let clock = clock_at(&source, 10.0);

        // A frame arriving 16ms (real) after install carries a 160ms
        // virtual timestamp.
        assert!((clock.virtualize_timestamp(16.0) - 160.0).abs() < 1e-9);
    }

    #[test]
    fn frame_timestamps_fall_back_to_the_wall_transform() {
        let source = Arc::new(ManualTimeSource::wall_only(1_000.0));
        let clock = clock_at(&source, 10.0);

        assert!((clock.virtualize_timestamp(1_016.0) - 1_160.0).abs() < 1e-9);
    }
}
