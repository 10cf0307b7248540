// SPDX-License-Identifier: MPL-2.0
//! Affine clock transform state.
//!
//! A virtual clock relates to the real clock through an anchor pair: at any
//! real time `R`, the virtual reading is `V0 + (R - R0) * multiplier`.
//! Changing the multiplier re-anchors the pair at the current readings so
//! the virtual value stays continuous and only its rate changes.

/// Anchor pair `(real_anchor, virtual_anchor)` for one time source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchoredClock {
    real_anchor: f64,
    virtual_anchor: f64,
}

impl AnchoredClock {
    /// Anchors a fresh clock at `real_now`.
    ///
    /// The virtual reading starts equal to the real one, so a freshly
    /// installed clock is indistinguishable from the source until time
    /// advances.
    #[must_use]
    pub const fn new(real_now: f64) -> Self {
        Self {
            real_anchor: real_now,
            virtual_anchor: real_now,
        }
    }

    /// Reconstructs a clock from a specific anchor pair.
    #[must_use]
    pub const fn anchored_at(real_anchor: f64, virtual_anchor: f64) -> Self {
        Self {
            real_anchor,
            virtual_anchor,
        }
    }

    /// Projects the virtual reading at real time `real_now`.
    #[must_use]
    pub fn project(&self, real_now: f64, multiplier: f64) -> f64 {
        self.virtual_anchor + (real_now - self.real_anchor) * multiplier
    }

    /// Re-anchors at `real_now`, preserving the virtual value the old
    /// multiplier produced there.
    ///
    /// This is the continuity guarantee: the virtual clock never jumps at
    /// the moment of a multiplier change.
    #[must_use]
    pub fn rebase(&self, real_now: f64, old_multiplier: f64) -> Self {
        Self {
            real_anchor: real_now,
            virtual_anchor: self.project(real_now, old_multiplier),
        }
    }

    /// Returns the real anchor.
    #[must_use]
    pub const fn real_anchor(&self) -> f64 {
        self.real_anchor
    }

    /// Returns the virtual anchor.
    #[must_use]
    pub const fn virtual_anchor(&self) -> f64 {
        self.virtual_anchor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_clock_reads_like_the_source_at_one_x() {
        let clock = AnchoredClock::new(5_000.0);
        assert_eq!(clock.project(5_000.0, 1.0), 5_000.0);
        assert_eq!(clock.project(5_250.0, 1.0), 5_250.0);
    }

    #[test]
    fn projection_scales_elapsed_time_only() {
        let clock = AnchoredClock::new(1_000.0);
        // 100ms of real time at 10x reads as 1000ms of virtual time.
        assert_eq!(clock.project(1_100.0, 10.0), 2_000.0);
        assert_eq!(clock.project(1_000.0, 10.0), 1_000.0);
    }

    #[test]
    fn rebase_preserves_virtual_value_at_the_switch_point() {
        let clock = AnchoredClock::new(0.0);
        let before = clock.project(400.0, 10.0);

        let rebased = clock.rebase(400.0, 10.0);
        let after = rebased.project(400.0, 3.0);

        assert_eq!(before, after);
    }

    #[test]
    fn rebase_changes_only_the_rate_going_forward() {
        let clock = AnchoredClock::new(0.0);
        let rebased = clock.rebase(100.0, 10.0);

        // 50ms of further real time now advances the virtual clock at 2x.
        assert_eq!(rebased.project(150.0, 2.0), 1_000.0 + 100.0);
    }

    #[test]
    fn anchored_at_round_trips_accessors() {
        let clock = AnchoredClock::anchored_at(10.0, 90.0);
        assert_eq!(clock.real_anchor(), 10.0);
        assert_eq!(clock.virtual_anchor(), 90.0);
        assert_eq!(clock.project(20.0, 5.0), 140.0);
    }
}
