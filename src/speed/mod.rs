// SPDX-License-Identifier: MPL-2.0
//! Global time-acceleration bootstrap.
//!
//! Resolves the persisted speed multiplier, anchors a virtual clock to the
//! real clock, and exposes the services downstream code consumes instead of
//! the environment's time primitives: virtual "now" readings, rate-scaled
//! delays, and frame-timestamp translation. The wall clock is unaffected;
//! only what the game observes accelerates.
//!
//! Must be installed before any gameplay code takes time readings.

pub mod clock;
pub mod scheduler;

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::port::host::{Restart, RestartHost};
use crate::application::port::storage::PreferenceStore;
use crate::application::port::time::TimeSource;
use crate::config::defaults::SPEED_KEY;
use crate::domain::speed::{multiplier_bounds, SpeedMultiplier};

pub use clock::VirtualClock;
pub use scheduler::{scale_delay, ScaledTimers};

// =============================================================================
// DebugSnapshot
// =============================================================================

/// Point-in-time view of the virtualized clocks, for the dev console.
#[derive(Debug, Clone, PartialEq)]
pub struct DebugSnapshot {
    /// Multiplier currently in effect.
    pub multiplier: SpeedMultiplier,
    /// Raw stored string, exactly as the preference store holds it.
    pub stored: Option<String>,
    /// Virtual wall-clock reading (floored milliseconds since the epoch).
    pub scaled_wall_now: f64,
    /// Virtual high-resolution reading, when the source has one.
    pub scaled_perf_now: Option<f64>,
}

impl fmt::Display for DebugSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "multiplier: x{}", self.multiplier)?;
        match &self.stored {
            Some(stored) => writeln!(f, "stored:     {stored:?}")?,
            None => writeln!(f, "stored:     (unavailable)")?,
        }
        match DateTime::<Utc>::from_timestamp_millis(self.scaled_wall_now as i64) {
            Some(wall) => writeln!(f, "wall now:   {} ({})", self.scaled_wall_now, wall)?,
            None => writeln!(f, "wall now:   {}", self.scaled_wall_now)?,
        }
        match self.scaled_perf_now {
            Some(perf) => write!(f, "perf now:   {perf}"),
            None => write!(f, "perf now:   (no high-resolution clock)"),
        }
    }
}

// =============================================================================
// SpeedControl
// =============================================================================

/// Time-acceleration context object.
///
/// Owns the virtual clock for the process and mediates every mutation of
/// the persisted multiplier.
pub struct SpeedControl {
    store: Arc<dyn PreferenceStore>,
    host: Arc<dyn RestartHost>,
    clock: Arc<VirtualClock>,
}

impl SpeedControl {
    /// Resolves the multiplier and installs the virtual clock.
    ///
    /// Initialization is total: an unavailable store yields the default
    /// multiplier, and a source without a high-resolution clock skips only
    /// that transform. In the worst case the game runs at real-time speed.
    pub fn init(
        store: Arc<dyn PreferenceStore>,
        host: Arc<dyn RestartHost>,
        source: Arc<dyn TimeSource>,
    ) -> Self {
        let multiplier = Self::resolve_multiplier(store.as_ref());
        let clock = Arc::new(VirtualClock::new(source, multiplier));
        eprintln!("[speed] Global time multiplier active: x{multiplier}");
        Self { store, host, clock }
    }

    fn resolve_multiplier(store: &dyn PreferenceStore) -> SpeedMultiplier {
        let default = SpeedMultiplier::default();
        match store.get(SPEED_KEY) {
            Some(stored) if !stored.is_empty() => {
                let multiplier = SpeedMultiplier::parse_or(&stored, default);
                if multiplier.persisted_form() != stored {
                    let _ = store.set(SPEED_KEY, &multiplier.persisted_form());
                }
                multiplier
            }
            _ => {
                let _ = store.set(SPEED_KEY, &default.persisted_form());
                default
            }
        }
    }

    /// Multiplier currently in effect.
    #[must_use]
    pub fn multiplier(&self) -> SpeedMultiplier {
        self.clock.multiplier()
    }

    /// Applies a new multiplier and persists it.
    ///
    /// The clocks are re-anchored so virtual time stays continuous; only
    /// the rate changes. By default the host is asked for a restart,
    /// because downstream code may have cached delays computed under the
    /// old rate. Returns the clamped, applied value.
    pub fn set_multiplier(&self, value: f64, restart: Restart) -> SpeedMultiplier {
        let applied = self.clock.set_multiplier(value);
        let _ = self.store.set(SPEED_KEY, &applied.persisted_form());
        if restart == Restart::Request {
            self.host.request_restart();
        }
        applied
    }

    /// Returns to real-time speed. Equivalent to `set_multiplier(1)`.
    pub fn reset(&self, restart: Restart) -> SpeedMultiplier {
        self.set_multiplier(multiplier_bounds::MIN, restart)
    }

    /// Snapshot of the virtualized clocks for the dev console.
    #[must_use]
    pub fn debug_snapshot(&self) -> DebugSnapshot {
        DebugSnapshot {
            multiplier: self.clock.multiplier(),
            stored: self.store.get(SPEED_KEY),
            scaled_wall_now: self.clock.now_millis(),
            scaled_perf_now: self.clock.perf_now(),
        }
    }

    /// The virtual clock, for wiring into the host's render and timer
    /// plumbing.
    #[must_use]
    pub fn clock(&self) -> Arc<VirtualClock> {
        Arc::clone(&self.clock)
    }

    /// Scaled timers driven by this control's clock.
    #[must_use]
    pub fn timers(&self) -> ScaledTimers {
        ScaledTimers::new(self.clock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::host::DeferredRestart;
    use crate::test_utils::{ManualTimeSource, MemoryStore, UnavailableStore};

    fn init_with(store: Arc<MemoryStore>) -> SpeedControl {
        SpeedControl::init(
            store,
            Arc::new(DeferredRestart::new()),
            Arc::new(ManualTimeSource::starting_at(0.0)),
        )
    }

    #[test]
    fn missing_multiplier_defaults_and_persists() {
        let store = Arc::new(MemoryStore::new());
        let control = init_with(Arc::clone(&store));

        assert_eq!(control.multiplier().value(), 10.0);
        assert_eq!(store.get(SPEED_KEY), Some("10".to_string()));
    }

    #[test]
    fn oversized_stored_multiplier_clamps_and_repersists() {
        let store = Arc::new(MemoryStore::new().with_entry(SPEED_KEY, "1000"));
        let control = init_with(Arc::clone(&store));

        assert_eq!(control.multiplier().value(), 20.0);
        assert_eq!(store.get(SPEED_KEY), Some("20".to_string()));
    }

    #[test]
    fn garbage_stored_multiplier_defaults_and_repersists() {
        let store = Arc::new(MemoryStore::new().with_entry(SPEED_KEY, "abc"));
        let control = init_with(Arc::clone(&store));

        assert_eq!(control.multiplier().value(), 10.0);
        assert_eq!(store.get(SPEED_KEY), Some("10".to_string()));
    }

    #[test]
    fn valid_stored_multiplier_is_not_rewritten() {
        let store = Arc::new(MemoryStore::new().with_entry(SPEED_KEY, "12.5"));
        let control = init_with(Arc::clone(&store));

        assert_eq!(control.multiplier().value(), 12.5);
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn unavailable_store_yields_the_default() {
        let control = SpeedControl::init(
            Arc::new(UnavailableStore),
            Arc::new(DeferredRestart::new()),
            Arc::new(ManualTimeSource::starting_at(0.0)),
        );

        assert_eq!(control.multiplier().value(), 10.0);
    }

    #[test]
    fn set_multiplier_persists_and_returns_the_applied_value() {
        let store = Arc::new(MemoryStore::new());
        let control = init_with(Arc::clone(&store));

        let applied = control.set_multiplier(0.0, Restart::Defer);
        assert_eq!(applied.value(), 1.0);
        assert_eq!(store.get(SPEED_KEY), Some("1".to_string()));
    }

    #[test]
    fn reset_returns_to_real_time() {
        let store = Arc::new(MemoryStore::new());
        let control = init_with(Arc::clone(&store));

        assert_eq!(control.reset(Restart::Defer).value(), 1.0);
        assert_eq!(store.get(SPEED_KEY), Some("1".to_string()));
    }

    #[test]
    fn set_multiplier_requests_restart_unless_deferred() {
        let store = Arc::new(MemoryStore::new());
        let host = Arc::new(DeferredRestart::new());
        let control = SpeedControl::init(
            Arc::clone(&store) as Arc<dyn PreferenceStore>,
            Arc::clone(&host) as Arc<dyn RestartHost>,
            Arc::new(ManualTimeSource::starting_at(0.0)),
        );

        let _ = control.set_multiplier(5.0, Restart::Defer);
        assert!(!host.is_requested());

        let _ = control.set_multiplier(5.0, Restart::Request);
        assert!(host.is_requested());
    }

    #[test]
    fn debug_snapshot_reports_the_raw_stored_string() {
        let store = Arc::new(MemoryStore::new().with_entry(SPEED_KEY, "1000"));
        let control = init_with(Arc::clone(&store));

        let snapshot = control.debug_snapshot();
        assert_eq!(snapshot.multiplier.value(), 20.0);
        assert_eq!(snapshot.stored, Some("20".to_string()));
        assert!(snapshot.scaled_perf_now.is_some());
    }

    #[test]
    fn debug_snapshot_displays_without_a_perf_clock() {
        let control = SpeedControl::init(
            Arc::new(MemoryStore::new()),
            Arc::new(DeferredRestart::new()),
            Arc::new(ManualTimeSource::wall_only(0.0)),
        );

        let rendered = control.debug_snapshot().to_string();
        assert!(rendered.contains("multiplier: x10"));
        assert!(rendered.contains("no high-resolution clock"));
    }
}
