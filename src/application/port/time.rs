// SPDX-License-Identifier: MPL-2.0
//! Real time-source port definition.
//!
//! The virtual clock never reads the system clock directly. It observes
//! real time through this port and applies its affine transform on top,
//! which keeps the transform testable and keeps the decision of *which*
//! real clock to use at the edge of the crate.

/// Port for real time readings.
///
/// Two readings are exposed, mirroring the two time-reporting primitives
/// the game consumes:
///
/// - the coarse wall clock, in milliseconds since the Unix epoch
/// - an optional high-resolution monotonic reading, in milliseconds since
///   an arbitrary origin
///
/// Environments without a high-resolution clock return `None` from
/// [`TimeSource::perf_millis`]; the virtual clock then skips that
/// transform entirely and serves frame timestamps off the wall clock.
pub trait TimeSource: Send + Sync {
    /// Current wall-clock reading in milliseconds since the Unix epoch.
    fn wall_millis(&self) -> f64;

    /// Current high-resolution monotonic reading in milliseconds, or
    /// `None` when the environment lacks one.
    fn perf_millis(&self) -> Option<f64>;
}
