// SPDX-License-Identifier: MPL-2.0
//! Speed multiplier value object.
//!
//! This module provides a type-safe wrapper for the time-acceleration
//! factor, ensuring it is always within the supported range.

use std::fmt;

/// Multiplier bounds (1x to 20x).
pub mod multiplier_bounds {
    /// Minimum multiplier (1x = real time).
    pub const MIN: f64 = 1.0;
    /// Maximum multiplier (20x = twenty times faster than real time).
    pub const MAX: f64 = 20.0;
    /// Default multiplier applied when nothing valid is stored.
    pub const DEFAULT: f64 = 10.0;
}

/// Time-acceleration factor, guaranteed to be within valid range (1x - 20x).
///
/// This newtype enforces validity at the type level, making it impossible
/// for a non-positive or out-of-range factor to reach the delay-scaling
/// division.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedMultiplier(f64);

impl SpeedMultiplier {
    /// Creates a new multiplier, clamping to valid range.
    ///
    /// Non-finite input falls back to the default.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self::clamp_or(value, Self::default())
    }

    /// Clamps `value` to valid range, or returns `fallback` unchanged when
    /// `value` is not a finite number.
    #[must_use]
    pub fn clamp_or(value: f64, fallback: Self) -> Self {
        if !value.is_finite() {
            return fallback;
        }
        Self(value.clamp(multiplier_bounds::MIN, multiplier_bounds::MAX))
    }

    /// Parses a stored string, falling back like [`Self::clamp_or`] when the
    /// string is not numeric.
    #[must_use]
    pub fn parse_or(stored: &str, fallback: Self) -> Self {
        match stored.trim().parse::<f64>() {
            Ok(value) => Self::clamp_or(value, fallback),
            Err(_) => fallback,
        }
    }

    /// Returns the multiplier value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the string form written to the preference store.
    #[must_use]
    pub fn persisted_form(self) -> String {
        self.0.to_string()
    }

    /// Returns true if this is real-time speed.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= multiplier_bounds::MIN
    }

    /// Returns true if this is the maximum supported speed.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= multiplier_bounds::MAX
    }
}

impl Default for SpeedMultiplier {
    fn default() -> Self {
        Self(multiplier_bounds::DEFAULT)
    }
}

impl fmt::Display for SpeedMultiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(multiplier_bounds::MIN > 0.0);
    assert!(multiplier_bounds::MAX >= multiplier_bounds::MIN);
    assert!(multiplier_bounds::DEFAULT >= multiplier_bounds::MIN);
    assert!(multiplier_bounds::DEFAULT <= multiplier_bounds::MAX);
};
