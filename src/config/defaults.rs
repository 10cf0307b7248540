// SPDX-License-Identifier: MPL-2.0
//! Centralized default values and storage constants.
//!
//! This module serves as the single source of truth for the preference keys
//! and fixed script names the bootstrap components share. Multiplier bounds
//! live with the [`SpeedMultiplier`](crate::domain::speed::SpeedMultiplier)
//! value object.

// ==========================================================================
// Preference Store Keys
// ==========================================================================

/// Preference key holding the persisted locale tag.
pub const LOCALE_KEY: &str = "evercraft-locale";

/// Preference key holding the translation-debug flag, persisted as "0"/"1".
pub const RU_DEBUG_KEY: &str = "evercraft-ru-debug-untranslated";

/// Preference key holding the persisted speed multiplier.
pub const SPEED_KEY: &str = "evercraft-speed-multiplier";

// ==========================================================================
// Locale Bootstrap Defaults
// ==========================================================================

/// Launch-URL query parameter that overrides the translation-debug flag.
pub const RU_DEBUG_URL_PARAM: &str = "ru_debug";

/// Translation overlay script, loaded before the game bundle.
pub const OVERLAY_SCRIPT: &str = "ru.js";

/// Main game bundle script, loaded after the overlay.
pub const BUNDLE_SCRIPT: &str = "core.js";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(!LOCALE_KEY.is_empty());
    assert!(!RU_DEBUG_KEY.is_empty());
    assert!(!SPEED_KEY.is_empty());
    assert!(!OVERLAY_SCRIPT.is_empty());
    assert!(!BUNDLE_SCRIPT.is_empty());
};
