// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for the preference file.
//!
//! # Path Resolution Order
//!
//! The config directory is resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for
//!    tests and the `--config-dir` CLI flag)
//! 2. **Environment variable** (`EVERCRAFT_BOOST_CONFIG_DIR`)
//! 3. **Platform default** - via the `dirs` crate
//!
//! The explicit override has highest priority because it is the most
//! specific: when code explicitly passes a path, it is always respected.

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "EvercraftBoost";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "EVERCRAFT_BOOST_CONFIG_DIR";

/// Returns the directory holding the preference file, or `None` when no
/// candidate directory can be determined.
#[must_use]
pub fn config_dir_with_override(explicit: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = explicit {
        return Some(dir);
    }

    if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the directory holding the preference file using the standard
/// resolution order.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    config_dir_with_override(None)
}
