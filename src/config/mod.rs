// SPDX-License-Identifier: MPL-2.0
//! This module handles the persisted preference table, including loading and
//! saving the raw string key-value pairs to a `preferences.toml` file.
//!
//! The table deliberately stays untyped: the bootstrap components define
//! their own normalization on top of raw stored strings (locale
//! normalization, multiplier clamping), and the debug snapshot reports the
//! raw value as stored.
//!
//! # Path Resolution
//!
//! The preference file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set the `EVERCRAFT_BOOST_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory
//!
//! # Degradation
//!
//! [`PreferencesFile`] implements the [`PreferenceStore`] port, which must
//! never surface an error: any I/O or parse failure turns a read into
//! `None` and a write into `false`.

pub mod defaults;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::port::storage::PreferenceStore;
use crate::error::Result;
use crate::paths;

/// Preference file name within the config directory.
const PREFERENCES_FILE: &str = "preferences.toml";

// =============================================================================
// PreferenceTable
// =============================================================================

/// Raw string key-value pairs as persisted on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct PreferenceTable {
    entries: BTreeMap<String, String>,
}

impl PreferenceTable {
    /// Returns the stored value for `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Inserts or replaces the value under `key`.
    pub fn insert(&mut self, key: &str, value: &str) {
        let _ = self.entries.insert(key.to_string(), value.to_string());
    }

    /// Returns true if the table holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Load / Save Functions
// =============================================================================

/// Loads the preference table from a specific path.
pub fn load_from_path(path: &Path) -> Result<PreferenceTable> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Saves the preference table to a specific path, creating parent
/// directories as needed.
pub fn save_to_path(table: &PreferenceTable, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(table)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// PreferencesFile
// =============================================================================

/// File-backed preference store.
///
/// Each access re-reads the file; the table is tiny and writes happen only
/// on explicit setter calls.
#[derive(Debug, Clone)]
pub struct PreferencesFile {
    path: Option<PathBuf>,
}

impl PreferencesFile {
    /// Store backed by an explicit file path.
    #[must_use]
    pub fn at(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    /// Store backed by `preferences.toml` inside the given config directory.
    #[must_use]
    pub fn in_dir(dir: PathBuf) -> Self {
        Self::at(dir.join(PREFERENCES_FILE))
    }

    /// Store backed by the default config location.
    ///
    /// When no config directory can be resolved the store is permanently
    /// unavailable: reads return `None` and writes return `false`.
    #[must_use]
    pub fn from_default_location() -> Self {
        Self {
            path: paths::config_dir().map(|dir| dir.join(PREFERENCES_FILE)),
        }
    }

    /// Store backed by an optional config-dir override, falling back to the
    /// standard resolution order.
    #[must_use]
    pub fn with_dir_override(explicit: Option<PathBuf>) -> Self {
        Self {
            path: paths::config_dir_with_override(explicit)
                .map(|dir| dir.join(PREFERENCES_FILE)),
        }
    }

    /// Returns the backing file path, if the store is available.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn read_table(&self) -> Option<PreferenceTable> {
        let path = self.path.as_ref()?;
        if !path.exists() {
            return Some(PreferenceTable::default());
        }
        load_from_path(path).ok()
    }
}

impl PreferenceStore for PreferencesFile {
    fn get(&self, key: &str) -> Option<String> {
        self.read_table()?.get(key).map(str::to_string)
    }

    fn set(&self, key: &str, value: &str) -> bool {
        let Some(path) = self.path.as_ref() else {
            return false;
        };
        let mut table = match self.read_table() {
            Some(table) => table,
            // Unreadable or corrupt file: start over rather than fail every
            // write for the rest of the session.
            None => PreferenceTable::default(),
        };
        table.insert(key, value);
        save_to_path(&table, path).is_ok()
    }
}
