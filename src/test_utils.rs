// SPDX-License-Identifier: MPL-2.0
//! Test doubles for the port traits.
//!
//! Shared by unit tests and the integration suite: an in-memory preference
//! store, a permanently unavailable store, a manually-advanced time source,
//! and a scripted loader that records call order.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::port::script::{ScriptError, ScriptLoader};
use crate::application::port::storage::PreferenceStore;
use crate::application::port::time::TimeSource;

// =============================================================================
// Preference Stores
// =============================================================================

/// In-memory preference store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
    writes: AtomicUsize,
}

impl MemoryStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style seeding of a single entry, without counting it as a
    /// write.
    #[must_use]
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        {
            let mut entries = self.lock_entries();
            let _ = entries.insert(key.to_string(), value.to_string());
        }
        self
    }

    /// Number of successful `set` calls observed.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::Relaxed)
    }

    fn lock_entries(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.lock_entries().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        let _ = self
            .lock_entries()
            .insert(key.to_string(), value.to_string());
        let _ = self.writes.fetch_add(1, Ordering::Relaxed);
        true
    }
}

/// Store that is permanently unavailable: reads return `None`, writes
/// report `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableStore;

impl PreferenceStore for UnavailableStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) -> bool {
        false
    }
}

// =============================================================================
// ManualTimeSource
// =============================================================================

/// Time source advanced explicitly by the test.
///
/// Wall and high-resolution readings advance in lockstep, which is what
/// the continuity tests rely on.
#[derive(Debug)]
pub struct ManualTimeSource {
    wall_ms: Mutex<f64>,
    perf_ms: Mutex<Option<f64>>,
}

impl ManualTimeSource {
    /// Source whose wall clock starts at `wall_ms` and whose
    /// high-resolution clock starts at zero.
    #[must_use]
    pub fn starting_at(wall_ms: f64) -> Self {
        Self {
            wall_ms: Mutex::new(wall_ms),
            perf_ms: Mutex::new(Some(0.0)),
        }
    }

    /// Source without a high-resolution clock.
    #[must_use]
    pub fn wall_only(wall_ms: f64) -> Self {
        Self {
            wall_ms: Mutex::new(wall_ms),
            perf_ms: Mutex::new(None),
        }
    }

    /// Advances both clocks by `delta_ms` of real time.
    pub fn advance(&self, delta_ms: f64) {
        *self.lock(&self.wall_ms) += delta_ms;
        if let Some(perf) = self.lock(&self.perf_ms).as_mut() {
            *perf += delta_ms;
        }
    }

    fn lock<'a, T>(&self, mutex: &'a Mutex<T>) -> std::sync::MutexGuard<'a, T> {
        match mutex.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl TimeSource for ManualTimeSource {
    fn wall_millis(&self) -> f64 {
        *self.lock(&self.wall_ms)
    }

    fn perf_millis(&self) -> Option<f64> {
        *self.lock(&self.perf_ms)
    }
}

// =============================================================================
// ScriptedLoader
// =============================================================================

/// Loader that records call order and fails on demand.
#[derive(Debug, Default)]
pub struct ScriptedLoader {
    calls: Mutex<Vec<String>>,
    fail_on: Option<String>,
}

impl ScriptedLoader {
    /// Loader for which every load succeeds.
    #[must_use]
    pub fn succeeding() -> Self {
        Self::default()
    }

    /// Loader that fails loads of the named script.
    #[must_use]
    pub fn failing_on(script: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_on: Some(script.to_string()),
        }
    }

    /// Scripts requested so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        match self.calls.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl ScriptLoader for ScriptedLoader {
    async fn load(&self, script: &str) -> Result<(), ScriptError> {
        match self.calls.lock() {
            Ok(mut guard) => guard.push(script.to_string()),
            Err(poisoned) => poisoned.into_inner().push(script.to_string()),
        }
        if self.fail_on.as_deref() == Some(script) {
            return Err(ScriptError::NotFound(script.to_string()));
        }
        Ok(())
    }
}
