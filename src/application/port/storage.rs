// SPDX-License-Identifier: MPL-2.0
//! Persisted preference store port definition.
//!
//! Both bootstrap components keep their configuration in a shared string
//! key-value store. The store may be unavailable (missing directory,
//! unwritable disk, corrupt file) and the components must keep working when
//! it is, so unavailability is part of the signature rather than an error:
//! reads return `None`, writes report `false`, and neither ever panics.

/// Port for the persisted preference store.
///
/// # Degradation Contract
///
/// Implementations must tolerate unavailability without throwing into
/// caller logic. A `get` that cannot be served returns `None`; a `set`
/// that cannot be served returns `false`. Callers treat both as "store
/// unavailable" and continue with defaults or in-memory state.
pub trait PreferenceStore: Send + Sync {
    /// Reads the raw stored string for `key`, or `None` if the key is
    /// absent or the store is unavailable.
    fn get(&self, key: &str) -> Option<String>;

    /// Writes `value` under `key`, returning whether the write succeeded.
    fn set(&self, key: &str, value: &str) -> bool;
}
