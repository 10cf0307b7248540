// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters
//! implement. These traits use only domain types, ensuring the bootstrap
//! components remain independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`host`]: Restart requests toward the embedding client shell
//! - [`script`]: Opaque script loading (overlay and game bundle)
//! - [`storage`]: Persisted preference store with graceful degradation
//! - [`time`]: Real time readings (wall clock, optional high-resolution)
//!
//! # Design Notes
//!
//! - Traits are `Send + Sync` so component handles can be shared freely
//! - Failure that must never reach callers (storage unavailability) is
//!   expressed in the signature (`Option`/`bool`), not as an error type

pub mod host;
pub mod script;
pub mod storage;
pub mod time;

// Re-export main types for convenience
pub use host::{Restart, RestartHost};
pub use script::{ScriptError, ScriptLoader};
pub use storage::PreferenceStore;
pub use time::TimeSource;
