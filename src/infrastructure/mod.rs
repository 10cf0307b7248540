// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined
//! in `application::port`. These adapters wrap the system clock, the game
//! install directory, and the process lifecycle.
//!
//! # Available Adapters
//!
//! - [`fs_scripts`]: Script loading from the game directory (implements
//!   [`ScriptLoader`])
//! - [`host`]: Restart-request sinks (implement [`RestartHost`])
//! - [`system_time`]: System clock readings (implements [`TimeSource`])
//!
//! The file-backed preference store lives in [`crate::config`].
//!
//! [`ScriptLoader`]: crate::application::port::ScriptLoader
//! [`RestartHost`]: crate::application::port::RestartHost
//! [`TimeSource`]: crate::application::port::TimeSource

pub mod fs_scripts;
pub mod host;
pub mod system_time;

// Re-export main types for convenience
pub use fs_scripts::FsScriptLoader;
pub use host::{DeferredRestart, NoRestart};
pub use system_time::SystemTimeSource;
