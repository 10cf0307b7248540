// SPDX-License-Identifier: MPL-2.0
//! Script loading port definition.
//!
//! The translation overlay and the game bundle are opaque scripts. The
//! bootstrap only cares that a load either runs to completion or fails
//! with a typed error; what "executing" a script means is the embedding
//! client's concern.

use std::fmt;

use async_trait::async_trait;

// =============================================================================
// ScriptError
// =============================================================================

/// Errors that can occur while loading a script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// The script does not exist at the expected location.
    NotFound(String),

    /// The script exists but could not be read (I/O error).
    Io {
        /// Script that failed to load.
        script: String,
        /// Underlying error message.
        message: String,
    },
}

impl ScriptError {
    /// Returns the name of the script that failed to load.
    #[must_use]
    pub fn script(&self) -> &str {
        match self {
            ScriptError::NotFound(script) => script,
            ScriptError::Io { script, .. } => script,
        }
    }
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::NotFound(script) => write!(f, "Failed to load {script}: not found"),
            ScriptError::Io { script, message } => {
                write!(f, "Failed to load {script}: {message}")
            }
        }
    }
}

impl std::error::Error for ScriptError {}

// =============================================================================
// ScriptLoader Trait
// =============================================================================

/// Port for loading an opaque script to completion.
///
/// A load is in flight until it resolves or fails; there is no timeout and
/// no cancellation. The locale bootstrap composes two loads sequentially
/// and only attempts the second after the first resolves.
#[async_trait]
pub trait ScriptLoader: Send + Sync {
    /// Loads and executes the named script to completion.
    ///
    /// # Errors
    ///
    /// Returns a [`ScriptError`] when the script cannot be located or read.
    async fn load(&self, script: &str) -> Result<(), ScriptError>;
}
