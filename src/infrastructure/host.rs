// SPDX-License-Identifier: MPL-2.0
//! Restart-request adapters.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::application::port::host::RestartHost;

/// Host that ignores restart requests.
///
/// Suitable for embedders that manage restarts through their own channels.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRestart;

impl RestartHost for NoRestart {
    fn request_restart(&self) {}
}

/// Host that records restart requests for the embedder to act on later.
///
/// The CLI uses this to tell the user a restart is needed; tests use it to
/// assert whether a control-API call asked for one.
#[derive(Debug, Default)]
pub struct DeferredRestart {
    requested: AtomicBool,
}

impl DeferredRestart {
    /// Fresh host with no pending request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if a restart has been requested.
    #[must_use]
    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::Relaxed)
    }
}

impl RestartHost for DeferredRestart {
    fn request_restart(&self) {
        self.requested.store(true, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deferred_restart_records_the_request() {
        let host = DeferredRestart::new();
        assert!(!host.is_requested());

        host.request_restart();
        assert!(host.is_requested());

        // Requests are idempotent.
        host.request_restart();
        assert!(host.is_requested());
    }
}
