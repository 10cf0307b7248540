// SPDX-License-Identifier: MPL-2.0
//! Host restart port definition.
//!
//! A preference change takes effect from a clean boot; neither component
//! hot-swaps a loaded overlay or re-rates cached delays. The control APIs
//! therefore end a mutation by asking the embedding shell for a restart,
//! unless the caller suppresses it.

/// How a control-API mutation should affect the running client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Restart {
    /// Ask the host for a full restart so the change takes effect now.
    #[default]
    Request,
    /// Persist only; the next boot picks the change up.
    Defer,
}

/// Port for restart requests toward the embedding client shell.
///
/// The shell owns the process lifecycle. Implementations may restart
/// immediately, record the request for later, or ignore it entirely; the
/// control APIs never depend on the request being honored.
pub trait RestartHost: Send + Sync {
    /// Requests a full client restart.
    fn request_restart(&self);
}
