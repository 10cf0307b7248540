// SPDX-License-Identifier: MPL-2.0
//! Application layer.
//!
//! Defines the port traits the bootstrap components depend on. Concrete
//! adapters live in [`crate::infrastructure`].

pub mod port;
