// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value objects with ZERO external dependencies.
//!
//! This module contains the pure types both bootstrap components are built
//! on. It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`clock`]: Affine clock transform state ([`AnchoredClock`](clock::AnchoredClock))
//! - [`locale`]: Locale value object ([`Locale`](locale::Locale))
//! - [`speed`]: Speed multiplier value object ([`SpeedMultiplier`](speed::SpeedMultiplier))

pub mod clock;
pub mod locale;
pub mod speed;
