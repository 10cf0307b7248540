// SPDX-License-Identifier: MPL-2.0
//! Locale value object.
//!
//! The client ships exactly two languages: the English base game and the
//! Russian translation overlay. Arbitrary stored strings are normalized at
//! the boundary so everything past it works with a closed enum.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// UI language selected for the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English base game, playable without any overlay.
    En,
    /// Russian translation overlay on top of the base game.
    #[default]
    Ru,
}

impl Locale {
    /// Returns the persisted tag for this locale.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ru => "ru",
        }
    }

    /// Normalizes an arbitrary stored value.
    ///
    /// Returns `None` for anything other than the two supported tags, so
    /// callers can fall back to the default.
    #[must_use]
    pub fn normalize(value: &str) -> Option<Self> {
        match value {
            "en" => Some(Locale::En),
            "ru" => Some(Locale::Ru),
            _ => None,
        }
    }

    /// Returns true if this locale requires the translation overlay.
    #[must_use]
    pub fn is_overlay(self) -> bool {
        matches!(self, Locale::Ru)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::normalize(s).ok_or_else(|| Error::UnsupportedLocale(s.to_string()))
    }
}
