// SPDX-License-Identifier: MPL-2.0
//! Fail-safe locale bootstrap.
//!
//! Resolves the persisted locale preference and the translation-debug flag,
//! exposes a control API over both, and runs the two-step load pipeline
//! that brings up the translation overlay ahead of the game bundle. Every
//! failure path degrades toward a playable game: a broken store yields
//! defaults, a broken overlay load falls back to the English base game.
//!
//! # Load Order
//!
//! The overlay must be resident before the bundle executes, because the
//! bundle consumes translation tables at initialization. The pipeline is
//! therefore strictly sequential and the second load is only attempted
//! after the first resolves.

use std::fmt;
use std::sync::Arc;

use url::Url;

use crate::application::port::host::{Restart, RestartHost};
use crate::application::port::script::{ScriptError, ScriptLoader};
use crate::application::port::storage::PreferenceStore;
use crate::config::defaults::{
    BUNDLE_SCRIPT, LOCALE_KEY, OVERLAY_SCRIPT, RU_DEBUG_KEY, RU_DEBUG_URL_PARAM,
};
use crate::domain::locale::Locale;
use crate::error::Result;

// =============================================================================
// BootOutcome
// =============================================================================

/// Result of the overlay boot pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootOutcome {
    /// Overlay and bundle both loaded; the client runs translated.
    OverlayLoaded,
    /// The resolved locale needs no overlay; nothing was loaded.
    Skipped,
    /// A load failed; the locale preference was reset to English so the
    /// next boot comes up clean.
    FellBack {
        /// The load failure that triggered the fallback.
        error: ScriptError,
    },
}

impl fmt::Display for BootOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootOutcome::OverlayLoaded => write!(f, "overlay loaded"),
            BootOutcome::Skipped => write!(f, "no overlay needed"),
            BootOutcome::FellBack { error } => write!(f, "fell back to English: {error}"),
        }
    }
}

// =============================================================================
// Flag Parsing
// =============================================================================

/// Parses a debug-flag value the way the launch URL does.
///
/// `1`, `true` and `on` enable; anything else disables.
#[must_use]
pub fn parse_flag(value: &str) -> bool {
    matches!(value, "1" | "true" | "on")
}

/// Extracts the debug override from the launch URL, if present.
///
/// An unparseable URL is treated as "no override"; the caller falls back to
/// the stored flag.
fn debug_override_from_url(launch_url: Option<&str>) -> Option<bool> {
    let url = Url::parse(launch_url?).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == RU_DEBUG_URL_PARAM)
        .map(|(_, value)| parse_flag(&value))
}

// =============================================================================
// Localization
// =============================================================================

/// Locale bootstrap context object.
///
/// Owns the resolved locale and debug flag for the process and mediates
/// every mutation of the persisted preference.
pub struct Localization {
    store: Arc<dyn PreferenceStore>,
    host: Arc<dyn RestartHost>,
    locale: Locale,
    ru_debug: bool,
}

impl Localization {
    /// Resolves the locale and debug flag once, at load time.
    ///
    /// A missing or invalid stored locale normalizes to the default and is
    /// written back. A `ru_debug` parameter on the launch URL overrides and
    /// re-persists the stored debug flag.
    pub fn init(
        store: Arc<dyn PreferenceStore>,
        host: Arc<dyn RestartHost>,
        launch_url: Option<&str>,
    ) -> Self {
        let locale = Self::resolve_locale(store.as_ref());
        let ru_debug = Self::resolve_ru_debug(store.as_ref(), launch_url);

        Self {
            store,
            host,
            locale,
            ru_debug,
        }
    }

    fn resolve_locale(store: &dyn PreferenceStore) -> Locale {
        if let Some(stored) = store.get(LOCALE_KEY) {
            if let Some(locale) = Locale::normalize(&stored) {
                return locale;
            }
        }
        let default = Locale::default();
        let _ = store.set(LOCALE_KEY, default.as_str());
        default
    }

    fn resolve_ru_debug(store: &dyn PreferenceStore, launch_url: Option<&str>) -> bool {
        if let Some(enabled) = debug_override_from_url(launch_url) {
            let _ = store.set(RU_DEBUG_KEY, if enabled { "1" } else { "0" });
            return enabled;
        }
        store.get(RU_DEBUG_KEY).as_deref() == Some("1")
    }

    /// Currently resolved locale.
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Currently resolved translation-debug flag.
    #[must_use]
    pub fn ru_debug(&self) -> bool {
        self.ru_debug
    }

    /// Switches the locale, persists it, and by default asks the host for a
    /// restart so the change takes effect from a clean boot.
    pub fn set_locale(&mut self, locale: Locale, restart: Restart) {
        let _ = self.store.set(LOCALE_KEY, locale.as_str());
        self.locale = locale;
        if restart == Restart::Request {
            self.host.request_restart();
        }
    }

    /// Switches the locale from a raw tag.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedLocale`](crate::error::Error) when `tag`
    /// is not one of the two supported values.
    pub fn set_locale_tag(&mut self, tag: &str, restart: Restart) -> Result<Locale> {
        let locale: Locale = tag.parse()?;
        self.set_locale(locale, restart);
        Ok(locale)
    }

    /// Toggles the translation-debug flag, persists it, and by default asks
    /// the host for a restart.
    pub fn set_ru_debug(&mut self, enabled: bool, restart: Restart) {
        let _ = self.store.set(RU_DEBUG_KEY, if enabled { "1" } else { "0" });
        self.ru_debug = enabled;
        if restart == Restart::Request {
            self.host.request_restart();
        }
    }

    /// Runs the overlay boot pipeline.
    ///
    /// Loads the translation overlay, then the game bundle, strictly in
    /// that order. Any failure resets the locale preference to English
    /// (persisted, without a restart request, so the *next* boot comes up
    /// clean), warns on stderr, and reports the fallback; no error escapes
    /// and nothing is retried within the current boot.
    pub async fn boot(&mut self, loader: &dyn ScriptLoader) -> BootOutcome {
        if !self.locale.is_overlay() {
            return BootOutcome::Skipped;
        }

        match Self::load_overlay_sequence(loader).await {
            Ok(()) => {
                eprintln!("[locale] Russian localization overlay loaded.");
                BootOutcome::OverlayLoaded
            }
            Err(error) => {
                eprintln!("[locale] RU localization failed; continuing in English: {error}");
                self.set_locale(Locale::En, Restart::Defer);
                BootOutcome::FellBack { error }
            }
        }
    }

    async fn load_overlay_sequence(loader: &dyn ScriptLoader) -> std::result::Result<(), ScriptError> {
        loader.load(OVERLAY_SCRIPT).await?;
        loader.load(BUNDLE_SCRIPT).await?;
        Ok(())
    }
}
