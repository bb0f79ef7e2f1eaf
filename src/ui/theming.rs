// SPDX-License-Identifier: MPL-2.0
//! Dark mode store.
//!
//! The user's explicit choice lives under the `theme` storage key. While no
//! choice is stored, the presentation follows the operating system's colour
//! scheme preference.

use super::document::Document;
use crate::app::storage::LocalStorage;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Storage key holding `dark` or `light`.
pub const THEME_KEY: &str = "theme";

/// Class set on the root element while dark mode is on.
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn from_dark(on: bool) -> Self {
        if on {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

/// Asks the OS whether it prefers a dark colour scheme.
///
/// `None` when the preference cannot be determined.
#[must_use]
pub fn detect_system_preference() -> Option<bool> {
    match dark_light::detect() {
        Ok(dark_light::Mode::Dark) => Some(true),
        Ok(dark_light::Mode::Light) => Some(false),
        Ok(dark_light::Mode::Unspecified) | Err(_) => None,
    }
}

/// Applies the stored or system theme before any store exists.
///
/// Run once, synchronously, before the first render so the page never shows
/// the wrong theme. Only ever adds the class; the store takes over later.
pub fn bootstrap_theme(
    storage: &LocalStorage,
    system_prefers_dark: Option<bool>,
    document: &mut Document,
) {
    let dark = match storage.get(THEME_KEY) {
        Some(saved) => saved == ThemeMode::Dark.as_str(),
        None => system_prefers_dark.unwrap_or(false),
    };
    if dark {
        document.add_root_class(DARK_CLASS);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeStore {
    on: bool,
}

impl ThemeStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_on(&self) -> bool {
        self.on
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        ThemeMode::from_dark(self.on)
    }

    /// Picks the initial mode: stored choice, then system preference, then
    /// light. Mirrors it on the document without writing storage, so a user
    /// who never chose keeps following the system.
    pub fn init(
        &mut self,
        storage: &LocalStorage,
        system_prefers_dark: Option<bool>,
        document: &mut Document,
    ) {
        self.on = match storage.get(THEME_KEY) {
            Some(saved) => saved == ThemeMode::Dark.as_str(),
            None => system_prefers_dark.unwrap_or(false),
        };
        self.apply(document);
    }

    /// Explicit user choice: flips the mode and persists it.
    pub fn toggle(&mut self, storage: &mut LocalStorage, document: &mut Document) {
        self.on = !self.on;
        self.update(storage, document);
    }

    /// Persists the current mode and mirrors it on the document.
    pub fn update(&mut self, storage: &mut LocalStorage, document: &mut Document) {
        if let Err(err) = storage.set(THEME_KEY, self.mode().as_str()) {
            warn!(error = %err, "failed to persist theme");
        }
        self.apply(document);
    }

    /// Reacts to the OS switching colour scheme. Ignored once the user has
    /// made a choice.
    pub fn system_preference_changed(
        &mut self,
        prefers_dark: bool,
        storage: &mut LocalStorage,
        document: &mut Document,
    ) {
        if storage.contains_key(THEME_KEY) {
            return;
        }
        self.on = prefers_dark;
        self.update(storage, document);
    }

    fn apply(&self, document: &mut Document) {
        document.set_root_class(DARK_CLASS, self.on);
    }
}
