// SPDX-License-Identifier: MPL-2.0
//! Application root state shared by every page.
//!
//! `AppContext` owns the global stores (theme, sidebar, notifications), the
//! simulated document they render into, browser-style local storage and the
//! configured API client. Page components such as [`api_panel::ApiPanel`]
//! borrow from it.

pub mod api_panel;
pub mod config;
pub mod paths;
pub mod storage;

pub use api_panel::ApiPanel;
pub use storage::LocalStorage;

use crate::api::{ApiClient, CookieJar};
use crate::application::port::Transport;
use crate::ui::document::Document;
use crate::ui::notifications::NotificationQueue;
use crate::ui::sidebar::SidebarStore;
use crate::ui::theming::{self, ThemeStore};
use config::Config;
use tracing::debug;

/// Global state registered once at start-up.
#[derive(Debug)]
pub struct AppContext<T> {
    pub api: ApiClient<T>,
    pub storage: LocalStorage,
    pub document: Document,
    pub theme: ThemeStore,
    pub sidebar: SidebarStore,
    pub notifications: NotificationQueue,
}

impl<T: Transport> AppContext<T> {
    /// Builds every store and runs its initialisation.
    ///
    /// The pre-render theme bootstrap runs first so the document carries the
    /// right class before any store touches it.
    pub fn new(
        config: &Config,
        transport: T,
        storage: LocalStorage,
        system_prefers_dark: Option<bool>,
    ) -> Self {
        let cookies = CookieJar::parse(config.api.cookie.as_deref().unwrap_or_default());
        let api = ApiClient::new(transport, config.api.base_path.as_str(), &cookies);

        let mut document = Document::new();
        theming::bootstrap_theme(&storage, system_prefers_dark, &mut document);

        let mut theme = ThemeStore::new();
        theme.init(&storage, system_prefers_dark, &mut document);
        debug!(mode = theme.mode().as_str(), "theme initialised");

        Self {
            api,
            storage,
            document,
            theme,
            sidebar: SidebarStore::new(),
            notifications: NotificationQueue::with_lifetime(config.notifications.lifetime()),
        }
    }

    /// Flips the theme and remembers the choice.
    pub fn toggle_theme(&mut self) {
        self.theme.toggle(&mut self.storage, &mut self.document);
    }

    /// Forwards an OS colour-scheme change to the theme store.
    pub fn system_preference_changed(&mut self, prefers_dark: bool) {
        self.theme
            .system_preference_changed(prefers_dark, &mut self.storage, &mut self.document);
    }
}
