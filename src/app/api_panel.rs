// SPDX-License-Identifier: MPL-2.0
//! Page component wiring API calls to notifications.
//!
//! Each action catches its failure at the UI boundary: it reports the outcome
//! through the notification queue and still hands the result back to the
//! caller, so a failed request never takes the component down.

use crate::api::{ApiClient, ApiError};
use crate::application::port::Transport;
use crate::ui::notifications::NotificationQueue;
use serde_json::Value;
use tracing::error;

pub const STATS_ENDPOINT: &str = "/dashboard/stats/";
pub const PROFILE_ENDPOINT: &str = "/users/profile/";
pub const CONTACTS_ENDPOINT: &str = "/contacts/";

/// Localized notification texts.
pub mod messages {
    pub const PROFILE_UPDATED: &str = "プロフィールが更新されました";
    pub const PROFILE_UPDATE_FAILED: &str = "更新に失敗しました";
    pub const CONTACT_SENT: &str = "お問い合わせを送信しました";
    pub const CONTACT_FAILED: &str = "送信に失敗しました";
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiPanel {
    stats: Option<Value>,
    loading: bool,
    error: Option<ApiError>,
}

impl ApiPanel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn stats(&self) -> Option<&Value> {
        self.stats.as_ref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Error of the last failed stats load.
    #[must_use]
    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    /// Component start-up: loads the dashboard statistics.
    pub async fn init<T: Transport>(&mut self, api: &ApiClient<T>) {
        self.load_stats(api).await;
    }

    /// Fetches dashboard statistics. Failures land in [`ApiPanel::error`];
    /// previously loaded stats are kept.
    pub async fn load_stats<T: Transport>(&mut self, api: &ApiClient<T>) {
        self.loading = true;
        self.error = None;

        match api.get(STATS_ENDPOINT, Vec::<(&str, &str)>::new()).await {
            Ok(stats) => self.stats = Some(stats),
            Err(err) => {
                error!(error = %err, "Failed to load stats");
                self.error = Some(err);
            }
        }

        self.loading = false;
    }

    /// Sends a partial profile update.
    pub async fn update_profile<T: Transport>(
        &self,
        api: &ApiClient<T>,
        notifications: &NotificationQueue,
        data: &Value,
    ) -> Result<Value, ApiError> {
        report(
            api.patch(PROFILE_ENDPOINT, Some(data)).await,
            notifications,
            messages::PROFILE_UPDATED,
            messages::PROFILE_UPDATE_FAILED,
        )
    }

    /// Submits the contact form.
    pub async fn submit_contact<T: Transport>(
        &self,
        api: &ApiClient<T>,
        notifications: &NotificationQueue,
        form: &Value,
    ) -> Result<Value, ApiError> {
        report(
            api.post(CONTACTS_ENDPOINT, Some(form)).await,
            notifications,
            messages::CONTACT_SENT,
            messages::CONTACT_FAILED,
        )
    }
}

fn report(
    result: Result<Value, ApiError>,
    notifications: &NotificationQueue,
    success: &str,
    failure: &str,
) -> Result<Value, ApiError> {
    match &result {
        Ok(_) => {
            notifications.success(success);
        }
        Err(_) => {
            notifications.error(failure);
        }
    }
    result
}
