// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `NotificationKind` enum
//! used throughout the notification system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a live notification.
///
/// Derived from the creation time in milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NotificationId(i64);

impl NotificationId {
    #[must_use]
    pub fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    #[must_use]
    pub fn value(self) -> i64 {
        self.0
    }

    /// Next id after `previous` for a notification created at `now`.
    ///
    /// Normally the timestamp itself; bumped past `previous` when two
    /// notifications land in the same millisecond.
    #[must_use]
    pub(crate) fn next(now: DateTime<Utc>, previous: Option<NotificationId>) -> Self {
        let millis = now.timestamp_millis();
        match previous {
            Some(NotificationId(last)) if millis <= last => Self(last + 1),
            _ => Self(millis),
        }
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of message; only affects styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NotificationKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }

    /// Parses a kind name; unknown names fall back to `Info`.
    #[must_use]
    pub fn parse_or_info(name: &str) -> Self {
        match name {
            "success" => NotificationKind::Success,
            "error" => NotificationKind::Error,
            _ => NotificationKind::Info,
        }
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    id: NotificationId,
    message: String,
    kind: NotificationKind,
    created_at: DateTime<Utc>,
}

impl Notification {
    pub(crate) fn new(
        id: NotificationId,
        message: impl Into<String>,
        kind: NotificationKind,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            message: message.into(),
            kind,
            created_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn id_is_the_creation_timestamp() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        assert_eq!(NotificationId::next(now, None).value(), 1_700_000_000_123);
    }

    #[test]
    fn id_is_bumped_within_the_same_millisecond() {
        let now = Utc.timestamp_millis_opt(1_000).unwrap();
        let first = NotificationId::next(now, None);
        let second = NotificationId::next(now, Some(first));
        assert_eq!(second.value(), 1_001);
    }

    #[test]
    fn id_follows_clock_when_it_moves_forward() {
        let later = Utc.timestamp_millis_opt(5_000).unwrap();
        let id = NotificationId::next(later, Some(NotificationId::from_millis(1_000)));
        assert_eq!(id.value(), 5_000);
    }

    #[test]
    fn default_kind_is_info() {
        assert_eq!(NotificationKind::default(), NotificationKind::Info);
        assert_eq!(NotificationKind::parse_or_info("warning"), NotificationKind::Info);
        assert_eq!(NotificationKind::parse_or_info("error"), NotificationKind::Error);
    }

    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_string(&NotificationKind::Success).unwrap();
        assert_eq!(json, "\"success\"");
    }
}
