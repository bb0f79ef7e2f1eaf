// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `NotificationQueue` keeps live notifications in insertion order and
//! evicts each one a fixed time after it was added. Every entry owns the
//! abort handle of its eviction task, so removing an entry by hand also
//! cancels its timer.

use super::notification::{Notification, NotificationId, NotificationKind};
use chrono::Utc;
use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::task::AbortHandle;
use tracing::warn;

/// How long a notification stays visible by default.
pub const DEFAULT_LIFETIME: Duration = Duration::from_secs(5);

#[derive(Debug)]
struct Entry {
    notification: Notification,
    eviction: Option<AbortHandle>,
}

#[derive(Debug, Default)]
struct Inner {
    /// Live notifications, oldest first.
    entries: Vec<Entry>,
    last_id: Option<NotificationId>,
}

impl Inner {
    fn take(&mut self, id: NotificationId) -> Option<Entry> {
        let pos = self.entries.iter().position(|e| e.notification.id() == id)?;
        Some(self.entries.remove(pos))
    }
}

/// Shared handle to the notification list. Clones see the same list.
#[derive(Debug, Clone)]
pub struct NotificationQueue {
    inner: Arc<Mutex<Inner>>,
    lifetime: Duration,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::with_lifetime(DEFAULT_LIFETIME)
    }

    #[must_use]
    pub fn with_lifetime(lifetime: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner::default())),
            lifetime,
        }
    }

    #[must_use]
    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    /// Appends a notification and schedules its eviction.
    ///
    /// Must be called from within a tokio runtime for the eviction to be
    /// scheduled; otherwise the notification stays until removed.
    pub fn add(&self, message: impl Into<String>, kind: NotificationKind) -> NotificationId {
        let now = Utc::now();
        let mut inner = self.inner.lock();

        let id = NotificationId::next(now, inner.last_id);
        inner.last_id = Some(id);

        let eviction = self.schedule_eviction(id);
        inner.entries.push(Entry {
            notification: Notification::new(id, message, kind, now),
            eviction,
        });
        id
    }

    pub fn info(&self, message: impl Into<String>) -> NotificationId {
        self.add(message, NotificationKind::Info)
    }

    pub fn success(&self, message: impl Into<String>) -> NotificationId {
        self.add(message, NotificationKind::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> NotificationId {
        self.add(message, NotificationKind::Error)
    }

    fn schedule_eviction(&self, id: NotificationId) -> Option<AbortHandle> {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!(%id, "no async runtime, notification will not expire");
            return None;
        };

        let inner = Arc::downgrade(&self.inner);
        let lifetime = self.lifetime;
        let task = runtime.spawn(async move {
            tokio::time::sleep(lifetime).await;
            evict(&inner, id);
        });
        Some(task.abort_handle())
    }

    /// Removes the notification with `id` and cancels its eviction.
    ///
    /// Returns `false` when no such notification is live.
    pub fn remove(&self, id: NotificationId) -> bool {
        let Some(entry) = self.inner.lock().take(id) else {
            return false;
        };
        if let Some(eviction) = entry.eviction {
            eviction.abort();
        }
        true
    }

    /// Removes every notification and cancels all pending evictions.
    pub fn clear(&self) {
        let entries = std::mem::take(&mut self.inner.lock().entries);
        for eviction in entries.into_iter().filter_map(|e| e.eviction) {
            eviction.abort();
        }
    }

    /// Snapshot of the live notifications, oldest first.
    #[must_use]
    pub fn items(&self) -> Vec<Notification> {
        self.inner
            .lock()
            .entries
            .iter()
            .map(|e| e.notification.clone())
            .collect()
    }

    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.inner
            .lock()
            .entries
            .iter()
            .any(|e| e.notification.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().entries.is_empty()
    }
}

/// Timer path: the task is finishing, so its own handle is just dropped.
fn evict(inner: &Weak<Mutex<Inner>>, id: NotificationId) {
    if let Some(inner) = inner.upgrade() {
        inner.lock().take(id);
    }
}
