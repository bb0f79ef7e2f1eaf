// SPDX-License-Identifier: MPL-2.0
//! Transient notification system for user feedback.
//!
//! Notifications appear for a fixed time after a UI action to report its
//! outcome, then disappear on their own. The UI holds a read-only view
//! ([`NotificationQueue::items`]) and may dismiss one early with
//! [`NotificationQueue::remove`].
//!
//! # Components
//!
//! - [`notification`] - `Notification`, its id and kind
//! - [`queue`] - `NotificationQueue` with per-entry eviction timers
//!
//! # Usage
//!
//! ```ignore
//! use portal_client::ui::notifications::{NotificationKind, NotificationQueue};
//!
//! let queue = NotificationQueue::new();
//! let id = queue.add("Profile updated", NotificationKind::Success);
//!
//! // dismiss early; the pending eviction is cancelled
//! queue.remove(id);
//! ```

mod notification;
mod queue;

pub use notification::{Notification, NotificationId, NotificationKind};
pub use queue::{NotificationQueue, DEFAULT_LIFETIME};
