// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.

// ==========================================================================
// API Defaults
// ==========================================================================

/// Origin the client talks to when none is configured.
pub const DEFAULT_ORIGIN: &str = "http://127.0.0.1:8000";

/// Versioned API prefix appended to the origin.
pub const DEFAULT_BASE_PATH: &str = crate::api::DEFAULT_BASE_PATH;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Seconds a notification stays visible.
pub const DEFAULT_NOTIFICATION_LIFETIME_SECS: u32 = 5;

/// Minimum notification lifetime (in seconds).
pub const MIN_NOTIFICATION_LIFETIME_SECS: u32 = 1;

/// Maximum notification lifetime (in seconds).
pub const MAX_NOTIFICATION_LIFETIME_SECS: u32 = 60;
