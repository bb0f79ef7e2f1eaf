// SPDX-License-Identifier: MPL-2.0
//! `portal_client` is the client side of a web portal.
//!
//! It wraps the portal's JSON API (CSRF token, error normalization), keeps
//! short-lived notifications, and holds the small UI stores for theme,
//! sidebar, dropdowns and modals.

#![doc(html_root_url = "https://docs.rs/portal_client/0.3.0")]

pub mod api;
pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod ui;

#[cfg(test)]
mod test_utils;
