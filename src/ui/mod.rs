// SPDX-License-Identifier: MPL-2.0
//! UI stores and components.
//!
//! Plain state objects the rendering layer binds to. None of them render
//! anything; they hold state and mirror the bits the page needs onto a
//! [`document::Document`].

pub mod document;
pub mod dropdown;
pub mod formatters;
pub mod modal;
pub mod notifications;
pub mod sidebar;
pub mod theming;
