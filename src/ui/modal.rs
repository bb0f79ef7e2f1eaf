// SPDX-License-Identifier: MPL-2.0
//! Modal dialog state with body scroll locking.

use super::document::Document;

/// Body `overflow` value while a modal is shown.
const SCROLL_LOCK: &str = "hidden";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modal {
    open: bool,
}

impl Modal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Opens the modal and stops the page behind it from scrolling.
    pub fn show(&mut self, document: &mut Document) {
        self.open = true;
        document.set_body_overflow(Some(SCROLL_LOCK));
    }

    /// Closes the modal and restores page scrolling.
    pub fn hide(&mut self, document: &mut Document) {
        self.open = false;
        document.set_body_overflow(None);
    }

    pub fn toggle(&mut self, document: &mut Document) {
        if self.open {
            self.hide(document);
        } else {
            self.show(document);
        }
    }
}
