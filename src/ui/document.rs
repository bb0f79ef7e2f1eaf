// SPDX-License-Identifier: MPL-2.0
//! The slice of page state the stores write to.
//!
//! Only two things are ever touched: the class list of the root element
//! (the `dark` class) and the body's `overflow` style (scroll lock while a
//! modal is open). The renderer reads both from here.

use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    root_classes: BTreeSet<String>,
    body_overflow: Option<String>,
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_root_class(&mut self, class: &str) {
        self.root_classes.insert(class.to_string());
    }

    pub fn remove_root_class(&mut self, class: &str) {
        self.root_classes.remove(class);
    }

    /// Adds or removes `class` depending on `present`.
    pub fn set_root_class(&mut self, class: &str, present: bool) {
        if present {
            self.add_root_class(class);
        } else {
            self.remove_root_class(class);
        }
    }

    #[must_use]
    pub fn has_root_class(&self, class: &str) -> bool {
        self.root_classes.contains(class)
    }

    pub fn root_classes(&self) -> impl Iterator<Item = &str> {
        self.root_classes.iter().map(String::as_str)
    }

    /// Sets the body `overflow` style; `None` clears it.
    pub fn set_body_overflow(&mut self, value: Option<&str>) {
        self.body_overflow = value.map(str::to_string);
    }

    #[must_use]
    pub fn body_overflow(&self) -> Option<&str> {
        self.body_overflow.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_root_class_toggles_membership() {
        let mut doc = Document::new();
        doc.set_root_class("dark", true);
        doc.set_root_class("dark", true);
        assert_eq!(doc.root_classes().count(), 1);

        doc.set_root_class("dark", false);
        assert!(!doc.has_root_class("dark"));
    }

    #[test]
    fn body_overflow_can_be_cleared() {
        let mut doc = Document::new();
        doc.set_body_overflow(Some("hidden"));
        assert_eq!(doc.body_overflow(), Some("hidden"));
        doc.set_body_overflow(None);
        assert_eq!(doc.body_overflow(), None);
    }
}
