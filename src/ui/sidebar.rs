// SPDX-License-Identifier: MPL-2.0
//! Sidebar open/closed state.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SidebarStore {
    open: bool,
}

impl SidebarStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_and_toggles() {
        let mut sidebar = SidebarStore::new();
        assert!(!sidebar.is_open());
        sidebar.toggle();
        assert!(sidebar.is_open());
        sidebar.toggle();
        assert!(!sidebar.is_open());
    }

    #[test]
    fn close_is_idempotent() {
        let mut sidebar = SidebarStore::new();
        sidebar.toggle();
        sidebar.close();
        sidebar.close();
        assert!(!sidebar.is_open());
    }
}
