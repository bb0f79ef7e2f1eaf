// SPDX-License-Identifier: MPL-2.0
//! Dropdown menu state with close-on-outside-click.
//!
//! The outside-click listener is attached one tick after the dropdown opens,
//! so the click that opened it is never seen as an outside click. Closing
//! detaches it again.

/// Messages emitted to the dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Toggle the dropdown visibility.
    Toggle,
    /// Close the dropdown.
    Close,
    /// The renderer finished the current tick.
    NextTick,
    /// A click landed somewhere on the page.
    DocumentClick {
        /// Whether the click target is inside the dropdown element.
        inside: bool,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Listener {
    #[default]
    Detached,
    /// Opened this tick; attaches on the next one.
    Pending,
    Attached,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dropdown {
    open: bool,
    listener: Listener,
}

impl Dropdown {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether outside clicks are currently being watched.
    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.listener == Listener::Attached
    }

    pub fn toggle(&mut self) {
        self.set_open(!self.open);
    }

    pub fn close(&mut self) {
        self.set_open(false);
    }

    fn set_open(&mut self, open: bool) {
        self.open = open;
        self.listener = if open {
            Listener::Pending
        } else {
            Listener::Detached
        };
    }

    pub fn next_tick(&mut self) {
        if self.listener == Listener::Pending {
            self.listener = Listener::Attached;
        }
    }

    /// Closes the dropdown for clicks outside it while the listener is
    /// attached.
    pub fn handle_document_click(&mut self, inside: bool) {
        if self.is_listening() && !inside {
            self.close();
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Toggle => self.toggle(),
            Message::Close => self.close(),
            Message::NextTick => self.next_tick(),
            Message::DocumentClick { inside } => self.handle_document_click(inside),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_click_does_not_close() {
        let mut dropdown = Dropdown::new();
        dropdown.update(Message::Toggle);
        // the same click bubbles to the document before the next tick
        dropdown.update(Message::DocumentClick { inside: false });
        assert!(dropdown.is_open());
    }

    #[test]
    fn outside_click_closes_after_tick() {
        let mut dropdown = Dropdown::new();
        dropdown.update(Message::Toggle);
        dropdown.update(Message::NextTick);
        assert!(dropdown.is_listening());

        dropdown.update(Message::DocumentClick { inside: false });
        assert!(!dropdown.is_open());
        assert!(!dropdown.is_listening());
    }

    #[test]
    fn inside_click_keeps_it_open() {
        let mut dropdown = Dropdown::new();
        dropdown.toggle();
        dropdown.next_tick();
        dropdown.handle_document_click(true);
        assert!(dropdown.is_open());
    }

    #[test]
    fn closed_dropdown_ignores_clicks_and_ticks() {
        let mut dropdown = Dropdown::new();
        dropdown.next_tick();
        assert!(!dropdown.is_listening());
        dropdown.handle_document_click(false);
        assert!(!dropdown.is_open());
    }

    #[test]
    fn toggle_twice_detaches_listener() {
        let mut dropdown = Dropdown::new();
        dropdown.toggle();
        dropdown.next_tick();
        dropdown.toggle();
        assert!(!dropdown.is_open());
        assert!(!dropdown.is_listening());
    }
}
