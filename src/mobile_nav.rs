//! Collapsible navigation menu for narrow viewports.

#[cfg(test)]
#[path = "mobile_nav_test.rs"]
mod mobile_nav_test;

use std::cell::Cell;

/// DOM surface of the menu: toggle button, menu list, and page body.
pub trait NavHost {
    /// Current `aria-expanded` of the toggle, read once at construction.
    fn toggle_expanded(&self) -> bool;
    fn set_toggle_expanded(&self, expanded: bool);
    /// Add or remove the menu's `active` class.
    fn set_menu_active(&self, active: bool);
    /// Lock or restore page scrolling (`overflow: hidden` on `<body>`).
    fn set_scroll_locked(&self, locked: bool);
}

pub struct MobileNav {
    host: Box<dyn NavHost>,
    expanded: Cell<bool>,
}

impl MobileNav {
    #[must_use]
    pub fn new(host: Box<dyn NavHost>) -> Self {
        let expanded = Cell::new(host.toggle_expanded());
        Self { host, expanded }
    }

    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expanded.get()
    }

    pub fn toggle_menu(&self) {
        self.set_expanded(!self.expanded.get());
    }

    pub fn close_menu(&self) {
        self.set_expanded(false);
    }

    /// Document-level click. Closes unless the click landed on the toggle or inside the menu.
    pub fn document_clicked(&self, inside_toggle: bool, inside_menu: bool) {
        if !inside_toggle && !inside_menu {
            self.close_menu();
        }
    }

    pub fn key_pressed(&self, key: &str) {
        if key == "Escape" {
            self.close_menu();
        }
    }

    fn set_expanded(&self, expanded: bool) {
        self.expanded.set(expanded);
        self.host.set_toggle_expanded(expanded);
        self.host.set_menu_active(expanded);
        self.host.set_scroll_locked(expanded);
    }
}
