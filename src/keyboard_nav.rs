//! Global keyboard shortcuts.

#[cfg(test)]
#[path = "keyboard_nav_test.rs"]
mod keyboard_nav_test;

/// Id of the landmark the skip shortcut jumps to.
pub const MAIN_CONTENT_ID: &str = "main-content";

/// A keydown event reduced to the key and the modifiers the shortcut checks.
/// Shift is not tracked: it only changes the case of `key`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyChord {
    pub key: String,
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyChord {
    #[must_use]
    pub fn alt(key: &str) -> Self {
        Self { key: key.to_owned(), alt: true, ..Self::default() }
    }

    /// Alt+M, without Ctrl or Meta.
    #[must_use]
    pub fn is_skip_to_main(&self) -> bool {
        self.alt && !self.ctrl && !self.meta && self.key.eq_ignore_ascii_case("m")
    }
}

pub trait LandmarkHost {
    /// Focus the main-content landmark and scroll it into view.
    /// Returns `false` when the page has no such landmark.
    fn focus_main_content(&self) -> bool;
}

pub struct KeyboardNav {
    host: Box<dyn LandmarkHost>,
}

impl KeyboardNav {
    #[must_use]
    pub fn new(host: Box<dyn LandmarkHost>) -> Self {
        Self { host }
    }

    /// Returns whether the browser default for this key should be prevented.
    pub fn key_pressed(&self, chord: &KeyChord) -> bool {
        if !chord.is_skip_to_main() {
            return false;
        }
        if !self.host.focus_main_content() {
            log::debug!("skip shortcut: no #{MAIN_CONTENT_ID} on this page");
        }
        true
    }
}
