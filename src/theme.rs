//! Light/dark theme resolution and persistence.
//!
//! Reads the user's preference from storage and mirrors it onto the root
//! element's `data-theme` attribute. Toggling writes back to storage and also
//! refreshes the toggle's accessible label and the browser UI color hint.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: with storage disabled the theme still resolves
//! and applies for the session, and write failures are only logged.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::config::SiteConfig;
use crate::env::{MediaQueries, Storage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored or declared theme name. Anything but `light`/`dark` is rejected.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Accessible label for the toggle: it names the action, not the state.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Dark => "Switch to light mode",
            Self::Light => "Switch to dark mode",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Document surface the theme is mirrored onto.
pub trait ThemeHost {
    /// The theme the page markup declares on the root element, if any.
    fn declared_theme(&self) -> Option<String>;
    fn set_theme_attribute(&self, theme: Theme);
    /// Update the toggle control's `aria-label`. No-op without a toggle.
    fn set_toggle_label(&self, label: &str);
    /// Update `meta[name="theme-color"]`. No-op without the meta element.
    fn set_color_hint(&self, color: &str);
}

pub struct ThemeManager {
    host: Box<dyn ThemeHost>,
    storage: Rc<dyn Storage>,
    media: Rc<dyn MediaQueries>,
    config: Rc<SiteConfig>,
    current: Cell<Theme>,
}

impl ThemeManager {
    #[must_use]
    pub fn new(
        host: Box<dyn ThemeHost>,
        storage: Rc<dyn Storage>,
        media: Rc<dyn MediaQueries>,
        config: Rc<SiteConfig>,
    ) -> Self {
        let current = Cell::new(config.fallback_theme());
        Self { host, storage, media, config, current }
    }

    /// Resolve the initial theme and apply it. Returns the applied theme.
    pub fn init(&self) -> Theme {
        let theme = self.resolve_initial_theme();
        self.apply_theme(theme);
        theme
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current.get()
    }

    /// Stored preference, then an explicit OS color scheme preference, then
    /// the document's declared default, then the configured fallback.
    #[must_use]
    pub fn resolve_initial_theme(&self) -> Theme {
        if let Some(stored) = self.stored_theme() {
            return stored;
        }
        if self.media.prefers_dark() {
            return Theme::Dark;
        }
        if self.media.prefers_light() {
            return Theme::Light;
        }
        self.host
            .declared_theme()
            .as_deref()
            .and_then(Theme::parse)
            .unwrap_or_else(|| self.config.fallback_theme())
    }

    pub fn apply_theme(&self, theme: Theme) {
        self.current.set(theme);
        self.host.set_theme_attribute(theme);
        if let Err(err) = self.storage.set(&self.config.storage_key, theme.as_str()) {
            log::debug!("theme not persisted: {err}");
        }
        self.host.set_toggle_label(theme.toggle_label());
        self.host.set_color_hint(self.config.color_hint(theme));
    }

    /// Flip the current theme and apply it. Returns the new theme.
    pub fn toggle(&self) -> Theme {
        let next = self.current.get().toggled();
        self.apply_theme(next);
        next
    }

    /// React to a `prefers-color-scheme` change. Follows the OS only while the
    /// storage key is absent.
    ///
    /// [`init`](Self::init) persists the resolved theme, so with working storage
    /// the key is present from page load on and OS changes are ignored even for
    /// a visitor who never toggled. The OS is followed only when storage is
    /// disabled or the key was cleared after load.
    pub fn system_preference_changed(&self, prefers_dark: bool) {
        if self.storage.get(&self.config.storage_key).is_some() {
            return;
        }
        self.apply_theme(if prefers_dark { Theme::Dark } else { Theme::Light });
    }

    fn stored_theme(&self) -> Option<Theme> {
        let raw = self.storage.get(&self.config.storage_key)?;
        let parsed = Theme::parse(&raw);
        if parsed.is_none() {
            log::debug!("ignoring stored theme {raw:?}");
        }
        parsed
    }
}
