//! Site-level settings.
//!
//! Every field has a default matching the stylesheet the site ships with. A
//! page can override any subset by embedding
//! `<script type="application/json" id="site-config">{ ... }</script>`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::theme::Theme;

/// Id of the optional inline JSON config element.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// `localStorage` key holding the theme preference.
    pub storage_key: String,
    /// Theme used when neither storage, OS, nor the document declare one.
    pub default_theme: String,
    /// `meta[name="theme-color"]` value for the dark theme.
    pub dark_color: String,
    /// `meta[name="theme-color"]` value for the light theme.
    pub light_color: String,
    /// Duration of fade transitions, shared by CSS and deferred hides.
    pub transition_ms: u32,
    /// How long form feedback stays visible.
    pub feedback_ms: u32,
    /// Submit button label while a submission is in flight.
    pub pending_label: String,
    /// Duration of the scroll reveal transition.
    pub reveal_ms: u32,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_owned(),
            default_theme: "dark".to_owned(),
            dark_color: "#0d1117".to_owned(),
            light_color: "#ffffff".to_owned(),
            transition_ms: 300,
            feedback_ms: 5000,
            pending_label: "Sending...".to_owned(),
            reveal_ms: 600,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_owned(),
            log_level: "info".to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON config block. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for malformed JSON or out-of-range values.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid { field: "storage_key", reason: "must not be empty".to_owned() });
        }
        if Theme::parse(&self.default_theme).is_none() {
            return Err(ConfigError::Invalid {
                field: "default_theme",
                reason: format!("unknown theme {:?}", self.default_theme),
            });
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(ConfigError::Invalid {
                field: "reveal_threshold",
                reason: format!("{} is outside 0..=1", self.reveal_threshold),
            });
        }
        if self.log_level.parse::<log::Level>().is_err() {
            return Err(ConfigError::Invalid { field: "log_level", reason: format!("unknown level {:?}", self.log_level) });
        }
        Ok(())
    }

    /// Resolve from an optional inline block. Falls back to defaults on any
    /// error and hands the error back so the caller can report it once
    /// logging is up.
    #[must_use]
    pub fn resolve(raw: Option<&str>) -> (Self, Option<ConfigError>) {
        let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
            return (Self::default(), None);
        };
        match Self::from_json(raw) {
            Ok(config) => (config, None),
            Err(err) => (Self::default(), Some(err)),
        }
    }

    #[must_use]
    pub fn fallback_theme(&self) -> Theme {
        Theme::parse(&self.default_theme).unwrap_or(Theme::Dark)
    }

    #[must_use]
    pub fn color_hint(&self, theme: Theme) -> &str {
        match theme {
            Theme::Dark => &self.dark_color,
            Theme::Light => &self.light_color,
        }
    }

    #[must_use]
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
