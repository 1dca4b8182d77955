//! Browser capabilities injected into the component cores.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components never touch the DOM bindings directly. They receive the handful of
//! browser services they need through these traits, so the same logic runs
//! against the real page (`web::env`) and against in-memory fakes in tests.

#[cfg(test)]
#[path = "env_test.rs"]
mod env_test;

/// Failure reported by a browser capability.
///
/// None of these are fatal; callers log them and carry on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvError {
    #[error("storage unavailable: {0}")]
    Storage(String),
    #[error("history update failed: {0}")]
    History(String),
    #[error("dom operation failed: {0}")]
    Dom(String),
}

/// Persistent key-value storage (`localStorage`).
pub trait Storage {
    /// Read `key`. Returns `None` when the key is absent or storage is unavailable.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::Storage`] when storage is disabled or full.
    fn set(&self, key: &str, value: &str) -> Result<(), EnvError>;
}

/// User preference media queries.
pub trait MediaQueries {
    /// `(prefers-color-scheme: dark)`
    fn prefers_dark(&self) -> bool;
    /// `(prefers-color-scheme: light)`. Both are `false` when the browser
    /// reports no color scheme preference.
    fn prefers_light(&self) -> bool;
    /// `(prefers-reduced-motion: reduce)`
    fn prefers_reduced_motion(&self) -> bool;
}

/// Session history.
pub trait History {
    /// Push `url` (a `#fragment`) without navigating.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::History`] if the browser refuses the entry.
    fn push_url(&self, url: &str) -> Result<(), EnvError>;
}

/// One-shot timers.
pub trait Scheduler {
    /// Run `task` once after `delay_ms` milliseconds.
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// An intersection observer over a fixed list of elements addressed by index.
pub trait ViewportObserver {
    fn observe(&self, target: usize);
    fn unobserve(&self, target: usize);
}

/// A single intersection observer record, reduced to what the cores consult.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Index of the observed element in the list the observer was built over.
    pub target: usize,
    pub is_intersecting: bool,
}

impl Intersection {
    #[must_use]
    pub fn entering(target: usize) -> Self {
        Self { target, is_intersecting: true }
    }

    #[must_use]
    pub fn leaving(target: usize) -> Self {
        Self { target, is_intersecting: false }
    }
}

/// How a scroll should be animated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMotion {
    Instant,
    Smooth,
}

impl ScrollMotion {
    /// Instant when the user asked for reduced motion, smooth otherwise.
    #[must_use]
    pub fn for_reduced_motion(reduced: bool) -> Self {
        if reduced { Self::Instant } else { Self::Smooth }
    }
}
