//! Animated same-page anchor navigation.

#[cfg(test)]
#[path = "smooth_scroll_test.rs"]
mod smooth_scroll_test;

use std::rc::Rc;

use crate::env::{History, ScrollMotion};

/// What the click handler should do with the browser's default action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorOutcome {
    /// Scrolled ourselves; prevent the default jump.
    Handled,
    /// Let the browser do its normal anchor navigation.
    PassThrough,
}

pub trait ScrollHost {
    fn target_exists(&self, id: &str) -> bool;
    /// Scroll the element with `id` so its top aligns with the viewport.
    fn scroll_to(&self, id: &str, motion: ScrollMotion);
    /// Focus the element with `id` without scrolling it again.
    fn focus_without_scroll(&self, id: &str);
}

/// Extract the element id from a same-document `href` (`"#about"` → `"about"`).
#[must_use]
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub struct SmoothScroll {
    host: Box<dyn ScrollHost>,
    history: Rc<dyn History>,
    motion: ScrollMotion,
}

impl SmoothScroll {
    /// `reduced_motion` is sampled once here; later OS changes need a reload.
    #[must_use]
    pub fn new(host: Box<dyn ScrollHost>, history: Rc<dyn History>, reduced_motion: bool) -> Self {
        Self { host, history, motion: ScrollMotion::for_reduced_motion(reduced_motion) }
    }

    #[must_use]
    pub fn motion(&self) -> ScrollMotion {
        self.motion
    }

    pub fn anchor_clicked(&self, href: &str) -> AnchorOutcome {
        let Some(id) = fragment_id(href) else {
            return AnchorOutcome::PassThrough;
        };
        if !self.host.target_exists(id) {
            return AnchorOutcome::PassThrough;
        }

        self.host.scroll_to(id, self.motion);
        if let Err(err) = self.history.push_url(href) {
            log::debug!("anchor {href} not pushed: {err}");
        }
        self.host.focus_without_scroll(id);
        AnchorOutcome::Handled
    }
}
