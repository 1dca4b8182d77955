//! Scroll-triggered reveal of sections, project cards, and timeline items.
//!
//! Elements start translated and transparent (see [`reveal_stylesheet`]) and
//! receive [`REVEALED_CLASS`] the first time they intersect the viewport.
//! Reveal is one-way: revealed elements are unobserved and never hidden again.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use crate::env::{EnvError, Intersection, ViewportObserver};

/// Selector for everything the observer watches.
pub const REVEAL_SELECTOR: &str = ".section, .project-card, .timeline-item";
pub const REVEALED_CLASS: &str = "animate-in";

pub trait RevealHost {
    fn mark_revealed(&self, target: usize);
}

pub struct AnimationObserver {
    host: Box<dyn RevealHost>,
    observer: Rc<dyn ViewportObserver>,
    revealed: RefCell<BTreeSet<usize>>,
}

impl AnimationObserver {
    /// Connect the observer and start watching `count` elements.
    ///
    /// Under reduced motion `connect` is never called, so no observer exists
    /// and the stylesheet keeps elements visible. Returns `None` in that case
    /// and when the observer cannot be created.
    pub fn activate<F>(host: Box<dyn RevealHost>, count: usize, reduced_motion: bool, connect: F) -> Option<Self>
    where
        F: FnOnce() -> Result<Rc<dyn ViewportObserver>, EnvError>,
    {
        if reduced_motion {
            log::debug!("reveal animations skipped: reduced motion requested");
            return None;
        }
        let observer = match connect() {
            Ok(observer) => observer,
            Err(err) => {
                log::warn!("reveal animations disabled: {err}");
                return None;
            }
        };
        for target in 0..count {
            observer.observe(target);
        }
        Some(Self { host, observer, revealed: RefCell::default() })
    }

    pub fn handle_entries(&self, entries: &[Intersection]) {
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            if !self.revealed.borrow_mut().insert(entry.target) {
                continue;
            }
            self.host.mark_revealed(entry.target);
            self.observer.unobserve(entry.target);
        }
    }

    #[must_use]
    pub fn is_revealed(&self, target: usize) -> bool {
        self.revealed.borrow().contains(&target)
    }
}

/// Stylesheet injected once the observer is running.
#[must_use]
pub fn reveal_stylesheet(duration_ms: u32) -> String {
    format!(
        "{REVEAL_SELECTOR} {{\n  opacity: 0;\n  transform: translateY(30px);\n  transition: opacity {duration_ms}ms ease, transform {duration_ms}ms ease;\n}}\n\
         .{REVEALED_CLASS} {{\n  opacity: 1 !important;\n  transform: translateY(0) !important;\n}}\n\
         @media (prefers-reduced-motion: reduce) {{\n  {REVEAL_SELECTOR} {{\n    opacity: 1;\n    transform: none;\n    transition: none;\n  }}\n}}\n",
    )
}
