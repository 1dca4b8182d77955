//! Deferred image loading for `img[data-src]`.
//!
//! Pure enhancement: without `IntersectionObserver` nothing is registered and
//! the markup is expected to carry an eager `src`.

#[cfg(test)]
#[path = "lazy_images_test.rs"]
mod lazy_images_test;

use std::rc::Rc;

use crate::env::{Intersection, ViewportObserver};

pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";

pub trait ImageHost {
    /// Move `data-src` into `src` and drop `data-src`.
    /// Returns `false` when the image no longer carries a deferred source.
    fn promote_source(&self, image: usize) -> bool;
}

pub struct LazyImages {
    host: Box<dyn ImageHost>,
    observer: Rc<dyn ViewportObserver>,
}

impl LazyImages {
    #[must_use]
    pub fn activate(host: Box<dyn ImageHost>, observer: Rc<dyn ViewportObserver>, count: usize) -> Self {
        for image in 0..count {
            observer.observe(image);
        }
        Self { host, observer }
    }

    pub fn handle_entries(&self, entries: &[Intersection]) {
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            if self.host.promote_source(entry.target) {
                self.observer.unobserve(entry.target);
            }
        }
    }
}
