//! `web-sys` implementations of the capability traits.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, MediaQueryList, Window};

use super::dom::{describe, listen};
use crate::env::{EnvError, History, Intersection, MediaQueries, Scheduler, Storage, ViewportObserver};

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";
const LIGHT_QUERY: &str = "(prefers-color-scheme: light)";
const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// `localStorage`, or nothing when the browser denies access.
pub struct BrowserStorage {
    storage: Option<web_sys::Storage>,
}

impl BrowserStorage {
    pub fn local(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::debug!("localStorage unavailable: {}", describe(&err));
                None
            }
        };
        Self { storage }
    }
}

impl Storage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        match self.storage.as_ref()?.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::debug!("localStorage read of {key} failed: {}", describe(&err));
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), EnvError> {
        let Some(storage) = self.storage.as_ref() else {
            return Err(EnvError::Storage("localStorage unavailable".to_owned()));
        };
        storage.set_item(key, value).map_err(|err| EnvError::Storage(describe(&err)))
    }
}

pub struct BrowserMedia {
    window: Window,
}

impl BrowserMedia {
    pub fn new(window: &Window) -> Self {
        Self { window: window.clone() }
    }

    fn query(&self, query: &str) -> Option<MediaQueryList> {
        match self.window.match_media(query) {
            Ok(list) => list,
            Err(err) => {
                log::debug!("matchMedia({query}) failed: {}", describe(&err));
                None
            }
        }
    }

    fn matches(&self, query: &str) -> bool {
        self.query(query).is_some_and(|list| list.matches())
    }

    /// Call `handler` with the new value whenever the color scheme preference flips.
    pub fn on_color_scheme_change(&self, mut handler: impl FnMut(bool) + 'static) {
        let Some(list) = self.query(DARK_QUERY) else {
            return;
        };
        listen(&list, "change", move |event| {
            if let Some(change) = event.dyn_ref::<web_sys::MediaQueryListEvent>() {
                handler(change.matches());
            }
        });
    }
}

impl MediaQueries for BrowserMedia {
    fn prefers_dark(&self) -> bool {
        self.matches(DARK_QUERY)
    }

    fn prefers_light(&self) -> bool {
        self.matches(LIGHT_QUERY)
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.matches(REDUCED_MOTION_QUERY)
    }
}

pub struct BrowserHistory {
    history: Option<web_sys::History>,
}

impl BrowserHistory {
    pub fn new(window: &Window) -> Self {
        let history = match window.history() {
            Ok(history) => Some(history),
            Err(err) => {
                log::debug!("history unavailable: {}", describe(&err));
                None
            }
        };
        Self { history }
    }
}

impl History for BrowserHistory {
    fn push_url(&self, url: &str) -> Result<(), EnvError> {
        let Some(history) = self.history.as_ref() else {
            return Err(EnvError::History("history unavailable".to_owned()));
        };
        history
            .push_state_with_url(&JsValue::NULL, "", Some(url))
            .map_err(|err| EnvError::History(describe(&err)))
    }
}

/// Fire-and-forget timers on the browser event loop.
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }
}

/// Whether the running browser exposes `IntersectionObserver`.
pub fn intersection_observer_supported(window: &Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// One `IntersectionObserver` over a fixed element list; targets are indexes into it.
pub struct BrowserObserver {
    observer: IntersectionObserver,
    elements: Rc<Vec<Element>>,
}

impl BrowserObserver {
    pub fn new(
        elements: Rc<Vec<Element>>,
        options: &IntersectionObserverInit,
        mut on_entries: impl FnMut(&[Intersection]) + 'static,
    ) -> Result<Self, EnvError> {
        let lookup = Rc::clone(&elements);
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let batch: Vec<Intersection> = entries
                    .iter()
                    .filter_map(|value| value.dyn_ref::<IntersectionObserverEntry>().cloned())
                    .filter_map(|entry| {
                        let target = entry.target();
                        lookup
                            .iter()
                            .position(|el| *el == target)
                            .map(|index| Intersection { target: index, is_intersecting: entry.is_intersecting() })
                    })
                    .collect();
                on_entries(&batch);
            },
        );
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), options)
            .map_err(|err| EnvError::Dom(describe(&err)))?;
        callback.forget();
        Ok(Self { observer, elements })
    }
}

impl ViewportObserver for BrowserObserver {
    fn observe(&self, target: usize) {
        if let Some(element) = self.elements.get(target) {
            self.observer.observe(element);
        }
    }

    fn unobserve(&self, target: usize) {
        if let Some(element) = self.elements.get(target) {
            self.observer.unobserve(element);
        }
    }
}
