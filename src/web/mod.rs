//! Browser entry point.
//!
//! ARCHITECTURE
//! ============
//! `start` runs once when the wasm module loads: panic hook, config, logger,
//! then [`init`] as soon as the document is parsed. `init` builds each
//! component in turn; they share capabilities but never call each other.

mod bind;
pub mod dom;
pub mod env;

use std::rc::Rc;

use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{Document, Window};

use self::dom::listen;
use self::env::{BrowserMedia, BrowserStorage, TimeoutScheduler};
use crate::config::{CONFIG_ELEMENT_ID, SiteConfig};
use crate::env::{Scheduler, Storage};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let raw = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content());
    let (config, config_error) = SiteConfig::resolve(raw.as_deref());
    if let Err(err) = console_log::init_with_level(config.log_level()) {
        web_sys::console::warn_1(&format!("logger already installed: {err}").into());
    }
    if let Some(err) = config_error {
        log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
    }
    let config = Rc::new(config);

    if document.ready_state() == "loading" {
        let target = document.clone();
        listen(&target, "DOMContentLoaded", move |_| init(&window, &document, &config));
    } else {
        init(&window, &document, &config);
    }
}

/// Activate every behavior against the parsed document.
pub fn init(window: &Window, document: &Document, config: &Rc<SiteConfig>) {
    let media = Rc::new(BrowserMedia::new(window));
    let storage: Rc<dyn Storage> = Rc::new(BrowserStorage::local(window));
    let scheduler: Rc<dyn Scheduler> = Rc::new(TimeoutScheduler);

    bind::theme(document, &storage, &media, config);
    bind::mobile_nav(document);
    bind::skills_filter(document, &scheduler, config);
    bind::smooth_scroll(window, document, &media);
    bind::contact_form(document, &scheduler, config);
    bind::reveal(window, document, &media, config);
    bind::keyboard_nav(document);
    bind::lazy_images(window, document);

    log::info!("site behaviors ready");
}
