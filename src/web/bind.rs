//! Wiring: build each component from the live document and attach its listeners.
//!
//! Every binder returns quietly when the elements it needs are missing; a
//! page only carries the features it uses.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_net::http::Request;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, FormData, HtmlButtonElement, HtmlFormElement, IntersectionObserverInit, KeyboardEvent, Node, Window};

use super::dom::{
    DocumentTheme, FormElements, LazyImageSet, MainLandmark, NavElements, PageScroll, RevealTargets, SkillsGrid,
    as_html, describe, listen, query, query_all,
};
use super::env::{BrowserHistory, BrowserMedia, BrowserObserver, intersection_observer_supported};
use crate::config::SiteConfig;
use crate::contact_form::{ContactForm, SubmitError};
use crate::env::{MediaQueries, Scheduler, Storage, ViewportObserver};
use crate::keyboard_nav::{KeyChord, KeyboardNav};
use crate::lazy_images::{LAZY_IMAGE_SELECTOR, LazyImages};
use crate::mobile_nav::MobileNav;
use crate::reveal::{AnimationObserver, REVEAL_SELECTOR, reveal_stylesheet};
use crate::skills_filter::{Filter, SkillsFilter};
use crate::smooth_scroll::{AnchorOutcome, SmoothScroll};
use crate::theme::ThemeManager;

pub fn theme(document: &Document, storage: &Rc<dyn Storage>, media: &Rc<BrowserMedia>, config: &Rc<SiteConfig>) {
    let Some(root) = document.document_element() else {
        return;
    };
    let toggle = query(document, ".theme-toggle");
    let host = DocumentTheme { root, toggle: toggle.clone(), meta: query(document, r#"meta[name="theme-color"]"#) };
    let media_caps: Rc<dyn MediaQueries> = media.clone();
    let manager = Rc::new(ThemeManager::new(Box::new(host), Rc::clone(storage), media_caps, Rc::clone(config)));
    let applied = manager.init();
    log::debug!("theme resolved to {applied}");

    if let Some(toggle) = toggle {
        let manager = Rc::clone(&manager);
        listen(&toggle, "click", move |_| {
            manager.toggle();
        });
    }
    media.on_color_scheme_change(move |prefers_dark| manager.system_preference_changed(prefers_dark));
}

pub fn mobile_nav(document: &Document) {
    let (Some(toggle), Some(menu)) = (query(document, ".mobile-menu-toggle"), query(document, ".navbar-menu")) else {
        log::debug!("mobile nav: toggle or menu missing");
        return;
    };
    let host = NavElements { toggle: toggle.clone(), menu: menu.clone(), body: document.body() };
    let nav = Rc::new(MobileNav::new(Box::new(host)));

    {
        let nav = Rc::clone(&nav);
        listen(&toggle, "click", move |_| nav.toggle_menu());
    }
    for link in query_all(document, ".nav-link") {
        let nav = Rc::clone(&nav);
        listen(&link, "click", move |_| nav.close_menu());
    }
    {
        let nav = Rc::clone(&nav);
        listen(document, "click", move |event| {
            let target = event.target();
            let node = target.as_ref().and_then(|t| t.dyn_ref::<Node>());
            nav.document_clicked(toggle.contains(node), menu.contains(node));
        });
    }
    listen(document, "keydown", move |event| {
        if let Some(key) = event.dyn_ref::<KeyboardEvent>() {
            nav.key_pressed(&key.key());
        }
    });
}

pub fn skills_filter(document: &Document, scheduler: &Rc<dyn Scheduler>, config: &SiteConfig) {
    let buttons = query_all(document, ".filter-btn");
    let categories = query_all(document, ".skill-category").iter().filter_map(as_html).collect();
    let grid = Rc::new(SkillsGrid { buttons: buttons.clone(), categories, transition_ms: config.transition_ms });
    let Some(filter) = SkillsFilter::new(grid, Rc::clone(scheduler), config.transition_ms) else {
        return;
    };
    let filter = Rc::new(filter);

    for (index, button) in buttons.iter().enumerate() {
        let filter = Rc::clone(&filter);
        let value = button.get_attribute("data-filter");
        listen(button, "click", move |_| filter.select(index, &Filter::parse(value.as_deref())));
    }
}

pub fn smooth_scroll(window: &Window, document: &Document, media: &BrowserMedia) {
    let host = PageScroll { document: document.clone() };
    let scroll = Rc::new(SmoothScroll::new(
        Box::new(host),
        Rc::new(BrowserHistory::new(window)),
        media.prefers_reduced_motion(),
    ));

    for link in query_all(document, r##"a[href^="#"]"##) {
        let scroll = Rc::clone(&scroll);
        let href = link.get_attribute("href").unwrap_or_default();
        listen(&link, "click", move |event| {
            if scroll.anchor_clicked(&href) == AnchorOutcome::Handled {
                event.prevent_default();
            }
        });
    }
}

pub fn contact_form(document: &Document, scheduler: &Rc<dyn Scheduler>, config: &SiteConfig) {
    let Some(form) = query(document, ".contact-form").and_then(|el| el.dyn_ref::<HtmlFormElement>().cloned()) else {
        log::debug!("contact form: none on this page");
        return;
    };
    let host = FormElements {
        form: form.clone(),
        submit: form
            .query_selector(r#"button[type="submit"]"#)
            .unwrap_or_default()
            .and_then(|el| el.dyn_ref::<HtmlButtonElement>().cloned()),
        success: query(document, ".form-success").as_ref().and_then(as_html),
        error: query(document, ".form-error").as_ref().and_then(as_html),
    };
    let contact = Rc::new(ContactForm::new(
        Rc::new(host),
        Rc::clone(scheduler),
        &config.pending_label,
        config.feedback_ms,
    ));

    let target = form.clone();
    listen(&target, "submit", move |event| {
        event.prevent_default();
        let contact = Rc::clone(&contact);
        let form = form.clone();
        spawn_local(async move {
            let outcome = contact.submit(|| post_form(form)).await;
            log::debug!("contact form settled: {outcome:?}");
        });
    });
}

/// POST the form as multipart data to its `action`. Only the status is consulted.
async fn post_form(form: HtmlFormElement) -> Result<(), SubmitError> {
    let data = FormData::new_with_form(&form).map_err(|err| SubmitError::Network(describe(&err)))?;
    let response = Request::post(&form.action())
        .header("Accept", "application/json")
        .body(JsValue::from(data))
        .map_err(|err| SubmitError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| SubmitError::Network(err.to_string()))?;
    match response.status() {
        200..=299 => Ok(()),
        status => Err(SubmitError::Rejected(status)),
    }
}

fn observer_options(threshold: Option<f64>, root_margin: Option<&str>) -> IntersectionObserverInit {
    let options = IntersectionObserverInit::new();
    if let Some(threshold) = threshold {
        options.set_threshold(&JsValue::from_f64(threshold));
    }
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }
    options
}

pub fn reveal(window: &Window, document: &Document, media: &BrowserMedia, config: &SiteConfig) {
    if !intersection_observer_supported(window) {
        return;
    }
    let elements = Rc::new(query_all(document, REVEAL_SELECTOR));
    if elements.is_empty() {
        return;
    }

    let slot: Rc<RefCell<Option<AnimationObserver>>> = Rc::default();
    let count = elements.len();
    let host = RevealTargets(Rc::clone(&elements));
    let activated = AnimationObserver::activate(Box::new(host), count, media.prefers_reduced_motion(), || {
        let options = observer_options(Some(config.reveal_threshold), Some(config.reveal_root_margin.as_str()));
        let slot = Rc::clone(&slot);
        let observer = BrowserObserver::new(elements, &options, move |entries| {
            if let Some(reveal) = slot.borrow().as_ref() {
                reveal.handle_entries(entries);
            }
        })?;
        Ok(Rc::new(observer) as Rc<dyn ViewportObserver>)
    });
    if activated.is_some() {
        inject_style(document, &reveal_stylesheet(config.reveal_ms));
    }
    *slot.borrow_mut() = activated;
}

fn inject_style(document: &Document, css: &str) {
    let (Some(head), Ok(style)) = (document.head(), document.create_element("style")) else {
        return;
    };
    style.set_text_content(Some(css));
    if let Err(err) = head.append_child(&style) {
        log::debug!("style injection failed: {}", describe(&err));
    }
}

pub fn keyboard_nav(document: &Document) {
    let nav = KeyboardNav::new(Box::new(MainLandmark { document: document.clone() }));
    listen(document, "keydown", move |event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let chord = KeyChord {
            key: key.key(),
            alt: key.alt_key(),
            ctrl: key.ctrl_key(),
            meta: key.meta_key(),
        };
        if nav.key_pressed(&chord) {
            event.prevent_default();
        }
    });
}

pub fn lazy_images(window: &Window, document: &Document) {
    if !intersection_observer_supported(window) {
        log::debug!("lazy images: IntersectionObserver unavailable");
        return;
    }
    let images = Rc::new(query_all(document, LAZY_IMAGE_SELECTOR));
    if images.is_empty() {
        return;
    }

    let slot: Rc<RefCell<Option<LazyImages>>> = Rc::default();
    let observer = {
        let slot = Rc::clone(&slot);
        BrowserObserver::new(Rc::clone(&images), &observer_options(None, None), move |entries| {
            if let Some(lazy) = slot.borrow().as_ref() {
                lazy.handle_entries(entries);
            }
        })
    };
    match observer {
        Ok(observer) => {
            let count = images.len();
            *slot.borrow_mut() = Some(LazyImages::activate(Box::new(LazyImageSet(images)), Rc::new(observer), count));
        }
        Err(err) => log::warn!("lazy images disabled: {err}"),
    }
}
