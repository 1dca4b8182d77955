//! DOM helpers and the `web-sys` side of each component's host trait.
//!
//! Every JS call that can throw is matched and logged; a failed style or
//! attribute write degrades the visual only, so nothing here bubbles up.

use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{
    Document, Element, Event, EventTarget, FocusOptions, HtmlButtonElement, HtmlElement, HtmlFormElement,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::contact_form::{Feedback, FormHost};
use crate::env::ScrollMotion;
use crate::keyboard_nav::{LandmarkHost, MAIN_CONTENT_ID};
use crate::lazy_images::ImageHost;
use crate::mobile_nav::NavHost;
use crate::reveal::{REVEALED_CLASS, RevealHost};
use crate::skills_filter::SkillsHost;
use crate::smooth_scroll::ScrollHost;
use crate::theme::{Theme, ThemeHost};

// ── Helpers ─────────────────────────────────────────────────────

/// Render a thrown JS value for logging.
pub fn describe(err: &JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    format!("{err:?}")
}

/// Register a page-lifetime listener.
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(err) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("cannot listen for {event}: {}", describe(&err));
    }
    closure.forget();
}

pub fn query(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::debug!("query {selector} failed: {}", describe(&err));
            None
        }
    }
}

pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            log::debug!("query {selector} failed: {}", describe(&err));
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

pub fn as_html(element: &Element) -> Option<HtmlElement> {
    element.dyn_ref::<HtmlElement>().cloned()
}

fn set_attr(element: &Element, name: &str, value: &str) {
    if let Err(err) = element.set_attribute(name, value) {
        log::debug!("set {name} failed: {}", describe(&err));
    }
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        log::debug!("style {property} failed: {}", describe(&err));
    }
}

fn set_class(element: &Element, class: &str, on: bool) {
    if let Err(err) = element.class_list().toggle_with_force(class, on) {
        log::debug!("class {class} failed: {}", describe(&err));
    }
}

fn scroll_into_view(element: &Element, motion: ScrollMotion, block: ScrollLogicalPosition) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(match motion {
        ScrollMotion::Instant => ScrollBehavior::Auto,
        ScrollMotion::Smooth => ScrollBehavior::Smooth,
    });
    options.set_block(block);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

fn next_frame(f: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        f();
        return;
    };
    let callback = Closure::once_into_js(f);
    if let Err(err) = window.request_animation_frame(callback.unchecked_ref()) {
        log::debug!("requestAnimationFrame failed: {}", describe(&err));
    }
}

// ── Theme ───────────────────────────────────────────────────────

pub struct DocumentTheme {
    pub root: Element,
    pub toggle: Option<Element>,
    pub meta: Option<Element>,
}

impl ThemeHost for DocumentTheme {
    fn declared_theme(&self) -> Option<String> {
        self.root.get_attribute("data-theme")
    }

    fn set_theme_attribute(&self, theme: Theme) {
        set_attr(&self.root, "data-theme", theme.as_str());
    }

    fn set_toggle_label(&self, label: &str) {
        if let Some(toggle) = &self.toggle {
            set_attr(toggle, "aria-label", label);
        }
    }

    fn set_color_hint(&self, color: &str) {
        if let Some(meta) = &self.meta {
            set_attr(meta, "content", color);
        }
    }
}

// ── Mobile navigation ───────────────────────────────────────────

pub struct NavElements {
    pub toggle: Element,
    pub menu: Element,
    pub body: Option<HtmlElement>,
}

impl NavHost for NavElements {
    fn toggle_expanded(&self) -> bool {
        self.toggle.get_attribute("aria-expanded").as_deref() == Some("true")
    }

    fn set_toggle_expanded(&self, expanded: bool) {
        set_attr(&self.toggle, "aria-expanded", if expanded { "true" } else { "false" });
    }

    fn set_menu_active(&self, active: bool) {
        set_class(&self.menu, "active", active);
    }

    fn set_scroll_locked(&self, locked: bool) {
        if let Some(body) = &self.body {
            set_style(body, "overflow", if locked { "hidden" } else { "" });
        }
    }
}

// ── Skills filter ───────────────────────────────────────────────

pub struct SkillsGrid {
    pub buttons: Vec<Element>,
    pub categories: Vec<HtmlElement>,
    pub transition_ms: u32,
}

impl SkillsGrid {
    fn transition(&self) -> String {
        format!("opacity {ms}ms ease, transform {ms}ms ease", ms = self.transition_ms)
    }
}

impl SkillsHost for SkillsGrid {
    fn button_count(&self) -> usize {
        self.buttons.len()
    }

    fn category_names(&self) -> Vec<Option<String>> {
        self.categories.iter().map(|c| c.get_attribute("data-category")).collect()
    }

    fn set_button_active(&self, button: usize, active: bool) {
        if let Some(el) = self.buttons.get(button) {
            set_class(el, "active", active);
        }
    }

    fn fade_in(&self, category: usize) {
        let Some(el) = self.categories.get(category) else {
            return;
        };
        set_style(el, "display", "block");
        set_style(el, "opacity", "0");
        set_style(el, "transform", "translateY(20px)");

        let el = el.clone();
        let transition = self.transition();
        next_frame(move || {
            set_style(&el, "transition", &transition);
            set_style(&el, "opacity", "1");
            set_style(&el, "transform", "translateY(0)");
        });
    }

    fn fade_out(&self, category: usize) {
        if let Some(el) = self.categories.get(category) {
            set_style(el, "transition", &self.transition());
            set_style(el, "opacity", "0");
            set_style(el, "transform", "translateY(-20px)");
        }
    }

    fn hide(&self, category: usize) {
        if let Some(el) = self.categories.get(category) {
            set_style(el, "display", "none");
        }
    }
}

// ── Smooth scroll ───────────────────────────────────────────────

pub struct PageScroll {
    pub document: Document,
}

impl ScrollHost for PageScroll {
    fn target_exists(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn scroll_to(&self, id: &str, motion: ScrollMotion) {
        if let Some(target) = self.document.get_element_by_id(id) {
            scroll_into_view(&target, motion, ScrollLogicalPosition::Start);
        }
    }

    fn focus_without_scroll(&self, id: &str) {
        let Some(target) = self.document.get_element_by_id(id).as_ref().and_then(as_html) else {
            return;
        };
        let options = FocusOptions::new();
        options.set_prevent_scroll(true);
        if let Err(err) = target.focus_with_options(&options) {
            log::debug!("focus #{id} failed: {}", describe(&err));
        }
    }
}

// ── Contact form ────────────────────────────────────────────────

pub struct FormElements {
    pub form: HtmlFormElement,
    pub submit: Option<HtmlButtonElement>,
    pub success: Option<HtmlElement>,
    pub error: Option<HtmlElement>,
}

impl FormElements {
    fn feedback(&self, which: Feedback) -> Option<&HtmlElement> {
        match which {
            Feedback::Success => self.success.as_ref(),
            Feedback::Error => self.error.as_ref(),
        }
    }
}

impl FormHost for FormElements {
    fn submit_label(&self) -> Option<String> {
        self.submit.as_ref().map(|button| button.text_content().unwrap_or_default())
    }

    fn set_submit_label(&self, label: &str) {
        if let Some(button) = &self.submit {
            button.set_text_content(Some(label));
        }
    }

    fn set_submit_enabled(&self, enabled: bool) {
        if let Some(button) = &self.submit {
            button.set_disabled(!enabled);
        }
    }

    fn reset_fields(&self) {
        self.form.reset();
    }

    fn show_feedback(&self, which: Feedback) {
        if let Some(el) = self.feedback(which) {
            set_style(el, "display", "block");
            scroll_into_view(el, ScrollMotion::Smooth, ScrollLogicalPosition::Nearest);
        }
    }

    fn hide_feedback(&self, which: Feedback) {
        if let Some(el) = self.feedback(which) {
            set_style(el, "display", "none");
        }
    }
}

// ── Reveal / lazy images / landmark ─────────────────────────────

pub struct RevealTargets(pub Rc<Vec<Element>>);

impl RevealHost for RevealTargets {
    fn mark_revealed(&self, target: usize) {
        if let Some(el) = self.0.get(target) {
            set_class(el, REVEALED_CLASS, true);
        }
    }
}

pub struct LazyImageSet(pub Rc<Vec<Element>>);

impl ImageHost for LazyImageSet {
    fn promote_source(&self, image: usize) -> bool {
        let Some(img) = self.0.get(image) else {
            return false;
        };
        let Some(source) = img.get_attribute("data-src") else {
            return false;
        };
        set_attr(img, "src", &source);
        if let Err(err) = img.remove_attribute("data-src") {
            log::debug!("remove data-src failed: {}", describe(&err));
        }
        true
    }
}

pub struct MainLandmark {
    pub document: Document,
}

impl LandmarkHost for MainLandmark {
    fn focus_main_content(&self) -> bool {
        let Some(main) = self.document.get_element_by_id(MAIN_CONTENT_ID) else {
            return false;
        };
        if let Some(html) = as_html(&main) {
            if let Err(err) = html.focus() {
                log::debug!("focus #{MAIN_CONTENT_ID} failed: {}", describe(&err));
            }
        }
        scroll_into_view(&main, ScrollMotion::Smooth, ScrollLogicalPosition::Start);
        true
    }
}
