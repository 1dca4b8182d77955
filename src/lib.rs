//! # folio-site
//!
//! Client-side behavior for a static portfolio site, compiled to WebAssembly.
//!
//! Each behavior is a small struct built once at page load and closed over by
//! its own DOM listeners. The structs only see the browser through the
//! capability traits in [`env`] and one host trait per component, so all of
//! them run natively under `cargo test`. The `browser` feature adds the
//! `web-sys` implementations and the wasm start hook.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Light/dark resolution, persistence, OS preference sync |
//! | [`mobile_nav`] | Collapsible navigation menu |
//! | [`skills_filter`] | Category filter with fade transitions |
//! | [`smooth_scroll`] | Animated same-page anchor navigation |
//! | [`contact_form`] | Async form submission and feedback |
//! | [`reveal`] | Scroll-triggered reveal animations |
//! | [`keyboard_nav`] | Alt+M skip-to-content shortcut |
//! | [`lazy_images`] | Deferred `img[data-src]` loading |
//! | [`config`] | Site settings with defaults and inline JSON overrides |
//! | [`env`] | Browser capability traits |
//! | `web` | `web-sys` glue and the start hook (`browser` feature) |

pub mod config;
pub mod contact_form;
pub mod env;
pub mod keyboard_nav;
pub mod lazy_images;
pub mod mobile_nav;
pub mod reveal;
pub mod skills_filter;
pub mod smooth_scroll;
pub mod theme;

#[cfg(feature = "browser")]
pub mod web;

#[cfg(test)]
#[path = "fakes_test.rs"]
mod fakes;
