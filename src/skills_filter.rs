//! Category filter for the skills grid.
//!
//! DESIGN
//! ======
//! Hiding is two-phase: the category fades out immediately and leaves the
//! layout once the transition has run. The fade duration is the same
//! `transition_ms` the host writes into the CSS transition, so the two never
//! drift. Each selection bumps a generation counter and deferred hides from
//! older selections are dropped.

#[cfg(test)]
#[path = "skills_filter_test.rs"]
mod skills_filter_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::env::Scheduler;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    All,
    Category(String),
}

impl Filter {
    /// Parse a `data-filter` value. `"all"` (or a missing value) selects everything.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("all" | "") => Self::All,
            Some(name) => Self::Category(name.to_owned()),
        }
    }

    #[must_use]
    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Category(name) => category == Some(name.as_str()),
        }
    }
}

/// DOM surface: filter buttons and categories, both addressed by index.
pub trait SkillsHost {
    fn button_count(&self) -> usize;
    /// `data-category` of each category, in document order.
    fn category_names(&self) -> Vec<Option<String>>;
    fn set_button_active(&self, button: usize, active: bool);
    /// Put the category back in the layout and start its fade/slide-in.
    fn fade_in(&self, category: usize);
    /// Start the fade/slide-out. The category still occupies layout.
    fn fade_out(&self, category: usize);
    /// Remove the category from layout (`display: none`).
    fn hide(&self, category: usize);
}

pub struct SkillsFilter {
    host: Rc<dyn SkillsHost>,
    scheduler: Rc<dyn Scheduler>,
    categories: Vec<Option<String>>,
    transition_ms: u32,
    generation: Rc<Cell<u64>>,
    active_button: Cell<Option<usize>>,
}

impl SkillsFilter {
    /// Returns `None` when the page has no filter buttons.
    #[must_use]
    pub fn new(host: Rc<dyn SkillsHost>, scheduler: Rc<dyn Scheduler>, transition_ms: u32) -> Option<Self> {
        if host.button_count() == 0 {
            log::debug!("skills filter: no filter buttons");
            return None;
        }
        let categories = host.category_names();
        Some(Self {
            host,
            scheduler,
            categories,
            transition_ms,
            generation: Rc::new(Cell::new(0)),
            active_button: Cell::new(None),
        })
    }

    #[must_use]
    pub fn active_button(&self) -> Option<usize> {
        self.active_button.get()
    }

    /// Handle a click on filter button `button` carrying `filter`.
    pub fn select(&self, button: usize, filter: &Filter) {
        self.filter_skills(filter);
        self.update_active_button(button);
    }

    pub fn filter_skills(&self, filter: &Filter) {
        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);

        for (index, name) in self.categories.iter().enumerate() {
            if filter.matches(name.as_deref()) {
                self.host.fade_in(index);
                continue;
            }
            self.host.fade_out(index);
            let host = Rc::clone(&self.host);
            let current = Rc::clone(&self.generation);
            self.scheduler.schedule(
                self.transition_ms,
                Box::new(move || {
                    if current.get() == generation {
                        host.hide(index);
                    }
                }),
            );
        }
    }

    fn update_active_button(&self, button: usize) {
        for index in 0..self.host.button_count() {
            self.host.set_button_active(index, index == button);
        }
        self.active_button.set(Some(button));
    }
}
