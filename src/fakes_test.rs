//! In-memory browser capabilities shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};

use crate::env::{EnvError, History, MediaQueries, Scheduler, Storage, ViewportObserver};

#[derive(Default)]
pub struct FakeStorage {
    values: RefCell<HashMap<String, String>>,
    disabled: bool,
}

impl FakeStorage {
    pub fn with(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        storage
    }

    pub fn disabled() -> Self {
        Self { values: RefCell::default(), disabled: true }
    }

    pub fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

impl Storage for FakeStorage {
    fn get(&self, key: &str) -> Option<String> {
        if self.disabled {
            return None;
        }
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), EnvError> {
        if self.disabled {
            return Err(EnvError::Storage("SecurityError".to_owned()));
        }
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// `Default` reports no color scheme preference at all.
#[derive(Default)]
pub struct FakeMedia {
    pub dark: Cell<bool>,
    pub light: Cell<bool>,
    pub reduced_motion: Cell<bool>,
}

impl FakeMedia {
    /// A browser that reports a scheme: dark when `dark`, light otherwise.
    pub fn new(dark: bool, reduced_motion: bool) -> Self {
        Self { dark: Cell::new(dark), light: Cell::new(!dark), reduced_motion: Cell::new(reduced_motion) }
    }
}

impl MediaQueries for FakeMedia {
    fn prefers_dark(&self) -> bool {
        self.dark.get()
    }

    fn prefers_light(&self) -> bool {
        self.light.get()
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion.get()
    }
}

#[derive(Default)]
pub struct FakeHistory {
    pub pushed: RefCell<Vec<String>>,
}

impl History for FakeHistory {
    fn push_url(&self, url: &str) -> Result<(), EnvError> {
        self.pushed.borrow_mut().push(url.to_owned());
        Ok(())
    }
}

/// Manual clock: tasks run only when the test advances time past their deadline.
#[derive(Default)]
pub struct FakeScheduler {
    now: Cell<u64>,
    tasks: RefCell<Vec<(u64, Box<dyn FnOnce()>)>>,
}

impl FakeScheduler {
    pub fn pending(&self) -> usize {
        self.tasks.borrow().len()
    }

    pub fn advance(&self, ms: u64) {
        let deadline = self.now.get() + ms;
        loop {
            let next = {
                let mut tasks = self.tasks.borrow_mut();
                let due = tasks
                    .iter()
                    .enumerate()
                    .filter(|(_, (at, _))| *at <= deadline)
                    .min_by_key(|(_, (at, _))| *at)
                    .map(|(i, _)| i);
                due.map(|i| tasks.remove(i))
            };
            let Some((at, task)) = next else { break };
            self.now.set(at);
            task();
        }
        self.now.set(deadline);
    }
}

impl Scheduler for FakeScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let at = self.now.get() + u64::from(delay_ms);
        self.tasks.borrow_mut().push((at, task));
    }
}

#[derive(Default)]
pub struct FakeObserver {
    pub observed: RefCell<BTreeSet<usize>>,
}

impl FakeObserver {
    pub fn is_observing(&self, target: usize) -> bool {
        self.observed.borrow().contains(&target)
    }
}

impl ViewportObserver for FakeObserver {
    fn observe(&self, target: usize) {
        self.observed.borrow_mut().insert(target);
    }

    fn unobserve(&self, target: usize) {
        self.observed.borrow_mut().remove(&target);
    }
}
