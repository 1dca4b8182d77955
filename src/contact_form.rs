//! Asynchronous contact form submission.
//!
//! The submission itself is injected as a future factory: the browser glue
//! posts `FormData` with `gloo-net`, tests hand in ready futures.
//!
//! ERROR HANDLING
//! ==============
//! Failures never escape this module. A rejected or failed POST flips the
//! error feedback on and leaves the fields intact so the visitor can retry.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use crate::env::Scheduler;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("submission rejected with status {0}")]
    Rejected(u16),
    #[error("submission failed: {0}")]
    Network(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Success,
    Error,
}

pub trait FormHost {
    /// Current text of the submit button, `None` when the form has none.
    fn submit_label(&self) -> Option<String>;
    fn set_submit_label(&self, label: &str);
    fn set_submit_enabled(&self, enabled: bool);
    fn reset_fields(&self);
    /// Show a feedback element and bring it into view. No-op when absent.
    fn show_feedback(&self, which: Feedback);
    fn hide_feedback(&self, which: Feedback);
}

pub struct ContactForm {
    host: Rc<dyn FormHost>,
    scheduler: Rc<dyn Scheduler>,
    pending_label: String,
    feedback_ms: u32,
    state: Cell<SubmitState>,
    success_seq: Rc<Cell<u64>>,
    error_seq: Rc<Cell<u64>>,
}

impl ContactForm {
    #[must_use]
    pub fn new(host: Rc<dyn FormHost>, scheduler: Rc<dyn Scheduler>, pending_label: &str, feedback_ms: u32) -> Self {
        Self {
            host,
            scheduler,
            pending_label: pending_label.to_owned(),
            feedback_ms,
            state: Cell::new(SubmitState::Idle),
            success_seq: Rc::new(Cell::new(0)),
            error_seq: Rc::new(Cell::new(0)),
        }
    }

    #[must_use]
    pub fn state(&self) -> SubmitState {
        self.state.get()
    }

    /// Run one submission through `send`.
    ///
    /// Returns the settled outcome (`Success` or `Error`), or `Submitting`
    /// when another submission is still in flight and this one was dropped.
    pub async fn submit<F, Fut>(&self, send: F) -> SubmitState
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(), SubmitError>>,
    {
        if self.state.get() == SubmitState::Submitting {
            log::debug!("contact form: submission already in flight");
            return SubmitState::Submitting;
        }
        self.state.set(SubmitState::Submitting);

        let original_label = self.host.submit_label();
        self.host.set_submit_label(&self.pending_label);
        self.host.set_submit_enabled(false);

        let settled = match send().await {
            Ok(()) => {
                self.show_message(Feedback::Success);
                self.host.reset_fields();
                SubmitState::Success
            }
            Err(err) => {
                log::warn!("contact form: {err}");
                self.show_message(Feedback::Error);
                SubmitState::Error
            }
        };

        if let Some(label) = original_label {
            self.host.set_submit_label(&label);
        }
        self.host.set_submit_enabled(true);
        self.state.set(SubmitState::Idle);
        settled
    }

    fn show_message(&self, which: Feedback) {
        let seq = match which {
            Feedback::Success => &self.success_seq,
            Feedback::Error => &self.error_seq,
        };
        let shown = seq.get().wrapping_add(1);
        seq.set(shown);
        self.host.show_feedback(which);

        let host = Rc::clone(&self.host);
        let seq = Rc::clone(seq);
        self.scheduler.schedule(
            self.feedback_ms,
            Box::new(move || {
                if seq.get() == shown {
                    host.hide_feedback(which);
                }
            }),
        );
    }
}
