use super::*;
use crate::env::EnvError;
use crate::fakes::FakeHistory;
use std::cell::RefCell;

#[derive(Default)]
struct PageState {
    ids: Vec<&'static str>,
    log: RefCell<Vec<String>>,
}

#[derive(Clone, Default)]
struct FakePage(Rc<PageState>);

impl FakePage {
    fn with_ids(ids: &[&'static str]) -> Self {
        Self(Rc::new(PageState { ids: ids.to_vec(), log: RefCell::default() }))
    }

    fn log(&self) -> Vec<String> {
        self.0.log.borrow().clone()
    }
}

impl ScrollHost for FakePage {
    fn target_exists(&self, id: &str) -> bool {
        self.0.ids.iter().any(|known| *known == id)
    }

    fn scroll_to(&self, id: &str, motion: ScrollMotion) {
        self.0.log.borrow_mut().push(format!("scroll {id} {motion:?}"));
    }

    fn focus_without_scroll(&self, id: &str) {
        self.0.log.borrow_mut().push(format!("focus {id}"));
    }
}

struct RefusingHistory;

impl History for RefusingHistory {
    fn push_url(&self, _url: &str) -> Result<(), EnvError> {
        Err(EnvError::History("SecurityError".to_owned()))
    }
}

#[test]
fn fragment_id_strips_hash() {
    assert_eq!(fragment_id("#about"), Some("about"));
    assert_eq!(fragment_id("#"), None);
    assert_eq!(fragment_id("about"), None);
}

#[test]
fn existing_target_scrolls_pushes_and_focuses_in_order() {
    let page = FakePage::with_ids(&["about"]);
    let history = Rc::new(FakeHistory::default());
    let scroll = SmoothScroll::new(Box::new(page.clone()), history.clone(), false);

    assert_eq!(scroll.anchor_clicked("#about"), AnchorOutcome::Handled);
    assert_eq!(page.log(), vec!["scroll about Smooth".to_owned(), "focus about".to_owned()]);
    assert_eq!(*history.pushed.borrow(), vec!["#about".to_owned()]);
}

#[test]
fn reduced_motion_scrolls_instantly() {
    let page = FakePage::with_ids(&["work"]);
    let scroll = SmoothScroll::new(Box::new(page.clone()), Rc::new(FakeHistory::default()), true);
    assert_eq!(scroll.motion(), ScrollMotion::Instant);
    scroll.anchor_clicked("#work");
    assert_eq!(page.log()[0], "scroll work Instant");
}

#[test]
fn missing_target_passes_through() {
    let page = FakePage::with_ids(&["about"]);
    let history = Rc::new(FakeHistory::default());
    let scroll = SmoothScroll::new(Box::new(page.clone()), history.clone(), false);

    assert_eq!(scroll.anchor_clicked("#contact"), AnchorOutcome::PassThrough);
    assert_eq!(scroll.anchor_clicked("#"), AnchorOutcome::PassThrough);
    assert!(page.log().is_empty());
    assert!(history.pushed.borrow().is_empty());
}

#[test]
fn history_failure_still_focuses() {
    let page = FakePage::with_ids(&["about"]);
    let scroll = SmoothScroll::new(Box::new(page.clone()), Rc::new(RefusingHistory), false);
    assert_eq!(scroll.anchor_clicked("#about"), AnchorOutcome::Handled);
    assert_eq!(page.log().last().map(String::as_str), Some("focus about"));
}
