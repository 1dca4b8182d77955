use super::*;
use crate::fakes::FakeObserver;
use std::cell::Cell;

#[derive(Clone, Default)]
struct FakeMarks(Rc<RefCell<Vec<usize>>>);

impl RevealHost for FakeMarks {
    fn mark_revealed(&self, target: usize) {
        self.0.borrow_mut().push(target);
    }
}

fn connect(observer: &Rc<FakeObserver>) -> impl FnOnce() -> Result<Rc<dyn ViewportObserver>, EnvError> {
    let observer: Rc<dyn ViewportObserver> = observer.clone();
    move || Ok(observer)
}

#[test]
fn reduced_motion_never_creates_an_observer() {
    let connected = Cell::new(false);
    let reveal = AnimationObserver::activate(Box::new(FakeMarks::default()), 3, true, || {
        connected.set(true);
        Ok(Rc::new(FakeObserver::default()) as Rc<dyn ViewportObserver>)
    });
    assert!(reveal.is_none());
    assert!(!connected.get());
}

#[test]
fn failed_connect_disables_reveal() {
    let reveal = AnimationObserver::activate(Box::new(FakeMarks::default()), 3, false, || {
        Err(EnvError::Dom("SyntaxError: rootMargin".to_owned()))
    });
    assert!(reveal.is_none());
}

#[test]
fn observes_every_target() {
    let observer = Rc::new(FakeObserver::default());
    let _reveal = AnimationObserver::activate(Box::new(FakeMarks::default()), 3, false, connect(&observer));
    assert_eq!(observer.observed.borrow().iter().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
}

#[test]
fn intersecting_entries_are_revealed_once() {
    let marks = FakeMarks::default();
    let observer = Rc::new(FakeObserver::default());
    let reveal = AnimationObserver::activate(Box::new(marks.clone()), 3, false, connect(&observer)).expect("active");

    reveal.handle_entries(&[Intersection::entering(1), Intersection::leaving(2)]);
    reveal.handle_entries(&[Intersection::entering(1)]);

    assert_eq!(*marks.0.borrow(), vec![1]);
    assert!(reveal.is_revealed(1));
    assert!(!reveal.is_revealed(2));
    assert!(!observer.is_observing(1));
    assert!(observer.is_observing(2));
}

#[test]
fn leaving_after_reveal_keeps_it_revealed() {
    let marks = FakeMarks::default();
    let observer = Rc::new(FakeObserver::default());
    let reveal = AnimationObserver::activate(Box::new(marks.clone()), 1, false, connect(&observer)).expect("active");
    reveal.handle_entries(&[Intersection::entering(0)]);
    reveal.handle_entries(&[Intersection::leaving(0)]);
    assert!(reveal.is_revealed(0));
    assert_eq!(marks.0.borrow().len(), 1);
}

#[test]
fn stylesheet_uses_given_duration() {
    let css = reveal_stylesheet(600);
    assert!(css.contains("transition: opacity 600ms ease, transform 600ms ease;"));
    assert!(css.contains(".animate-in {"));
    assert!(css.contains("@media (prefers-reduced-motion: reduce)"));
    assert!(css.starts_with(".section, .project-card, .timeline-item {"));
}
