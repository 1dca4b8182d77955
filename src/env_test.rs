use super::*;

#[test]
fn reduced_motion_scrolls_instantly() {
    assert_eq!(ScrollMotion::for_reduced_motion(true), ScrollMotion::Instant);
    assert_eq!(ScrollMotion::for_reduced_motion(false), ScrollMotion::Smooth);
}

#[test]
fn intersection_constructors_set_flag() {
    assert!(Intersection::entering(3).is_intersecting);
    assert!(!Intersection::leaving(3).is_intersecting);
    assert_eq!(Intersection::leaving(3).target, 3);
}

#[test]
fn env_error_messages_name_the_capability() {
    assert_eq!(
        EnvError::Storage("QuotaExceededError".to_owned()).to_string(),
        "storage unavailable: QuotaExceededError"
    );
    assert_eq!(EnvError::History("x".to_owned()).to_string(), "history update failed: x");
}
