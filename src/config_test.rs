use super::*;

#[test]
fn defaults_match_shipped_stylesheet() {
    let config = SiteConfig::default();
    assert_eq!(config.storage_key, "theme");
    assert_eq!(config.transition_ms, 300);
    assert_eq!(config.feedback_ms, 5000);
    assert_eq!(config.color_hint(Theme::Dark), "#0d1117");
    assert_eq!(config.color_hint(Theme::Light), "#ffffff");
    assert_eq!(config.fallback_theme(), Theme::Dark);
}

#[test]
fn partial_json_keeps_other_defaults() {
    let config = SiteConfig::from_json(r#"{ "transition_ms": 450, "pending_label": "Wait" }"#).expect("valid config");
    assert_eq!(config.transition_ms, 450);
    assert_eq!(config.pending_label, "Wait");
    assert_eq!(config.feedback_ms, 5000);
    assert_eq!(config.storage_key, "theme");
}

#[test]
fn rejects_unknown_default_theme() {
    let err = SiteConfig::from_json(r#"{ "default_theme": "sepia" }"#).expect_err("sepia is not a theme");
    assert!(matches!(err, ConfigError::Invalid { field: "default_theme", .. }));
}

#[test]
fn rejects_threshold_out_of_range() {
    let err = SiteConfig::from_json(r#"{ "reveal_threshold": 1.5 }"#).expect_err("threshold above 1");
    assert!(matches!(err, ConfigError::Invalid { field: "reveal_threshold", .. }));
}

#[test]
fn rejects_blank_storage_key() {
    let err = SiteConfig::from_json(r#"{ "storage_key": "  " }"#).expect_err("blank key");
    assert!(matches!(err, ConfigError::Invalid { field: "storage_key", .. }));
}

#[test]
fn malformed_json_is_a_json_error() {
    let err = SiteConfig::from_json("{ nope").expect_err("malformed");
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn resolve_without_block_uses_defaults() {
    let (config, err) = SiteConfig::resolve(None);
    assert_eq!(config, SiteConfig::default());
    assert!(err.is_none());

    let (config, err) = SiteConfig::resolve(Some("   "));
    assert_eq!(config, SiteConfig::default());
    assert!(err.is_none());
}

#[test]
fn resolve_reports_bad_block_and_falls_back() {
    let (config, err) = SiteConfig::resolve(Some("[1, 2]"));
    assert_eq!(config, SiteConfig::default());
    assert!(matches!(err, Some(ConfigError::Json(_))));
}

#[test]
fn resolve_accepts_valid_block() {
    let (config, err) = SiteConfig::resolve(Some(r#"{ "feedback_ms": 8000 }"#));
    assert_eq!(config.feedback_ms, 8000);
    assert!(err.is_none());
}

#[test]
fn log_level_parses_case_insensitively() {
    let config = SiteConfig::from_json(r#"{ "log_level": "DEBUG" }"#).expect("valid level");
    assert_eq!(config.log_level(), log::Level::Debug);
}

#[test]
fn light_default_theme_is_honored() {
    let config = SiteConfig::from_json(r#"{ "default_theme": "light" }"#).expect("valid theme");
    assert_eq!(config.fallback_theme(), Theme::Light);
}
