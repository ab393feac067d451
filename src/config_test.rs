#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn empty_override_keeps_defaults() {
    let config = PageConfig::from_json("{}").expect("empty object should parse");
    assert_eq!(config, PageConfig::default());
    assert_eq!(config.storage_key, "theme");
    assert_eq!(config.ease, 0.15);
    assert_eq!(config.reveal_threshold, 0.1);
    assert_eq!(config.reveal_bottom_margin_px, 100.0);
}

#[test]
fn partial_override_replaces_only_named_fields() {
    let config = PageConfig::from_json(r#"{ "ease": 0.3, "contact_email": "me@example.com" }"#)
        .expect("override should parse");
    assert_eq!(config.ease, 0.3);
    assert_eq!(config.contact_email, "me@example.com");
    assert_eq!(config.nav_shadow_threshold_px, 100.0);
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = PageConfig::from_json("{ ease: ").expect_err("should fail");
    assert!(matches!(err, PageError::Config(_)));
}

#[test]
fn zero_ease_is_rejected() {
    let err = PageConfig::from_json(r#"{ "ease": 0 }"#).expect_err("should fail");
    assert!(matches!(err, PageError::InvalidConfig { field: "ease", .. }));
}

#[test]
fn full_ease_is_allowed() {
    let config = PageConfig::from_json(r#"{ "ease": 1.0 }"#).expect("ease of 1 snaps immediately");
    assert_eq!(config.ease, 1.0);
}

#[test]
fn threshold_above_one_is_rejected() {
    let err = PageConfig::from_json(r#"{ "reveal_threshold": 1.5 }"#).expect_err("should fail");
    assert!(matches!(err, PageError::InvalidConfig { field: "reveal_threshold", .. }));
}

#[test]
fn negative_margin_is_rejected() {
    let err = PageConfig::from_json(r#"{ "reveal_bottom_margin_px": -5 }"#).expect_err("should fail");
    assert!(matches!(err, PageError::InvalidConfig { field: "reveal_bottom_margin_px", .. }));
}

#[test]
fn blank_storage_key_is_rejected() {
    let err = PageConfig::from_json(r#"{ "storage_key": "  " }"#).expect_err("should fail");
    assert!(matches!(err, PageError::InvalidConfig { field: "storage_key", .. }));
}

#[test]
fn log_level_parses_case_insensitively() {
    let config = PageConfig::from_json(r#"{ "log_level": "DEBUG" }"#).expect("level should parse");
    assert_eq!(config.level().expect("valid level"), log::Level::Debug);
}

#[test]
fn unknown_log_level_is_rejected() {
    let err = PageConfig::from_json(r#"{ "log_level": "chatty" }"#).expect_err("should fail");
    assert!(matches!(err, PageError::InvalidConfig { field: "log_level", .. }));
}
