#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_matches_builtin_constants() {
    let cfg = SiteConfig::default();
    assert_eq!(cfg.scroll_threshold_px, 20.0);
    assert_eq!(cfg.section_lookahead_px, 150.0);
    assert_eq!(cfg.reply_delay_ms, 800);
    assert_eq!(cfg.replies.len(), 5);
    assert_eq!(cfg.log_level, log::Level::Info);
}

#[test]
fn empty_object_yields_defaults() {
    let cfg = SiteConfig::from_json("{}").unwrap();
    assert_eq!(cfg, SiteConfig::default());
}

// =============================================================
// Overrides
// =============================================================

#[test]
fn from_json_overrides_individual_fields() {
    let cfg = SiteConfig::from_json(
        r#"{ "scroll_threshold_px": 64, "reply_delay_ms": 250, "log_level": "DEBUG" }"#,
    )
    .unwrap();
    assert_eq!(cfg.scroll_threshold_px, 64.0);
    assert_eq!(cfg.section_lookahead_px, 150.0);
    assert_eq!(cfg.reply_delay_ms, 250);
    assert_eq!(cfg.log_level, log::Level::Debug);
}

#[test]
fn from_json_replaces_reply_list() {
    let cfg = SiteConfig::from_json(r#"{ "replies": ["one", "two"] }"#).unwrap();
    assert_eq!(cfg.replies, vec!["one".to_owned(), "two".to_owned()]);
}

// =============================================================
// Errors
// =============================================================

#[test]
fn from_json_rejects_malformed_document() {
    let err = SiteConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn from_json_rejects_unknown_keys() {
    let err = SiteConfig::from_json(r#"{ "reply_delay": 10 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn from_json_rejects_empty_reply_list() {
    let err = SiteConfig::from_json(r#"{ "replies": [] }"#).unwrap_err();
    assert!(matches!(err, ConfigError::NoReplies));
}

#[test]
fn from_json_rejects_unknown_log_level() {
    let err = SiteConfig::from_json(r#"{ "log_level": "loud" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidLogLevel(ref l) if l == "loud"));
}

#[test]
fn from_json_rejects_negative_distance() {
    let err = SiteConfig::from_json(r#"{ "section_lookahead_px": -1 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidDistance { field: "section_lookahead_px", .. }));
}

// =============================================================
// load()
// =============================================================

#[test]
fn load_without_block_uses_defaults() {
    assert_eq!(SiteConfig::load(None), SiteConfig::default());
    assert_eq!(SiteConfig::load(Some("   \n")), SiteConfig::default());
}

#[test]
fn load_falls_back_to_defaults_on_error() {
    assert_eq!(SiteConfig::load(Some(r#"{ "replies": [] }"#)), SiteConfig::default());
}

#[test]
fn load_applies_valid_block() {
    let cfg = SiteConfig::load(Some(r#"{ "reply_delay_ms": 10 }"#));
    assert_eq!(cfg.reply_delay_ms, 10);
}
