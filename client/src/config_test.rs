#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_config_matches_shipped_site() {
    let config = SiteConfig::default();
    assert_eq!(config.phrases.len(), 5);
    assert_eq!(config.phrases[0], "mobile apps.");
    assert_eq!(config.typing, TypingCadence { type_ms: 80, delete_ms: 40, hold_ms: 1200 });
    assert_eq!(config.email, DEFAULT_EMAIL);
    assert_eq!(config.copy_confirm_ms, 1500);
    assert_eq!(config.mascot.duration_ms, 800);
    assert_eq!(config.mascot.load_duration_ms, 1000);
    assert_eq!(config.particles.min_count, 12);
}

// =============================================================
// JSON overrides
// =============================================================

#[test]
fn blank_override_yields_defaults() {
    let config = SiteConfig::from_json("  \n").expect("blank is fine");
    assert_eq!(config, SiteConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = SiteConfig::from_json(r#"{"phrases":["a","bb"],"typing":{"hold_ms":10}}"#).expect("valid");
    assert_eq!(config.phrases, vec!["a".to_owned(), "bb".to_owned()]);
    assert_eq!(config.typing.hold_ms, 10);
    assert_eq!(config.typing.type_ms, 80);
    assert_eq!(config.email, DEFAULT_EMAIL);
}

#[test]
fn malformed_override_is_a_config_error() {
    let err = SiteConfig::from_json("{phrases:").expect_err("invalid json");
    assert!(matches!(err, UiError::Config(_)));
    assert!(!err.is_missing());
}

#[test]
fn wrong_shape_is_a_config_error() {
    assert!(SiteConfig::from_json(r#"{"copy_confirm_ms":"soon"}"#).is_err());
}

// =============================================================
// Particle density bounds
// =============================================================

#[test]
fn tiny_area_per_particle_is_rejected() {
    let err = SiteConfig::from_json(r#"{"particles":{"area_per_particle":1e-12}}"#).expect_err("too dense");
    assert!(matches!(err, UiError::OutOfRange("particles.area_per_particle")));
}

#[test]
fn oversized_particle_floor_is_rejected() {
    let err = SiteConfig::from_json(r#"{"particles":{"min_count":5000000}}"#).expect_err("too many");
    assert!(matches!(err, UiError::OutOfRange("particles.min_count")));
}

#[test]
fn boundary_particle_density_is_accepted() {
    let config = SiteConfig::from_json(r#"{"particles":{"area_per_particle":1.0,"min_count":1000}}"#).expect("in range");
    assert_eq!(config.particles.area_per_particle, MIN_AREA_PER_PARTICLE);
    assert_eq!(config.particles.min_count, MAX_PARTICLE_FLOOR);
}

// =============================================================
// Page email
// =============================================================

#[test]
fn page_email_replaces_configured_address() {
    let config = SiteConfig::default().with_page_email(Some("  me@example.com \n"));
    assert_eq!(config.email, "me@example.com");
}

#[test]
fn blank_or_missing_page_email_keeps_configured_address() {
    assert_eq!(SiteConfig::default().with_page_email(Some("   ")).email, DEFAULT_EMAIL);
    assert_eq!(SiteConfig::default().with_page_email(None).email, DEFAULT_EMAIL);
}
