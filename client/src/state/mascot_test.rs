#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Debounce
// =============================================================

#[test]
fn starts_idle() {
    let mascot = Mascot::default();
    assert_eq!(mascot.state(), MascotState::Idle);
    assert!(!mascot.has_played_on_load());
}

#[test]
fn request_enters_active_with_expiry() {
    let mut mascot = Mascot::default();
    assert!(mascot.request(TriggerSource::HashChange, 1000.0, 800));
    assert_eq!(mascot.state(), MascotState::Active { until_ms: 1800.0 });
}

#[test]
fn overlapping_requests_produce_one_cycle() {
    let mut mascot = Mascot::default();
    let mut cycles = 0;
    if mascot.request(TriggerSource::HashChange, 0.0, 800) {
        cycles += 1;
    }
    if mascot.request(TriggerSource::PopState, 100.0, 800) {
        cycles += 1;
    }
    assert_eq!(cycles, 1);
    assert_eq!(mascot.state(), MascotState::Active { until_ms: 800.0 });
    assert!(mascot.finish());
    assert!(!mascot.finish());
}

#[test]
fn request_after_finish_starts_new_cycle() {
    let mut mascot = Mascot::default();
    mascot.request(TriggerSource::BrandClick, 0.0, 800);
    mascot.finish();
    assert!(mascot.request(TriggerSource::BrandClick, 900.0, 800));
}

// =============================================================
// Load play and hero visibility
// =============================================================

#[test]
fn load_play_happens_once() {
    let mut mascot = Mascot::default();
    assert!(mascot.request(TriggerSource::Load, 500.0, 1000));
    assert_eq!(mascot.state(), MascotState::Active { until_ms: 1500.0 });
    mascot.finish();
    assert!(!mascot.request(TriggerSource::Load, 2000.0, 1000));
    assert!(mascot.has_played_on_load());
}

#[test]
fn load_play_swallowed_by_debounce_still_counts() {
    let mut mascot = Mascot::default();
    mascot.request(TriggerSource::HashChange, 0.0, 800);
    assert!(!mascot.request(TriggerSource::Load, 500.0, 1000));
    assert!(mascot.has_played_on_load());
}

#[test]
fn hero_visibility_ignored_before_load_play() {
    let mut mascot = Mascot::default();
    assert!(!mascot.request(TriggerSource::HeroVisible, 0.0, 800));
    assert_eq!(mascot.state(), MascotState::Idle);
}

#[test]
fn hero_visibility_accepted_after_load_play() {
    let mut mascot = Mascot::default();
    mascot.request(TriggerSource::Load, 500.0, 1000);
    mascot.finish();
    assert!(mascot.request(TriggerSource::HeroVisible, 3000.0, 800));
}

#[test]
fn other_sources_do_not_wait_for_load_play() {
    let mascot = Mascot::default();
    for source in [TriggerSource::Load, TriggerSource::HashChange, TriggerSource::PopState, TriggerSource::BrandClick] {
        assert!(mascot.accepts(source), "{source:?}");
    }
}

// =============================================================
// Hash matching
// =============================================================

#[test]
fn top_hashes() {
    assert!(is_top_hash(""));
    assert!(is_top_hash("#hero"));
    assert!(!is_top_hash("#projects"));
    assert!(!is_top_hash("#"));
}
