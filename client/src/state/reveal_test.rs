use super::*;

// =============================================================
// OneShot
// =============================================================

#[test]
fn first_visit_triggers() {
    let mut tracker = OneShot::new(3);
    assert_eq!(tracker.state(1), Some(Visit::Unobserved));
    assert!(tracker.visit(1));
    assert_eq!(tracker.state(1), Some(Visit::Triggered));
}

#[test]
fn repeat_visits_are_noops() {
    let mut tracker = OneShot::new(2);
    assert!(tracker.visit(0));
    assert!(!tracker.visit(0));
    assert!(!tracker.visit(0));
    assert_eq!(tracker.triggered_count(), 1);
}

#[test]
fn elements_are_tracked_independently() {
    let mut tracker = OneShot::new(3);
    assert!(tracker.visit(2));
    assert!(tracker.visit(0));
    assert_eq!(tracker.state(1), Some(Visit::Unobserved));
    assert_eq!(tracker.triggered_count(), 2);
}

#[test]
fn unknown_index_is_ignored() {
    let mut tracker = OneShot::new(1);
    assert!(!tracker.visit(5));
    assert_eq!(tracker.state(5), None);
}

// =============================================================
// skill_percent
// =============================================================

#[test]
fn plain_number_parses() {
    assert_eq!(skill_percent(Some("75")), 75);
    assert_eq!(fill_width(skill_percent(Some("75"))), "75%");
}

#[test]
fn leading_integer_prefix_is_used() {
    assert_eq!(skill_percent(Some("  60% ")), 60);
    assert_eq!(skill_percent(Some("42.9")), 42);
    assert_eq!(skill_percent(Some("+30")), 30);
}

#[test]
fn absent_or_non_numeric_is_zero() {
    assert_eq!(skill_percent(None), 0);
    assert_eq!(skill_percent(Some("")), 0);
    assert_eq!(skill_percent(Some("abc")), 0);
    assert_eq!(skill_percent(Some("-")), 0);
}

#[test]
fn out_of_range_values_are_clamped() {
    assert_eq!(skill_percent(Some("-20")), 0);
    assert_eq!(skill_percent(Some("250")), 100);
    assert_eq!(skill_percent(Some("99999999999999999999")), 100);
}

#[test]
fn skill_bar_fills_exactly_once() {
    let mut tracker = OneShot::new(1);
    let mut fills = Vec::new();
    for _ in 0..3 {
        if tracker.visit(0) {
            fills.push(fill_width(skill_percent(Some("75"))));
        }
    }
    assert_eq!(fills, vec!["75%".to_owned()]);
}
