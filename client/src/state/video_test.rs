use super::*;

#[test]
fn affordance_starts_visible() {
    assert!(PlayOverlay::default().is_visible());
}

#[test]
fn clicking_affordance_hides_it() {
    let mut overlay = PlayOverlay::default();
    assert_eq!(overlay.on(PlaybackEvent::OverlayClicked), "true");
    assert!(!overlay.is_visible());
}

#[test]
fn pause_shows_and_play_hides() {
    let mut overlay = PlayOverlay::default();
    overlay.on(PlaybackEvent::Played);
    assert!(!overlay.is_visible());
    assert_eq!(overlay.on(PlaybackEvent::Paused), "false");
    assert!(overlay.is_visible());
    overlay.on(PlaybackEvent::Played);
    assert!(!overlay.is_visible());
}

#[test]
fn shortcut_toggles_playback() {
    assert_eq!(VideoCommand::toggle(true), VideoCommand::Play);
    assert_eq!(VideoCommand::toggle(false), VideoCommand::Pause);
}
