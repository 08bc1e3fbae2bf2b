use super::*;

#[test]
fn each_key_maps_to_its_shortcut() {
    assert_eq!(resolve("t", None), Some(Shortcut::ToggleTheme));
    assert_eq!(resolve("1", Some("BODY")), Some(Shortcut::OpenFirstProject));
    assert_eq!(resolve("v", Some("DIV")), Some(Shortcut::ToggleVideo));
    assert_eq!(resolve("m", Some("A")), Some(Shortcut::ToggleDrawer));
}

#[test]
fn unknown_and_shifted_keys_are_ignored() {
    assert_eq!(resolve("x", None), None);
    assert_eq!(resolve("T", None), None);
    assert_eq!(resolve(ESCAPE, None), None);
}

#[test]
fn typing_in_fields_suppresses_shortcuts() {
    assert_eq!(resolve("t", Some("INPUT")), None);
    assert_eq!(resolve("m", Some("TEXTAREA")), None);
    assert_eq!(resolve("v", Some("input")), None);
}

#[test]
fn shortcut_table_has_unique_keys() {
    let mut keys = SHORTCUTS.iter().map(|row| row.key).collect::<Vec<_>>();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), SHORTCUTS.len());
}
