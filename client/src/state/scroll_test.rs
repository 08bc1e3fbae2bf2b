use super::*;

#[test]
fn fragment_href_resolves_to_itself() {
    assert_eq!(fragment_selector(Some("#projects")), Some("#projects"));
}

#[test]
fn bare_hash_and_missing_href_fall_through() {
    assert_eq!(fragment_selector(Some("#")), None);
    assert_eq!(fragment_selector(Some("")), None);
    assert_eq!(fragment_selector(None), None);
}

#[test]
fn non_fragment_href_falls_through() {
    assert_eq!(fragment_selector(Some("/about#team")), None);
}
