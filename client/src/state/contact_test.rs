use percent_encoding::percent_decode_str;

use super::*;
use crate::config::{DEFAULT_EMAIL, DEFAULT_SIGNATURE};

// =============================================================
// Helpers
// =============================================================

fn query_param<'a>(link: &'a str, key: &str) -> &'a str {
    let (_, query) = link.split_once('?').expect("query");
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix(key).and_then(|rest| rest.strip_prefix('=')))
        .expect("param present")
}

fn decode(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8().expect("utf8").into_owned()
}

// =============================================================
// encode_component
// =============================================================

#[test]
fn unreserved_characters_pass_through() {
    assert_eq!(encode_component("AZaz09-_.!~*'()"), "AZaz09-_.!~*'()");
}

#[test]
fn reserved_and_whitespace_are_escaped() {
    assert_eq!(encode_component("a b&c=d?e/f#g"), "a%20b%26c%3Dd%3Fe%2Ff%23g");
    assert_eq!(encode_component("\n"), "%0A");
}

#[test]
fn non_ascii_is_utf8_escaped() {
    assert_eq!(encode_component("é"), "%C3%A9");
}

// =============================================================
// mailto
// =============================================================

#[test]
fn fields_are_trimmed() {
    let msg = ContactMessage::new("  Jo \n", "\tHi  ");
    assert_eq!(msg.name, "Jo");
    assert_eq!(msg.message, "Hi");
}

#[test]
fn link_decodes_to_subject_and_signed_body() {
    let link = ContactMessage::new("Jo", "Hi").mailto(DEFAULT_EMAIL, DEFAULT_SIGNATURE);
    assert!(link.starts_with("mailto:jadkhalil266@gmail.com?"));
    assert_eq!(decode(query_param(&link, "subject")), "Contact from Jo");
    assert_eq!(decode(query_param(&link, "body")), "Hi\n\n--\nSent from portfolio");
}

#[test]
fn ampersands_in_fields_do_not_break_the_query() {
    let link = ContactMessage::new("A&B", "x=1&y=2").mailto("me@example.com", "");
    assert_eq!(link.matches('&').count(), 1);
    assert_eq!(decode(query_param(&link, "subject")), "Contact from A&B");
    assert_eq!(decode(query_param(&link, "body")), "x=1&y=2");
}

#[test]
fn empty_form_still_builds_a_link() {
    let link = ContactMessage::new("", "").mailto("me@example.com", DEFAULT_SIGNATURE);
    assert_eq!(decode(query_param(&link, "subject")), "Contact from ");
    assert_eq!(decode(query_param(&link, "body")), DEFAULT_SIGNATURE);
}
