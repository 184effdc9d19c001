//! Reply Tests
//!
//! Tests for reply formatting and the Command helpers.

use bytes::Bytes;
use respcli::protocol::{Command, Reply};

fn b(s: &str) -> Option<Bytes> {
    Some(Bytes::copy_from_slice(s.as_bytes()))
}

// =============================================================================
// Formatting Tests
// =============================================================================

#[test]
fn test_format_scalar_null() {
    assert_eq!(Reply::Scalar(None).format(), vec!["(nil)"]);
}

#[test]
fn test_format_scalar_text() {
    assert_eq!(Reply::scalar("OK").format(), vec!["OK"]);
}

#[test]
fn test_format_scalar_empty_is_not_nil() {
    assert_eq!(Reply::scalar("").format(), vec![""]);
}

#[test]
fn test_format_aggregate_null() {
    assert_eq!(Reply::Aggregate(None).format(), vec!["(nil)"]);
}

#[test]
fn test_format_aggregate_empty() {
    assert_eq!(
        Reply::Aggregate(Some(vec![])).format(),
        vec!["(empty list or set)"]
    );
}

#[test]
fn test_format_aggregate_elements() {
    let reply = Reply::Aggregate(Some(vec![None, b("foo"), b("")]));
    assert_eq!(reply.format(), vec!["0) (nil)", "1) \"foo\"", "2) \"\""]);
}

#[test]
fn test_format_index_past_ten() {
    let elements: Vec<Option<Bytes>> = (0..12).map(|i| b(&i.to_string())).collect();
    let lines = Reply::Aggregate(Some(elements)).format();
    assert_eq!(lines.len(), 12);
    assert_eq!(lines[11], "11) \"11\"");
}

#[test]
fn test_format_invalid_utf8_is_lossy() {
    let reply = Reply::Scalar(Some(Bytes::from_static(&[b'a', 0xFF, b'b'])));
    assert_eq!(reply.format(), vec!["a\u{FFFD}b"]);
}

#[test]
fn test_format_is_deterministic() {
    let reply = Reply::Aggregate(Some(vec![b("x"), None]));
    assert_eq!(reply.format(), reply.clone().format());
    assert_eq!(reply.format(), reply.format());
}

#[test]
fn test_display_joins_lines() {
    let reply = Reply::Aggregate(Some(vec![None, b("foo")]));
    assert_eq!(reply.to_string(), "0) (nil)\n1) \"foo\"");
}

#[test]
fn test_is_null() {
    assert!(Reply::Scalar(None).is_null());
    assert!(Reply::Aggregate(None).is_null());
    assert!(!Reply::scalar("").is_null());
    assert!(!Reply::Aggregate(Some(vec![])).is_null());
}

// =============================================================================
// Command Tests
// =============================================================================

#[test]
fn test_command_parts_order() {
    let cmd = Command::with_args("SET", ["foo", "bar"]);
    let parts: Vec<&[u8]> = cmd.parts().map(|p| &p[..]).collect();
    assert_eq!(parts, vec![&b"SET"[..], &b"foo"[..], &b"bar"[..]]);
    assert_eq!(cmd.part_count(), 3);
}

#[test]
fn test_parse_line_splits_whitespace() {
    let cmd = Command::parse_line(b"  set\tfoo   bar \r\n").unwrap();
    assert_eq!(cmd, Command::new("set").arg("foo").arg("bar"));
}

#[test]
fn test_parse_line_blank() {
    assert!(Command::parse_line(b"").is_none());
    assert!(Command::parse_line(b"   \t\r\n").is_none());
}

#[test]
fn test_command_name_match_ignores_case() {
    let cmd = Command::new("Quit");
    assert!(cmd.is("quit"));
    assert!(cmd.is("QUIT"));
    assert!(!cmd.is("exit"));
}
