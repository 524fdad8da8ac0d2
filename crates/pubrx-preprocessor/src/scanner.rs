//! Directive boundary detection.
//!
//! A start-directive line contains `///name`, an end-directive line contains
//! `\\\name` (three backslashes). Either may appear anywhere in the line; the
//! first match wins and anything after the name is ignored.

use std::sync::LazyLock;

use regex::Regex;

use crate::cursor::LineCursor;

static START_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"///([A-Za-z0-9_-]+)").unwrap());

static END_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\\\\\([A-Za-z0-9_-]+)").unwrap());

/// Directive name of a start-directive line.
pub(crate) fn scan_start(line: &str) -> Option<&str> {
    START_PATTERN
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Directive name of an end-directive line.
pub(crate) fn scan_end(line: &str) -> Option<&str> {
    END_PATTERN
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Whether the body of directive `name` runs until a matching end line.
///
/// Looks at the cursor's remaining lines without consuming them and stops at
/// the first boundary line: a start-directive means no, an end-directive means
/// yes only if it names the same directive. A document that ends without any
/// boundary also means no.
pub(crate) fn end_marker_matches(cursor: &LineCursor, name: &str) -> bool {
    for line in cursor.remaining() {
        if scan_start(line).is_some() {
            return false;
        }
        if let Some(end) = scan_end(line) {
            return end == name;
        }
    }
    false
}
