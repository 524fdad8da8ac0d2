//! Destructive line cursor over a document.

use std::collections::VecDeque;

/// Owns the remaining lines of a document and hands them out front to back.
///
/// The cursor is the only holder of line state during a run. Scanning phases
/// borrow it mutably in turn; nothing ever pushes a line back.
#[derive(Debug, Default)]
pub(crate) struct LineCursor {
    lines: VecDeque<String>,
    /// Number of lines popped so far (1-indexed line number of the last pop).
    consumed: usize,
}

impl LineCursor {
    /// Split a document on `\n` without dropping a trailing empty line, so that
    /// joining the lines back with `\n` reproduces the input exactly.
    pub(crate) fn new(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_owned).collect(),
            consumed: 0,
        }
    }

    /// Remove and return the first remaining line.
    pub(crate) fn next(&mut self) -> Option<String> {
        let line = self.lines.pop_front()?;
        self.consumed += 1;
        Some(line)
    }

    /// First remaining line, without consuming it.
    pub(crate) fn peek(&self) -> Option<&str> {
        self.lines.front().map(String::as_str)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate over the remaining lines without consuming them.
    pub(crate) fn remaining(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Line number (1-indexed) of the most recently popped line.
    pub(crate) fn line_number(&self) -> usize {
        self.consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_and_peek() {
        let mut cursor = LineCursor::new("a\nb");
        assert_eq!(cursor.peek(), Some("a"));
        assert_eq!(cursor.next().as_deref(), Some("a"));
        assert_eq!(cursor.line_number(), 1);
        assert_eq!(cursor.peek(), Some("b"));
        assert_eq!(cursor.next().as_deref(), Some("b"));
        assert!(cursor.is_empty());
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.line_number(), 2);
    }

    #[test]
    fn test_trailing_newline_kept() {
        let mut cursor = LineCursor::new("a\n");
        assert_eq!(cursor.next().as_deref(), Some("a"));
        assert_eq!(cursor.next().as_deref(), Some(""));
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_remaining_does_not_consume() {
        let cursor = LineCursor::new("x\ny\nz");
        assert_eq!(cursor.remaining().collect::<Vec<_>>(), vec!["x", "y", "z"]);
        assert_eq!(cursor.peek(), Some("x"));
    }
}
