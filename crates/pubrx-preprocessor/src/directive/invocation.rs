//! Directive invocation collection.
//!
//! Turns the current line plus whatever the cursor yields next into one
//! [`DirectiveInvocation`]: name, parameters and body.

use crate::cursor::LineCursor;
use crate::error::PreprocessError;
use crate::scanner::{end_marker_matches, scan_end, scan_start};

use super::params::{Parameters, parse_parameter};

/// One directive (or plain line) ready for rendering.
///
/// Lines without a start-directive produce an invocation with no name whose
/// body is the line itself.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DirectiveInvocation {
    /// Directive name from `///name`, if the line started a directive.
    pub name: Option<String>,
    /// Parameters from the `:key value` lines below the start line.
    pub parameters: Parameters,
    /// Body text; multi-line bodies are joined with `\n`.
    pub body: String,
    /// Line number (1-indexed) of the start line.
    pub line: usize,
}

/// Collection phases for a single invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Looking at the current line for a start-directive.
    ScanningForDirective,
    /// Consuming `:key value` lines.
    CollectingParameters,
    /// Body is exactly the next line.
    CollectingSingleLineBody,
    /// Body runs until the matching end-directive line.
    AwaitingTerminator,
    /// Invocation complete, ready for dispatch.
    Dispatched,
}

/// Build the invocation that starts at `line`, consuming parameter and body
/// lines from the cursor as needed.
pub(crate) fn collect_invocation(
    line: String,
    cursor: &mut LineCursor,
) -> Result<DirectiveInvocation, PreprocessError> {
    let mut invocation = DirectiveInvocation {
        line: cursor.line_number(),
        ..DirectiveInvocation::default()
    };
    let mut body_lines: Vec<String> = Vec::new();
    let mut state = ScanState::ScanningForDirective;

    loop {
        state = match state {
            ScanState::ScanningForDirective => {
                if let Some(name) = scan_start(&line) {
                    invocation.name = Some(name.to_owned());
                    ScanState::CollectingParameters
                } else {
                    body_lines.push(line.clone());
                    ScanState::Dispatched
                }
            }
            ScanState::CollectingParameters => {
                let is_parameter = cursor.peek().is_some_and(|next| next.starts_with(':'));
                if is_parameter {
                    if let Some(param_line) = cursor.next() {
                        let (key, value) = parse_parameter(&param_line, cursor.line_number())?;
                        invocation.parameters.insert(key, value);
                    }
                    ScanState::CollectingParameters
                } else {
                    let name = invocation.name.as_deref().unwrap_or_default();
                    if end_marker_matches(cursor, name) {
                        ScanState::AwaitingTerminator
                    } else {
                        ScanState::CollectingSingleLineBody
                    }
                }
            }
            ScanState::CollectingSingleLineBody => {
                body_lines.extend(cursor.next());
                ScanState::Dispatched
            }
            ScanState::AwaitingTerminator => {
                if cursor.is_empty() {
                    ScanState::Dispatched
                } else if cursor.peek().is_some_and(|next| scan_end(next).is_some()) {
                    // terminator is consumed, not emitted
                    cursor.next();
                    ScanState::Dispatched
                } else {
                    body_lines.extend(cursor.next());
                    ScanState::AwaitingTerminator
                }
            }
            ScanState::Dispatched => break,
        };
    }

    invocation.body = body_lines.join("\n");
    Ok(invocation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn collect(text: &str) -> (DirectiveInvocation, LineCursor) {
        let mut cursor = LineCursor::new(text);
        let first = cursor.next().unwrap();
        let invocation = collect_invocation(first, &mut cursor).unwrap();
        (invocation, cursor)
    }

    #[test]
    fn test_non_directive_text() {
        let (invocation, cursor) = collect("content\nnot_content");
        assert_eq!(invocation.name, None);
        assert!(invocation.parameters.is_empty());
        assert_eq!(invocation.body, "content");
        assert_eq!(cursor.peek(), Some("not_content"));
    }

    #[test]
    fn test_directive_single_line_body() {
        let (invocation, cursor) = collect("///sidebar\ncontent\nnot_content");
        assert_eq!(invocation.name.as_deref(), Some("sidebar"));
        assert_eq!(invocation.body, "content");
        assert_eq!(invocation.line, 1);
        assert_eq!(cursor.peek(), Some("not_content"));
    }

    #[test]
    fn test_parameters() {
        let (invocation, _) = collect("///directive\n:parameter thing\ncontent");
        assert_eq!(invocation.name.as_deref(), Some("directive"));
        assert_eq!(invocation.parameters.get("parameter"), Some("thing"));
        assert_eq!(invocation.body, "content");
    }

    #[test]
    fn test_parameters_stop_at_first_plain_line() {
        let (invocation, cursor) = collect("///sidebar\n:title Foo\nbody\n:not a param");
        assert_eq!(invocation.parameters.len(), 1);
        assert_eq!(invocation.body, "body");
        assert_eq!(cursor.peek(), Some(":not a param"));
    }

    #[test]
    fn test_multi_line_body_with_end_marker() {
        let (invocation, cursor) = collect("///sidebar\ncontent\nmore content\n\\\\\\sidebar");
        assert_eq!(invocation.body, "content\nmore content");
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_terminator_is_discarded_and_rest_kept() {
        let (invocation, cursor) = collect("///sidebar\na\nb\n\\\\\\sidebar\nafter");
        assert_eq!(invocation.body, "a\nb");
        assert_eq!(cursor.remaining().collect::<Vec<_>>(), vec!["after"]);
    }

    #[test]
    fn test_other_end_directive_limits_body() {
        let (invocation, cursor) = collect("///sidebar\ncontent\nmore content\n\\\\\\other");
        assert_eq!(invocation.body, "content");
        assert_eq!(cursor.peek(), Some("more content"));
    }

    #[test]
    fn test_other_start_directive_limits_body() {
        let (invocation, _) = collect("///sidebar\ncontent\nmore content\n///sidebar");
        assert_eq!(invocation.body, "content");
    }

    #[test]
    fn test_empty_multi_line_body() {
        let (invocation, cursor) = collect("///table\n\\\\\\table\nafter");
        assert_eq!(invocation.body, "");
        assert_eq!(cursor.peek(), Some("after"));
    }

    #[test]
    fn test_parameters_then_multi_line_body() {
        let (invocation, _) = collect("///table\n:caption Results\n| a |\n| b |\n\\\\\\table");
        assert_eq!(invocation.parameters.get("caption"), Some("Results"));
        assert_eq!(invocation.body, "| a |\n| b |");
    }

    #[test]
    fn test_directive_at_end_of_document() {
        let (invocation, cursor) = collect("///sidebar");
        assert_eq!(invocation.name.as_deref(), Some("sidebar"));
        assert_eq!(invocation.body, "");
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_malformed_parameter() {
        let mut cursor = LineCursor::new("///sidebar\n:title\nbody");
        let first = cursor.next().unwrap();
        let err = collect_invocation(first, &mut cursor).unwrap_err();
        assert!(matches!(
            err,
            PreprocessError::MalformedParameter { line: 2, .. }
        ));
    }
}
