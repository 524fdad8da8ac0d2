//! Slicing policies that pick the displayed part of a code snippet.

use std::ops::Range;

use crate::error::PreprocessError;

use super::escape::unescape;
use super::language::Language;

/// Which part of the raw code to display.
///
/// Built from directive parameters with precedence marker, elide, line,
/// lines, then everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SlicePolicy<'a> {
    /// Text strictly between two `marker` tokens.
    Marker(&'a str),
    /// Everything except the text between two `elide` tokens, which is
    /// replaced by a caption line.
    Elide { name: &'a str, caption: &'a str },
    /// A single zero-indexed line.
    Line(usize),
    /// A half-open range of zero-indexed lines.
    Lines(Range<usize>),
    /// All lines that are not marker comments.
    All,
}

/// Where the raw code came from, for error messages.
pub(crate) struct Origin<'a> {
    pub(crate) file: Option<&'a str>,
    pub(crate) branch: Option<&'a str>,
}

impl Origin<'_> {
    fn describe(&self) -> String {
        match (self.file, self.branch) {
            (Some(file), Some(branch)) => format!("{file} (branch {branch})"),
            (Some(file), None) => file.to_owned(),
            (None, _) => "inline code".to_owned(),
        }
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Byte offsets of each occurrence of `token` in `raw`.
///
/// Line-comment tokens must end on a name boundary so that `//##setup` is not
/// found inside `//##setup-db`.
fn find_tokens(raw: &str, token: &str, language: Language) -> Vec<usize> {
    let needs_boundary = language.marker_suffix().is_empty();
    raw.match_indices(token)
        .map(|(idx, _)| idx)
        .filter(|&idx| {
            !needs_boundary
                || !raw[idx + token.len()..]
                    .chars()
                    .next()
                    .is_some_and(is_name_char)
        })
        .collect()
}

/// Start offsets of exactly two token occurrences.
fn token_pair(
    raw: &str,
    policy: &'static str,
    name: &str,
    language: Language,
    origin: &Origin<'_>,
) -> Result<(String, usize, usize), PreprocessError> {
    let token = language.marker_token(name);
    let found = find_tokens(raw, &token, language);
    match found[..] {
        [first, second] => Ok((token, first, second)),
        _ => Err(PreprocessError::TokenNotPaired {
            policy,
            token,
            found: found.len(),
            location: origin.describe(),
        }),
    }
}

fn out_of_range(selection: String, available: usize, origin: &Origin<'_>) -> PreprocessError {
    PreprocessError::LineOutOfRange {
        selection,
        available,
        location: origin.describe(),
    }
}

/// Apply a slicing policy to raw code.
pub(crate) fn slice(
    raw: &str,
    policy: &SlicePolicy<'_>,
    language: Language,
    origin: &Origin<'_>,
) -> Result<String, PreprocessError> {
    match policy {
        SlicePolicy::Marker(name) => {
            let (token, first, second) = token_pair(raw, "marker", name, language, origin)?;
            Ok(raw[first + token.len()..second].to_owned())
        }
        SlicePolicy::Elide { name, caption } => {
            let (token, first, second) = token_pair(raw, "elide", name, language, origin)?;
            let prefix = &raw[..first];
            let prefix = prefix.strip_suffix('\n').unwrap_or(prefix);
            let suffix = &raw[second + token.len()..];
            let suffix = suffix.strip_prefix('\n').unwrap_or(suffix);
            Ok(format!("{prefix}\n{caption}\n{suffix}"))
        }
        SlicePolicy::Line(index) => {
            let lines: Vec<&str> = raw.split('\n').collect();
            lines
                .get(*index)
                .map(|line| unescape(line))
                .ok_or_else(|| out_of_range(index.to_string(), lines.len(), origin))
        }
        SlicePolicy::Lines(range) => {
            let lines: Vec<&str> = raw.split('\n').collect();
            if range.start >= lines.len() {
                return Err(out_of_range(
                    format!("{}..{}", range.start, range.end),
                    lines.len(),
                    origin,
                ));
            }
            let end = range.end.min(lines.len());
            Ok(lines[range.start..end]
                .iter()
                .map(|line| unescape(line))
                .collect::<Vec<_>>()
                .join("\n"))
        }
        SlicePolicy::All => {
            let prefix = language.marker_prefix();
            Ok(raw
                .split('\n')
                .filter(|line| !line.trim_start().starts_with(prefix))
                .collect::<Vec<_>>()
                .join("\n"))
        }
    }
}

/// Parse a `:lines` value: `first..last` or `first-last`, half-open.
pub(crate) fn parse_line_range(value: &str) -> Option<Range<usize>> {
    let (first, last) = value
        .split_once("..")
        .or_else(|| value.split_once('-'))?;
    let first: usize = first.trim().parse().ok()?;
    let last: usize = last.trim().parse().ok()?;
    (first <= last).then_some(first..last)
}
