//! Preprocessing error types.
//!
//! Every variant is fatal for the document being processed: the run stops and
//! no partial output is returned. Unknown directive names are not errors, they
//! pass through unchanged.

use pubrx_vcs::SourceError;

use crate::code::HighlightError;

/// Preprocessing error.
#[derive(Debug, thiserror::Error)]
pub enum PreprocessError {
    /// A line after a directive starts with `:` but has no `key value` shape.
    #[error("line {line}: malformed parameter {text:?} (expected `:key value`)")]
    MalformedParameter {
        /// Line number (1-indexed).
        line: usize,
        /// The offending line.
        text: String,
    },

    /// A directive was used without a parameter it cannot render without.
    #[error("line {line}: ///{directive} requires a :{name} parameter")]
    MissingParameter {
        /// Line number (1-indexed) of the directive start.
        line: usize,
        /// Directive name.
        directive: &'static str,
        /// Parameter name.
        name: &'static str,
    },

    /// A parameter value could not be interpreted.
    #[error("line {line}: invalid :{name} value {value:?}")]
    InvalidParameter {
        /// Line number (1-indexed) of the directive start.
        line: usize,
        /// Parameter name.
        name: &'static str,
        /// The value as written.
        value: String,
    },

    /// A marker or elide token did not occur exactly twice in the code.
    #[error("{policy} token {token:?} found {found} time(s) in {location}, expected exactly 2")]
    TokenNotPaired {
        /// `marker` or `elide`.
        policy: &'static str,
        /// The full token searched for (e.g. `//##setup`).
        token: String,
        /// Number of occurrences found.
        found: usize,
        /// Where the code came from (`file (branch)` or `inline code`).
        location: String,
    },

    /// A `:line` or `:lines` selection falls outside the code.
    #[error("line selection {selection} is outside {location} ({available} lines)")]
    LineOutOfRange {
        /// The selection as requested.
        selection: String,
        /// Number of lines available.
        available: usize,
        /// Where the code came from.
        location: String,
    },

    /// The source retrieval collaborator failed.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// The highlighting collaborator failed.
    #[error(transparent)]
    Highlight(#[from] HighlightError),
}
