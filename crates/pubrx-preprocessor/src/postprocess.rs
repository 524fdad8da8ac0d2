//! Cleanup of HTML produced from preprocessed documents.
//!
//! The markdown converter wraps a lone closing `</div>` in a paragraph and
//! keeps `:` in footnote anchors, which some ebook readers reject.

use std::sync::LazyLock;

use regex::Regex;

use crate::replacements::Replacements;

static STRAY_PARAGRAPHS: LazyLock<Replacements> =
    LazyLock::new(|| Replacements::from_pairs(&[("<p></div></p>", "</div>")]));

static ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"id="([^":]+):(\d+)""#).unwrap());

static HREF_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r##"href="#([^":]+):(\d+)""##).unwrap());

/// Post-processor for converted HTML.
///
/// # Example
///
/// ```
/// use pubrx_preprocessor::Postprocessor;
///
/// let html = r##"<p></div></p><sup id="fnref:1"><a href="#fn:1">1</a></sup>"##;
/// assert_eq!(
///     Postprocessor::new().process(html),
///     r##"</div><sup id="fnref_1"><a href="#fn_1">1</a></sup>"##
/// );
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Postprocessor;

impl Postprocessor {
    /// Create a new post-processor.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Apply all cleanups to an HTML document.
    #[must_use]
    pub fn process(&self, html: &str) -> String {
        let mut html = html.to_owned();
        STRAY_PARAGRAPHS.apply(&mut html);
        let html = ID_PATTERN.replace_all(&html, r#"id="${1}_${2}""#);
        HREF_PATTERN
            .replace_all(&html, r##"href="#${1}_${2}""##)
            .into_owned()
    }
}
