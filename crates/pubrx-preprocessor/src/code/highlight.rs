//! Syntax highlighting of extracted code.

use tracing::warn;

use super::language::Language;
use crate::util::escape_html;

/// Error from a highlighting collaborator.
#[derive(Debug, thiserror::Error)]
#[error("failed to highlight {language} code: {message}")]
pub struct HighlightError {
    /// Language that was requested.
    pub language: Language,
    /// Highlighter-specific description.
    pub message: String,
}

impl HighlightError {
    /// Create a new highlight error.
    pub fn new(language: Language, message: impl Into<String>) -> Self {
        Self {
            language,
            message: message.into(),
        }
    }
}

/// Turns a code snippet into an HTML fragment.
///
/// The preprocessor calls this once per `///code` directive, after slicing.
pub trait Highlight {
    /// Render `code` as highlighted HTML.
    ///
    /// # Errors
    ///
    /// Returns [`HighlightError`] if the snippet cannot be rendered.
    fn highlight(
        &mut self,
        code: &str,
        language: Language,
        line_numbers: bool,
    ) -> Result<String, HighlightError>;
}

/// Tree-sitter highlighter backed by `arborium`.
///
/// Erb and Haml have no grammar and are rendered as escaped text, as is
/// anything detected as [`Language::Text`].
pub struct ArboriumHighlighter {
    inner: arborium::Highlighter,
}

impl ArboriumHighlighter {
    /// Create a highlighter with all bundled grammars.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: arborium::Highlighter::new(),
        }
    }

    fn grammar(language: Language) -> Option<&'static str> {
        match language {
            Language::Ruby => Some("ruby"),
            Language::JavaScript => Some("javascript"),
            Language::Html => Some("html"),
            Language::Css => Some("css"),
            Language::Yaml => Some("yaml"),
            Language::Erb | Language::Haml | Language::Text => None,
        }
    }
}

impl Default for ArboriumHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlight for ArboriumHighlighter {
    fn highlight(
        &mut self,
        code: &str,
        language: Language,
        line_numbers: bool,
    ) -> Result<String, HighlightError> {
        let body = match Self::grammar(language) {
            Some(grammar) => match self.inner.highlight(grammar, code) {
                Ok(html) => html,
                Err(_) => {
                    warn!(%language, "Highlighting failed, rendering as plain text");
                    escape_html(code)
                }
            },
            None => escape_html(code),
        };
        Ok(wrap_code(&body, language, code.lines().count(), line_numbers))
    }
}

/// Wrap highlighted HTML in the code block container.
///
/// With line numbers, a gutter column sits beside the code.
pub(crate) fn wrap_code(
    html: &str,
    language: Language,
    line_count: usize,
    line_numbers: bool,
) -> String {
    let code = format!(
        r#"<pre><code class="language-{language}">{html}</code></pre>"#
    );
    if !line_numbers {
        return format!(r#"<div class="code">{code}</div>"#);
    }

    let gutter = (1..=line_count.max(1))
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        r#"<div class="code"><table class="code-table"><tr><td class="line-numbers"><pre>{gutter}</pre></td><td class="code-lines">{code}</td></tr></table></div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wrap_without_line_numbers() {
        assert_eq!(
            wrap_code("x = 1", Language::Ruby, 1, false),
            r#"<div class="code"><pre><code class="language-ruby">x = 1</code></pre></div>"#
        );
    }

    #[test]
    fn test_wrap_with_line_numbers() {
        let html = wrap_code("a\nb\nc", Language::Text, 3, true);
        assert!(html.contains(r#"<td class="line-numbers"><pre>1
2
3</pre></td>"#));
        assert!(html.contains(r#"<code class="language-text">a
b
c</code>"#));
    }

    #[test]
    fn test_empty_code_still_numbers_one_line() {
        let html = wrap_code("", Language::Text, 0, true);
        assert!(html.contains(r#"<td class="line-numbers"><pre>1</pre></td>"#));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut hl = ArboriumHighlighter::new();
        let html = hl.highlight("<b>", Language::Text, false).unwrap();
        assert_eq!(
            html,
            r#"<div class="code"><pre><code class="language-text">&lt;b&gt;</code></pre></div>"#
        );
    }

    #[test]
    fn test_erb_has_no_grammar() {
        let mut hl = ArboriumHighlighter::new();
        let html = hl
            .highlight("<%= @user.name %>", Language::Erb, false)
            .unwrap();
        assert!(html.contains("&lt;%= @user.name %&gt;"));
        assert!(html.contains("language-erb"));
    }

    #[test]
    fn test_ruby_keeps_source_text() {
        let mut hl = ArboriumHighlighter::new();
        let html = hl.highlight("def name\nend", Language::Ruby, true).unwrap();
        assert!(html.starts_with(r#"<div class="code">"#));
        assert!(html.contains("language-ruby"));
        assert!(html.contains("name"));
    }

    #[test]
    fn test_error_display() {
        let err = HighlightError::new(Language::Css, "grammar panicked");
        assert_eq!(
            err.to_string(),
            "failed to highlight css code: grammar panicked"
        );
    }
}
