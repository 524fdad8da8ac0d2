//! Document preprocessor.
//!
//! Drives the line cursor through a whole document, one invocation at a
//! time, and joins the rendered fragments into the output text.

use std::path::PathBuf;

use pubrx_vcs::{GitRetriever, SourceRetriever};
use tracing::{debug, info};

use crate::code::{ArboriumHighlighter, CodeContext, Highlight, render_code};
use crate::cursor::LineCursor;
use crate::directive::{
    DirectiveInvocation, DirectiveKind, collect_invocation, render_coffeescript_sidebar,
    render_definition, render_interpolation, render_letter, render_sidebar, render_table,
};
use crate::error::PreprocessError;

/// Configuration for the preprocessor.
#[derive(Debug, Clone)]
pub struct PreprocessorConfig {
    /// Repository directory for `///code` directives without `:directory`.
    ///
    /// Default: `.`
    pub default_source_dir: PathBuf,
    /// Whether code gets a line-number gutter when the directive does not say.
    ///
    /// Default: `false`
    pub line_numbers: bool,
}

impl Default for PreprocessorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl PreprocessorConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            default_source_dir: PathBuf::from("."),
            line_numbers: false,
        }
    }

    /// Set the default source directory.
    #[must_use]
    pub fn with_default_source_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.default_source_dir = dir.into();
        self
    }

    /// Set the default line-number setting.
    #[must_use]
    pub fn with_line_numbers(mut self, line_numbers: bool) -> Self {
        self.line_numbers = line_numbers;
        self
    }
}

/// Expands `///name` directives in a document.
///
/// Code is read from git through a [`GitRetriever`] and highlighted with an
/// [`ArboriumHighlighter`] unless other collaborators are supplied.
///
/// # Example
///
/// ```
/// use pubrx_preprocessor::Preprocessor;
///
/// let mut preprocessor = Preprocessor::new();
/// let output = preprocessor
///     .process("Intro\n///definition\n:term REST\nRepresentational State Transfer")
///     .unwrap();
///
/// assert_eq!(
///     output,
///     "Intro\n<div class=\"definition\" markdown=\"1\"><strong>REST</strong> \
///      Representational State Transfer</div>"
/// );
/// ```
pub struct Preprocessor {
    config: PreprocessorConfig,
    retriever: Box<dyn SourceRetriever>,
    highlighter: Box<dyn Highlight>,
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}

impl Preprocessor {
    /// Create a preprocessor with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(PreprocessorConfig::default())
    }

    /// Create a preprocessor with custom configuration.
    #[must_use]
    pub fn with_config(config: PreprocessorConfig) -> Self {
        Self {
            config,
            retriever: Box::new(GitRetriever::new()),
            highlighter: Box::new(ArboriumHighlighter::new()),
        }
    }

    /// Replace the source retriever.
    #[must_use]
    pub fn with_retriever<R: SourceRetriever + 'static>(mut self, retriever: R) -> Self {
        self.retriever = Box::new(retriever);
        self
    }

    /// Replace the highlighter.
    #[must_use]
    pub fn with_highlighter<H: Highlight + 'static>(mut self, highlighter: H) -> Self {
        self.highlighter = Box::new(highlighter);
        self
    }

    /// Preprocess a whole document.
    ///
    /// Lines outside directives are copied verbatim, so a document without
    /// directives comes back unchanged.
    ///
    /// # Errors
    ///
    /// Returns the first [`PreprocessError`] encountered; no partial output is
    /// produced.
    pub fn process(&mut self, text: &str) -> Result<String, PreprocessError> {
        let mut cursor = LineCursor::new(text);
        let mut fragments: Vec<String> = Vec::new();
        let mut directives = 0usize;

        while let Some(line) = cursor.next() {
            let invocation = collect_invocation(line, &mut cursor)?;
            if invocation.name.is_some() {
                directives += 1;
            }
            fragments.extend(self.render(&invocation)?);
        }

        info!(
            lines = cursor.line_number(),
            directives, "Preprocessed document"
        );
        Ok(fragments.join("\n"))
    }

    fn render(&mut self, invocation: &DirectiveInvocation) -> Result<Vec<String>, PreprocessError> {
        let kind = DirectiveKind::lookup(invocation.name.as_deref());
        if let Some(name) = invocation.name.as_deref() {
            debug!(name, ?kind, line = invocation.line, "Dispatching directive");
        }

        let body = invocation.body.as_str();
        let params = &invocation.parameters;
        let fragment = match kind {
            DirectiveKind::Passthrough => body.to_owned(),
            DirectiveKind::Sidebar => render_sidebar(body, params),
            DirectiveKind::Letter => render_letter(body, params),
            DirectiveKind::Interpolation(interpolation) => {
                render_interpolation(interpolation, body, params)
            }
            DirectiveKind::Definition => {
                let term = params
                    .get("term")
                    .ok_or(PreprocessError::MissingParameter {
                        line: invocation.line,
                        directive: "definition",
                        name: "term",
                    })?;
                render_definition(term, body)
            }
            DirectiveKind::CoffeeScriptSidebar => render_coffeescript_sidebar(body, params),
            DirectiveKind::Table => render_table(body, params),
            DirectiveKind::Code => {
                let mut ctx = CodeContext {
                    default_source_dir: &self.config.default_source_dir,
                    line_numbers: self.config.line_numbers,
                    retriever: self.retriever.as_ref(),
                    highlighter: self.highlighter.as_mut(),
                };
                return render_code(invocation, &mut ctx);
            }
        };
        Ok(vec![fragment])
    }
}
