//! Line-oriented directive preprocessor for manuscript markup.
//!
//! Manuscripts are markdown with an extra directive layer: a `///name` line,
//! optional `:key value` parameter lines, and a body that is either the next
//! line or everything up to a matching `\\\name` line. [`Preprocessor`]
//! expands those directives into HTML fragments (with `markdown="1"` so the
//! downstream converter keeps processing their content) and leaves every other
//! line untouched.
//!
//! # Architecture
//!
//! - A destructive line cursor is lent to one collection phase at a time.
//! - [`directive::DirectiveKind`] resolves a name to a rendering variant once.
//! - [`code`] retrieves source through a [`pubrx_vcs::SourceRetriever`],
//!   slices it and highlights it through a [`code::Highlight`].
//! - [`Postprocessor`] cleans up the HTML produced after conversion.
//!
//! # Example
//!
//! ```
//! use pubrx_preprocessor::Preprocessor;
//!
//! let text = "Intro\n///protip\n:title Speed Up Your Tests\nRun them in parallel.";
//! let output = Preprocessor::new().process(text).unwrap();
//!
//! assert!(output.starts_with("Intro\n<div class=\"interpolation protip\""));
//! assert!(output.contains("Speed Up Your Tests"));
//! ```

pub mod code;
mod cursor;
pub mod directive;
mod error;
mod postprocess;
mod processor;
mod replacements;
mod scanner;
mod util;

pub use error::PreprocessError;
pub use postprocess::Postprocessor;
pub use processor::{Preprocessor, PreprocessorConfig};
pub use replacements::Replacements;
pub use util::escape_html;
