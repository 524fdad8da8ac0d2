//! Code extraction for the `///code` directive.
//!
//! A snippet comes either from the directive body or from a file at a git
//! revision. The raw text is sliced by one policy (marker, elide, line, lines
//! or everything), highlighted, and framed by an optional filename header and
//! caption.
//!
//! Parameters:
//!
//! | key | meaning |
//! |-----|---------|
//! | `file` | path inside the repository; enables retrieval |
//! | `branch` | revision to read `file` at (required with `file`) |
//! | `directory` / `dir` | repository directory, else the configured default |
//! | `marker` | show only the text between two `marker` comments |
//! | `elide` | hide the text between two `elide` comments |
//! | `elide_caption` | replacement line for elided text (default `...`) |
//! | `line` | show one zero-indexed line |
//! | `lines` | show lines `first..last` (half-open) |
//! | `type` | language, overrides the file extension |
//! | `caption` | caption below the code |
//! | `line_numbers` | flag (or `true`/`false`) for a line-number gutter |

mod escape;
mod highlight;
mod language;
mod slice;

use std::path::Path;

use pubrx_vcs::SourceRetriever;
use tracing::debug;

use crate::directive::{DirectiveInvocation, Parameters};
use crate::error::PreprocessError;

pub use highlight::{ArboriumHighlighter, Highlight, HighlightError};
pub use language::Language;
use slice::{Origin, SlicePolicy, parse_line_range, slice};

/// Collaborators and defaults available to the code directive.
pub(crate) struct CodeContext<'a> {
    /// Directory used when neither `directory` nor `dir` is given.
    pub(crate) default_source_dir: &'a Path,
    /// Line-number default when the directive does not say.
    pub(crate) line_numbers: bool,
    pub(crate) retriever: &'a dyn SourceRetriever,
    pub(crate) highlighter: &'a mut dyn Highlight,
}

/// A `///code` invocation with its parameters interpreted.
#[derive(Debug, PartialEq, Eq)]
struct CodeRequest<'a> {
    directory: Option<&'a str>,
    branch: Option<&'a str>,
    file: Option<&'a str>,
    policy: SlicePolicy<'a>,
    language: Language,
    caption: Option<&'a str>,
    line_numbers: Option<bool>,
}

impl<'a> CodeRequest<'a> {
    fn from_parameters(params: &'a Parameters, line: usize) -> Result<Self, PreprocessError> {
        let invalid = |name: &'static str, value: &str| PreprocessError::InvalidParameter {
            line,
            name,
            value: value.to_owned(),
        };

        // slicing parameters are meaningless as bare flags
        let valued = move |name: &'static str| match params.get(name) {
            Some(value) => Ok(Some(value)),
            None if params.contains(name) => Err(invalid(name, "")),
            None => Ok(None),
        };

        let policy = if let Some(name) = valued("marker")? {
            SlicePolicy::Marker(name)
        } else if let Some(name) = valued("elide")? {
            SlicePolicy::Elide {
                name,
                caption: params.get("elide_caption").unwrap_or("..."),
            }
        } else if let Some(value) = valued("line")? {
            SlicePolicy::Line(value.trim().parse().map_err(|_| invalid("line", value))?)
        } else if let Some(value) = valued("lines")? {
            SlicePolicy::Lines(parse_line_range(value).ok_or_else(|| invalid("lines", value))?)
        } else {
            SlicePolicy::All
        };

        let line_numbers = match params.get("line_numbers") {
            Some("true" | "yes") => Some(true),
            Some("false" | "no") => Some(false),
            Some(other) => return Err(invalid("line_numbers", other)),
            None => params.contains("line_numbers").then_some(true),
        };

        let file = params.get("file");
        let branch = params.get("branch");
        if file.is_some() && branch.is_none() {
            return Err(PreprocessError::MissingParameter {
                line,
                directive: "code",
                name: "branch",
            });
        }

        Ok(Self {
            directory: params.get("directory").or_else(|| params.get("dir")),
            branch,
            file,
            policy,
            language: Language::detect(params.get("type"), file),
            caption: params.get("caption"),
            line_numbers,
        })
    }
}

/// Render a `///code` invocation into its fragments: the filename header (if
/// the code came from a file), the highlighted snippet, and the caption (if
/// any).
pub(crate) fn render_code(
    invocation: &DirectiveInvocation,
    ctx: &mut CodeContext<'_>,
) -> Result<Vec<String>, PreprocessError> {
    let request = CodeRequest::from_parameters(&invocation.parameters, invocation.line)?;

    let raw = match (request.file, request.branch) {
        (Some(file), Some(branch)) => {
            let directory = request
                .directory
                .map_or(ctx.default_source_dir, Path::new);
            debug!(directory = %directory.display(), branch, file, "Retrieving code");
            ctx.retriever
                .retrieve(directory, branch, file)?
                .trim()
                .to_owned()
        }
        _ => invocation.body.clone(),
    };

    let origin = Origin {
        file: request.file,
        branch: request.branch,
    };
    let code = slice(&raw, &request.policy, request.language, &origin)?;
    let line_numbers = request.line_numbers.unwrap_or(ctx.line_numbers);
    let highlighted = ctx
        .highlighter
        .highlight(&code, request.language, line_numbers)?;

    let mut fragments = Vec::with_capacity(3);
    if let (Some(file), Some(branch)) = (request.file, request.branch) {
        fragments.push(format!(
            r#"<div class="code-filename">{file} (Branch {branch})</div>"#
        ));
    }
    fragments.push(highlighted);
    if let Some(caption) = request.caption {
        fragments.push(format!(r#"<div class="code-caption">{caption}</div>"#));
    }
    Ok(fragments)
}
