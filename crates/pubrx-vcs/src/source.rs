//! Source retrieval trait and error type.

use std::path::{Path, PathBuf};

/// Semantic category of a retrieval failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    /// No repository could be opened at (or above) the directory.
    RepositoryNotFound,
    /// The `<branch>:<file>` reference did not resolve.
    RevisionNotFound,
    /// The reference resolved to something other than a file.
    NotAFile,
    /// The file content is not valid UTF-8.
    InvalidEncoding,
    /// Other/unknown error category.
    Other,
}

/// Retrieval error with the reference that failed.
#[derive(Debug)]
pub struct SourceError {
    /// Semantic error category.
    pub kind: SourceErrorKind,
    /// Repository directory that was searched.
    pub directory: PathBuf,
    /// Branch (or any revision) that was requested.
    pub branch: String,
    /// File path inside the repository.
    pub file: String,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl SourceError {
    /// Create a new error for the given reference.
    #[must_use]
    pub fn new(
        kind: SourceErrorKind,
        directory: impl Into<PathBuf>,
        branch: impl Into<String>,
        file: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            directory: directory.into(),
            branch: branch.into(),
            file: file.into(),
            source: None,
        }
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "Kind: message (branch:file in /repo)"
        let kind_str = match self.kind {
            SourceErrorKind::RepositoryNotFound => "Repository not found",
            SourceErrorKind::RevisionNotFound => "Revision not found",
            SourceErrorKind::NotAFile => "Not a file",
            SourceErrorKind::InvalidEncoding => "Invalid UTF-8",
            SourceErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        write!(
            f,
            " ({}:{} in {})",
            self.branch,
            self.file,
            self.directory.display()
        )
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Retrieves the content of a file as it exists at a revision.
///
/// Implementations are blocking and are called at most once per `///code`
/// directive. There is no caching between calls.
pub trait SourceRetriever {
    /// Return the exact content of `file` at `branch` in the repository
    /// containing `directory`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the repository or reference does not resolve.
    fn retrieve(&self, directory: &Path, branch: &str, file: &str) -> Result<String, SourceError>;
}
