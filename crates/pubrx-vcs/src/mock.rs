//! Mock retriever implementation for testing.
//!
//! Provides [`MockRetriever`] for unit testing without a git repository.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::source::{SourceError, SourceErrorKind, SourceRetriever};

/// Mock retriever for testing.
///
/// Stores file contents in memory keyed by `(directory, branch, file)`.
/// Any other reference fails with [`SourceErrorKind::RevisionNotFound`].
///
/// # Example
///
/// ```ignore
/// use std::path::Path;
/// use pubrx_vcs::{MockRetriever, SourceRetriever};
///
/// let retriever = MockRetriever::new().with_file("/code", "main", "app.js", "let x = 1;");
/// let code = retriever.retrieve(Path::new("/code"), "main", "app.js").unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MockRetriever {
    files: HashMap<(PathBuf, String, String), String>,
}

impl MockRetriever {
    /// Create a new empty mock retriever.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file at the given reference.
    #[must_use]
    pub fn with_file(
        mut self,
        directory: impl Into<PathBuf>,
        branch: impl Into<String>,
        file: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        self.files
            .insert((directory.into(), branch.into(), file.into()), content.into());
        self
    }
}

impl SourceRetriever for MockRetriever {
    fn retrieve(&self, directory: &Path, branch: &str, file: &str) -> Result<String, SourceError> {
        let key = (directory.to_path_buf(), branch.to_owned(), file.to_owned());
        self.files.get(&key).cloned().ok_or_else(|| {
            SourceError::new(SourceErrorKind::RevisionNotFound, directory, branch, file)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_file() {
        let retriever = MockRetriever::new().with_file("/code", "main", "a.rb", "puts 1");
        let content = retriever
            .retrieve(Path::new("/code"), "main", "a.rb")
            .unwrap();
        assert_eq!(content, "puts 1");
    }

    #[test]
    fn test_other_branch_not_found() {
        let retriever = MockRetriever::new().with_file("/code", "main", "a.rb", "puts 1");
        let err = retriever
            .retrieve(Path::new("/code"), "dev", "a.rb")
            .unwrap_err();
        assert_eq!(err.kind, SourceErrorKind::RevisionNotFound);
    }
}
