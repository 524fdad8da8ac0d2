//! Git-backed source retrieval.

use std::path::Path;

use gix::object::Kind;

use crate::source::{SourceError, SourceErrorKind, SourceRetriever};

/// Reads files from git revisions, equivalent to `git show <branch>:<file>`.
///
/// The repository is discovered from the given directory upwards, so the
/// directory may be any path inside a work tree.
#[derive(Debug, Default, Clone, Copy)]
pub struct GitRetriever;

impl GitRetriever {
    /// Create a new git retriever.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SourceRetriever for GitRetriever {
    fn retrieve(&self, directory: &Path, branch: &str, file: &str) -> Result<String, SourceError> {
        let error = |kind| SourceError::new(kind, directory, branch, file);

        let repo = gix::discover(directory)
            .map_err(|e| error(SourceErrorKind::RepositoryNotFound).with_source(e))?;

        let spec = format!("{branch}:{file}");
        let id = repo
            .rev_parse_single(spec.as_str())
            .map_err(|e| error(SourceErrorKind::RevisionNotFound).with_source(e))?;
        let object = id
            .object()
            .map_err(|e| error(SourceErrorKind::Other).with_source(e))?;

        if object.kind != Kind::Blob {
            return Err(error(SourceErrorKind::NotAFile));
        }

        let data = object.detach().data;
        tracing::debug!(
            directory = %directory.display(),
            %branch,
            %file,
            bytes = data.len(),
            "Retrieved source"
        );

        String::from_utf8(data).map_err(|e| error(SourceErrorKind::InvalidEncoding).with_source(e))
    }
}
