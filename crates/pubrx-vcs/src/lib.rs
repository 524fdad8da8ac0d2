//! Source retrieval for code snippets embedded in manuscripts.
//!
//! The `///code` directive can pull a file out of a git repository at a given
//! branch instead of carrying the code inline. This crate provides the
//! [`SourceRetriever`] trait that the preprocessor calls for that lookup, so
//! the scanning logic never touches a repository directly.
//!
//! # Architecture
//!
//! - [`SourceRetriever`] trait with a single `retrieve()` method
//! - [`GitRetriever`] reads blobs with `gix` (`<branch>:<file>` revision specs)
//! - [`MockRetriever`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use pubrx_vcs::{GitRetriever, SourceRetriever};
//!
//! let retriever = GitRetriever::new();
//! let code = retriever.retrieve(Path::new("../code"), "main", "app/models/user.rb")?;
//! ```

mod git;
#[cfg(feature = "mock")]
mod mock;
mod source;

pub use git::GitRetriever;
#[cfg(feature = "mock")]
pub use mock::MockRetriever;
pub use source::{SourceError, SourceErrorKind, SourceRetriever};
