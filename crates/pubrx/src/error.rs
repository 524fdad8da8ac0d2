//! CLI error types.

use std::path::PathBuf;

use pubrx_config::ConfigError;
use pubrx_preprocessor::PreprocessError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("invalid document pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("{0}")]
    Glob(#[from] glob::GlobError),

    #[error("{}: {source}", path.display())]
    Preprocess {
        path: PathBuf,
        source: PreprocessError,
    },

    #[error("{0}")]
    Validation(String),
}
