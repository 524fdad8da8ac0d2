//! `pubrx preprocess` command implementation.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use pubrx_config::{CliSettings, Config};
use pubrx_preprocessor::{Preprocessor, PreprocessorConfig};
use tracing::info;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the preprocess command.
#[derive(Args)]
pub(crate) struct PreprocessArgs {
    /// Manuscript directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Directory for preprocessed documents (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Default repository directory for `///code` (overrides config).
    #[arg(long)]
    code_dir: Option<PathBuf>,

    /// Add line numbers to all code unless a directive says otherwise.
    #[arg(long)]
    line_numbers: bool,

    /// Path to configuration file (default: auto-discover pubrx.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl PreprocessArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            code_dir: self.code_dir,
            source_dir: self.source_dir,
            output_dir: self.output_dir,
            line_numbers: self.line_numbers.then_some(true),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let source_dir = &config.text_resolved.source_dir;
        let output_dir = &config.text_resolved.output_dir;
        output.info(&format!("Source: {}", source_dir.display()));
        output.info(&format!("Output: {}", output_dir.display()));
        output.info(&format!("Code: {}", config.code_resolved.source_dir.display()));

        let mut preprocessor = Preprocessor::with_config(
            PreprocessorConfig::new()
                .with_default_source_dir(&config.code_resolved.source_dir)
                .with_line_numbers(config.code_resolved.line_numbers),
        );

        let written = preprocess_dir(&mut preprocessor, source_dir, output_dir)?;
        if written.is_empty() {
            output.warning(&format!(
                "No markdown documents found in {}",
                source_dir.display()
            ));
        } else {
            output.success(&format!(
                "Preprocessed {} document(s) to {}",
                written.len(),
                output_dir.display()
            ));
        }
        Ok(())
    }
}

/// Markdown documents under `source_dir`, recursively, in sorted order.
fn find_documents(source_dir: &Path) -> Result<Vec<PathBuf>, CliError> {
    let pattern = format!(
        "{}/**/*.md",
        glob::Pattern::escape(&source_dir.to_string_lossy())
    );
    let mut documents = glob::glob(&pattern)?.collect::<Result<Vec<_>, _>>()?;
    documents.sort();
    Ok(documents)
}

/// Preprocess every document under `source_dir` into the same relative path
/// under `output_dir`. Returns the written paths.
///
/// Stops at the first failing document.
pub(crate) fn preprocess_dir(
    preprocessor: &mut Preprocessor,
    source_dir: &Path,
    output_dir: &Path,
) -> Result<Vec<PathBuf>, CliError> {
    if !source_dir.is_dir() {
        return Err(CliError::Validation(format!(
            "Source directory does not exist: {}",
            source_dir.display()
        )));
    }

    let mut written = Vec::new();
    for document in find_documents(source_dir)? {
        let relative = document.strip_prefix(source_dir).unwrap_or(&document);
        let target = output_dir.join(relative);

        info!(document = %document.display(), "Preprocessing");
        let text = fs::read_to_string(&document)?;
        let processed = preprocessor
            .process(&text)
            .map_err(|source| CliError::Preprocess {
                path: document.clone(),
                source,
            })?;

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, processed)?;
        written.push(target);
    }
    Ok(written)
}
