//! `pubrx postprocess` command implementation.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use pubrx_preprocessor::Postprocessor;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the postprocess command.
#[derive(Args)]
pub(crate) struct PostprocessArgs {
    /// HTML files produced by the markdown converter.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Write results to this directory instead of rewriting the inputs.
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl PostprocessArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let postprocessor = Postprocessor::new();

        for input in &self.inputs {
            let target = postprocess_file(&postprocessor, input, self.output_dir.as_deref())?;
            output.info(&format!("{} -> {}", input.display(), target.display()));
        }

        output.success(&format!("Post-processed {} file(s)", self.inputs.len()));
        Ok(())
    }
}

/// Post-process one HTML file, in place or into `output_dir`.
fn postprocess_file(
    postprocessor: &Postprocessor,
    input: &Path,
    output_dir: Option<&Path>,
) -> Result<PathBuf, CliError> {
    let html = fs::read_to_string(input)?;
    let target = match output_dir {
        Some(dir) => {
            let name = input.file_name().ok_or_else(|| {
                CliError::Validation(format!("Not a file: {}", input.display()))
            })?;
            fs::create_dir_all(dir)?;
            dir.join(name)
        }
        None => input.to_path_buf(),
    };
    fs::write(&target, postprocessor.process(&html))?;
    Ok(target)
}
