//! CLI command implementations.

pub(crate) mod postprocess;
pub(crate) mod preprocess;

pub(crate) use postprocess::PostprocessArgs;
pub(crate) use preprocess::PreprocessArgs;
