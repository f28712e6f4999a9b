//! Error types for the codeflat snapshot exporter.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal export errors.
///
/// Per-file read problems are not errors at this level; they are collected as
/// [`ReadFailure`] records and the run continues.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write output file {path:?}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration validation failed:\n{0}")]
    Validation(String),
}

impl From<config::ConfigError> for ExportError {
    fn from(err: config::ConfigError) -> Self {
        ExportError::Config(err.to_string())
    }
}

/// A source file that could not be read during the content phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadFailure {
    /// 1-based position in the index
    pub index: usize,
    pub relative_path: String,
    pub absolute_path: PathBuf,
    /// Textual error message, as written to the placeholder block
    pub message: String,
}
