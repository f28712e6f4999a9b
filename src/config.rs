//! Configuration System
//!
//! Explicit configuration for a snapshot run. Defaults reproduce the stock
//! export settings; optional TOML files and `CODEFLAT_*` environment variables
//! can override them. Nothing here is read from command-line arguments.

use crate::logging::LoggingConfig;
use crate::tree::FileFilter;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Default snapshot file name, resolved against the base directory
pub const DEFAULT_OUTPUT_FILE: &str = "project-all-code-refactored.txt";

const DEFAULT_EXTENSIONS: &[&str] = &[
    ".ts", ".tsx", ".js", ".md", ".json", ".html", ".css", ".prisma",
];

const DEFAULT_FILE_NAMES: &[&str] = &[".env", ".env.example", ".gitignore", "turbo.json"];

const DEFAULT_IGNORED_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    ".vscode",
    "dist",
    "__pycache__",
    ".turbo",
    ".next",
];

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CodeflatConfig {
    /// What to scan and where to write
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Export settings: scan root, output file and selection rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory to scan
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,

    /// Snapshot file; relative paths are resolved against `base_dir`
    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,

    /// Filename suffixes to include (case-sensitive)
    #[serde(default = "default_extensions")]
    pub extensions: BTreeSet<String>,

    /// Exact filenames to include regardless of extension
    #[serde(default = "default_file_names")]
    pub file_names: BTreeSet<String>,

    /// Directory names never descended into
    #[serde(default = "default_ignored_dirs")]
    pub ignored_dirs: BTreeSet<String>,
}

fn default_base_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_output_file() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_FILE)
}

fn to_set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn default_extensions() -> BTreeSet<String> {
    to_set(DEFAULT_EXTENSIONS)
}

fn default_file_names() -> BTreeSet<String> {
    to_set(DEFAULT_FILE_NAMES)
}

fn default_ignored_dirs() -> BTreeSet<String> {
    to_set(DEFAULT_IGNORED_DIRS)
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            output_file: default_output_file(),
            extensions: default_extensions(),
            file_names: default_file_names(),
            ignored_dirs: default_ignored_dirs(),
        }
    }
}

impl ExportConfig {
    /// Configuration for scanning `base_dir` with the default selection rules.
    pub fn for_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            ..Self::default()
        }
    }

    /// Where the snapshot is written
    pub fn output_path(&self) -> PathBuf {
        self.base_dir.join(&self.output_file)
    }

    /// Selection rules for the walker
    pub fn filter(&self) -> FileFilter {
        FileFilter {
            extensions: self.extensions.clone(),
            file_names: self.file_names.clone(),
            ignored_dirs: self.ignored_dirs.clone(),
        }
    }

    /// Validate export settings
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.output_file.as_os_str().is_empty() {
            errors.push(ValidationError::Export(
                "Output file cannot be empty".to_string(),
            ));
        }
        if self.extensions.iter().any(|e| e.is_empty()) {
            // An empty suffix would match every file
            errors.push(ValidationError::Export(
                "Extensions cannot contain an empty entry".to_string(),
            ));
        }
        if self.file_names.iter().any(|n| n.is_empty()) {
            errors.push(ValidationError::Export(
                "File names cannot contain an empty entry".to_string(),
            ));
        }
        for dir in &self.ignored_dirs {
            if dir.is_empty() || dir.contains('/') || dir.contains('\\') {
                errors.push(ValidationError::Export(format!(
                    "Ignored directory '{}' must be a single directory name",
                    dir
                )));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl CodeflatConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(export_errors) = self.export.validate() {
            errors.extend(export_errors);
        }
        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Export(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Export(msg) => write!(f, "Export: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Join validation errors into one message, one per line.
pub fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
