//! Codeflat: project tree snapshots
//!
//! Recursively scans a base directory, selects files by extension or exact
//! filename, and writes one text artifact holding a numbered index of the
//! selected paths followed by each file's content.

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod snapshot;
pub mod tree;
pub mod types;

pub use crate::config::{CodeflatConfig, ConfigLoader, ExportConfig};
pub use error::{ExportError, ReadFailure};
pub use export::{run_export, scan, ExportReport};
pub use snapshot::{FsReader, SourceReader};
pub use tree::{FileFilter, Walker};
pub use types::FileRecord;
