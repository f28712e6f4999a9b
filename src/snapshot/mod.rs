//! Snapshot output
//!
//! Renders sorted file records into a single text artifact: a numbered index
//! of relative paths followed by each file's content under a numbered
//! delimiter.

pub mod format;
pub mod reader;
pub mod writer;

pub use reader::{decode_lossy, FsReader, SourceReader};
pub use writer::{write_snapshot, write_snapshot_file, SnapshotReport};
