//! Core data types shared by the scanner and the snapshot writer.

use std::path::PathBuf;

/// A file selected for the snapshot.
///
/// `relative_path` is relative to the base directory and always uses `/`
/// separators, regardless of platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub absolute_path: PathBuf,
    pub relative_path: String,
}

impl FileRecord {
    pub fn new(absolute_path: PathBuf, relative_path: impl Into<String>) -> Self {
        Self {
            absolute_path,
            relative_path: relative_path.into(),
        }
    }
}

/// Sort records by relative path (byte-wise lexicographic).
///
/// The sort is stable, so records with equal keys keep walk order.
pub fn sort_records(records: &mut [FileRecord]) {
    records.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
}
