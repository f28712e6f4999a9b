//! Selection rules for files and directories

use std::collections::BTreeSet;

/// File and directory selection rules
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileFilter {
    /// Filename suffixes to include (case-sensitive, e.g. ".ts")
    pub extensions: BTreeSet<String>,
    /// Exact filenames to include regardless of extension (e.g. ".env")
    pub file_names: BTreeSet<String>,
    /// Directory names pruned before descent (e.g. "node_modules")
    pub ignored_dirs: BTreeSet<String>,
}

impl FileFilter {
    pub fn new<E, F, D>(extensions: E, file_names: F, ignored_dirs: D) -> Self
    where
        E: IntoIterator,
        E::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        Self {
            extensions: extensions.into_iter().map(Into::into).collect(),
            file_names: file_names.into_iter().map(Into::into).collect(),
            ignored_dirs: ignored_dirs.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether a file with this name belongs in the snapshot.
    ///
    /// A name matches when it ends with any configured extension or equals one
    /// of the configured filenames.
    pub fn matches_file(&self, name: &str) -> bool {
        self.file_names.contains(name)
            || self
                .extensions
                .iter()
                .any(|ext| name.ends_with(ext.as_str()))
    }

    /// Whether a directory with this name is pruned from the walk.
    pub fn is_ignored_dir(&self, name: &str) -> bool {
        self.ignored_dirs.contains(name)
    }
}
