//! Filesystem walker for collecting snapshot candidates

use crate::tree::filter::FileFilter;
use crate::tree::path;
use crate::types::FileRecord;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, warn};
use walkdir::{DirEntry, WalkDir};

/// Filesystem walker
pub struct Walker {
    root: PathBuf,
    filter: FileFilter,
}

impl Walker {
    /// Create a walker rooted at `root`. The root is resolved to an absolute path.
    pub fn new(root: &Path, filter: FileFilter) -> Self {
        Self {
            root: path::absolute_root(root),
            filter,
        }
    }

    /// Absolute scan root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the tree top-down and collect every selected file.
    ///
    /// Ignored directories are pruned before descent. Directories that cannot
    /// be read (including a missing root) contribute nothing; the walk never
    /// fails. The returned records are in walk order, not sorted.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn walk(&self) -> Vec<FileRecord> {
        let mut records = Vec::new();

        let walker = WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.should_prune(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let location = e
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| self.root.display().to_string());
                    warn!(path = %location, error = %e, "Skipping unreadable entry");
                    continue;
                }
            };

            // Root directory itself is never a candidate
            if entry.depth() == 0 || !is_file_like(&entry) {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if !self.filter.matches_file(&name) {
                continue;
            }

            match path::relative_path(&self.root, entry.path()) {
                Ok(relative_path) => {
                    debug!(path = %relative_path, "Selected file");
                    records.push(FileRecord::new(entry.path().to_path_buf(), relative_path));
                }
                Err(e) => warn!(error = %e, "Skipping entry outside scan root"),
            }
        }

        debug!(count = records.len(), "Walk complete");
        records
    }

    /// Prune ignored directory names. The root is always walked.
    fn should_prune(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return false;
        }
        let pruned = self
            .filter
            .is_ignored_dir(&entry.file_name().to_string_lossy());
        if pruned {
            debug!(path = %entry.path().display(), "Pruned ignored directory");
        }
        pruned
    }
}

/// Regular files and symlinks that do not resolve to a directory.
fn is_file_like(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_dir() {
        return false;
    }
    if file_type.is_symlink() {
        return !entry.path().is_dir();
    }
    true
}
