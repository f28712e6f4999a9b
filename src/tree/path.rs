//! Path resolution and relative-path normalization utilities

use crate::error::ExportError;
use std::path::{Component, Path, PathBuf};

/// Resolve the scan root to an absolute path.
///
/// Uses `dunce` so Windows roots do not come back as `\\?\` UNC paths. A root
/// that cannot be canonicalized (e.g. it does not exist) is made absolute
/// against the current directory instead; the walk then yields nothing.
pub fn absolute_root(path: &Path) -> PathBuf {
    match dunce::canonicalize(path) {
        Ok(canonical) => canonical,
        Err(_) if path.is_absolute() => path.to_path_buf(),
        Err(_) => std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf()),
    }
}

/// Compute the `/`-separated path of `path` relative to `root`.
pub fn relative_path(root: &Path, path: &Path) -> Result<String, ExportError> {
    let rel = path.strip_prefix(root).map_err(|_| {
        ExportError::InvalidPath(format!(
            "{} is not under {}",
            path.display(),
            root.display()
        ))
    })?;

    let parts: Vec<String> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    if parts.is_empty() {
        return Err(ExportError::InvalidPath(format!(
            "{} is the scan root itself",
            path.display()
        )));
    }

    Ok(normalize_separators(&parts.join("/")))
}

/// Replace Windows separators with `/`.
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}
