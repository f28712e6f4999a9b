//! Shared test utilities for integration tests

use codeflat::ExportConfig;
use std::fs;
use std::path::Path;

/// Create files (and their parent directories) under `root`.
pub fn write_tree(root: &Path, files: &[(&str, &str)]) {
    for (rel, content) in files {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
}

/// Export config for `root` selecting `.ts` files and `.env`, ignoring `node_modules`.
pub fn ts_config(root: &Path) -> ExportConfig {
    let mut config = ExportConfig::for_dir(root);
    config.extensions = [".ts".to_string()].into_iter().collect();
    config.file_names = [".env".to_string()].into_iter().collect();
    config.ignored_dirs = ["node_modules".to_string()].into_iter().collect();
    config.output_file = "snapshot.txt".into();
    config
}

/// Relative paths listed in the index section, in order.
pub fn index_entries(snapshot: &str) -> Vec<String> {
    let index = snapshot
        .split("# CONTENIDO DE ARCHIVOS")
        .next()
        .unwrap_or_default();
    index
        .lines()
        .filter_map(|line| {
            let (num, rest) = line.split_once(". ")?;
            num.parse::<usize>().ok()?;
            Some(rest.to_string())
        })
        .collect()
}

/// (index, relative path) pairs of every content delimiter, in order.
pub fn content_headers(snapshot: &str) -> Vec<(usize, String)> {
    snapshot
        .lines()
        .filter_map(|line| {
            let rest = line.strip_prefix("// ====== [")?;
            let (num, rest) = rest.split_once("] ")?;
            let path = rest
                .strip_suffix(" (ERROR DE LECTURA) ======")
                .or_else(|| rest.strip_suffix(" ======"))?;
            Some((num.parse().ok()?, path.to_string()))
        })
        .collect()
}
