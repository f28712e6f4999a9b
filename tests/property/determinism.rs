//! Property-based tests for snapshot ordering and idempotence

use codeflat::snapshot::{write_snapshot, SourceReader};
use codeflat::types::{sort_records, FileRecord};
use codeflat::{run_export, ExportConfig, FsReader};
use proptest::prelude::*;
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Returns the path itself as content
struct EchoReader;

impl SourceReader for EchoReader {
    fn read_text(&self, path: &Path) -> io::Result<String> {
        Ok(path.to_string_lossy().into_owned())
    }
}

fn rel_paths() -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set("[a-c]{1,3}(/[a-c]{1,3}){0,2}\\.ts", 0..12)
}

proptest! {
    /// The N-th index entry and the N-th content block agree, in sorted order
    #[test]
    fn index_and_content_align(paths in rel_paths()) {
        let mut records: Vec<FileRecord> = paths
            .iter()
            .rev()
            .map(|p| FileRecord::new(PathBuf::from("/root").join(p), p.clone()))
            .collect();
        sort_records(&mut records);

        let mut buf = Vec::new();
        write_snapshot(&mut buf, &records, &EchoReader).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let sorted: Vec<&String> = paths.iter().collect();
        for (i, rel) in sorted.iter().enumerate() {
            let entry = format!("\n{}. {}\n", i + 1, rel);
            let block = format!("// ====== [{}] {} ======\n", i + 1, rel);
            prop_assert!(text.contains(&entry));
            prop_assert!(text.contains(&block));
        }
        prop_assert_eq!(text.matches("// ====== [").count(), paths.len());
    }

    /// Exporting the same tree twice yields identical bytes
    #[test]
    fn export_is_idempotent(paths in rel_paths()) {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        // Directory components never contain a dot, so no file collides with a directory
        let files: Vec<String> = paths.into_iter().collect();
        for rel in &files {
            let path = root.join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, rel.as_bytes()).unwrap();
        }

        let mut config = ExportConfig::for_dir(root);
        config.extensions = [".ts".to_string()].into_iter().collect();
        config.output_file = PathBuf::from("out.txt");

        let first_report = run_export(&config, &FsReader).unwrap();
        let first = fs::read(config.output_path()).unwrap();
        run_export(&config, &FsReader).unwrap();
        let second = fs::read(config.output_path()).unwrap();

        prop_assert_eq!(first_report.snapshot.files, files.len());
        prop_assert_eq!(first, second);
    }
}
