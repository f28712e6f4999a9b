//! Integration tests for snapshot idempotence

use super::test_utils::{ts_config, write_tree};
use codeflat::{run_export, FsReader};
use std::fs;
use tempfile::TempDir;

/// Two runs over an unchanged tree produce byte-identical output
#[test]
fn test_rerun_is_byte_identical() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_tree(
        root,
        &[
            ("z/last.ts", "last"),
            ("a/first.ts", "first\r\nline"),
            ("m/.env", "M=1"),
            ("m/skip.txt", "skip"),
        ],
    );

    let config = ts_config(root);
    run_export(&config, &FsReader).unwrap();
    let first = fs::read(config.output_path()).unwrap();

    run_export(&config, &FsReader).unwrap();
    let second = fs::read(config.output_path()).unwrap();

    assert_eq!(first, second);
}

/// Even when the output name matches the selection rules, a rerun does not
/// fold the previous snapshot into the next one
#[test]
fn test_rerun_with_self_matching_output_name() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_tree(root, &[("a.ts", "a"), ("b.ts", "b")]);

    let mut config = ts_config(root);
    config.output_file = "snapshot.ts".into();

    run_export(&config, &FsReader).unwrap();
    let first = fs::read(config.output_path()).unwrap();
    run_export(&config, &FsReader).unwrap();
    let second = fs::read(config.output_path()).unwrap();

    assert_eq!(first, second);
}

/// Content changes show up; the index does not move
#[test]
fn test_content_change_only_changes_content_section() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_tree(root, &[("a.ts", "one"), ("b.ts", "two")]);

    let config = ts_config(root);
    run_export(&config, &FsReader).unwrap();
    let before = fs::read_to_string(config.output_path()).unwrap();

    fs::write(root.join("b.ts"), "three").unwrap();
    run_export(&config, &FsReader).unwrap();
    let after = fs::read_to_string(config.output_path()).unwrap();

    let index = |s: &str| s.split("# CONTENIDO DE ARCHIVOS").next().unwrap().to_string();
    assert_eq!(index(&before), index(&after));
    assert_ne!(before, after);
    assert!(after.contains("// ====== [2] b.ts ======\nthree\n\n"));
}
