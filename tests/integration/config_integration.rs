//! Integration tests for configuration-driven exports

use super::test_utils::write_tree;
use codeflat::config::ConfigLoader;
use codeflat::{run_export, FsReader};
use std::fs;
use tempfile::TempDir;

/// A config file fully describes an export, including a custom selection
#[test]
fn test_config_file_drives_export() {
    let temp_dir = TempDir::new().unwrap();
    let project = temp_dir.path().join("project");
    write_tree(
        &project,
        &[
            ("src/main.rs", "fn main() {}\n"),
            ("Cargo.toml", "[package]\n"),
            ("target/debug/build.rs", "x"),
            ("README.md", "readme"),
        ],
    );

    let config_file = temp_dir.path().join("codeflat.toml");
    fs::write(
        &config_file,
        format!(
            r#"
[export]
base_dir = "{}"
output_file = "rust-snapshot.txt"
extensions = [".rs"]
file_names = ["Cargo.toml"]
ignored_dirs = ["target", ".git"]
"#,
            project.display().to_string().replace('\\', "/")
        ),
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&config_file).unwrap();
    assert!(config.validate().is_ok());

    let report = run_export(&config.export, &FsReader).unwrap();
    assert_eq!(report.output_path, project.join("rust-snapshot.txt"));
    assert_eq!(report.snapshot.files, 2);

    let text = fs::read_to_string(&report.output_path).unwrap();
    assert!(text.contains("1. Cargo.toml\n2. src/main.rs\n"));
    assert!(!text.contains("build.rs"));
    assert!(!text.contains("README.md"));
}

/// Invalid values are reported together and block the export
#[test]
fn test_invalid_config_file_fails_validation() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("codeflat.toml");
    fs::write(
        &config_file,
        r#"
[export]
extensions = [""]
ignored_dirs = ["src/generated"]

[logging]
output = "syslog"
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&config_file).unwrap();
    let errors = config.validate().unwrap_err();
    assert_eq!(errors.len(), 3);
}

/// Missing config file is an error for explicit loads
#[test]
fn test_missing_config_file_errors() {
    let temp_dir = TempDir::new().unwrap();
    assert!(ConfigLoader::load_from_file(&temp_dir.path().join("nope.toml")).is_err());
}
