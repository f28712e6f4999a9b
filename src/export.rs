//! Export pipeline: validate, scan, sort, write.

use crate::config::{format_validation_errors, ExportConfig};
use crate::error::ExportError;
use crate::snapshot::{write_snapshot_file, SnapshotReport, SourceReader};
use crate::tree::{path, Walker};
use crate::types::{sort_records, FileRecord};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Outcome of a completed export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    /// File the snapshot was written to
    pub output_path: PathBuf,
    /// What the writer produced
    pub snapshot: SnapshotReport,
}

impl ExportReport {
    pub fn files_written(&self) -> usize {
        self.snapshot.files_written()
    }
}

/// Collect and sort the records selected by `config`.
///
/// The output file itself is never selected, so a previous snapshot is not
/// folded into the next one when its name matches the selection rules.
#[instrument(skip(config), fields(base_dir = %config.base_dir.display()))]
pub fn scan(config: &ExportConfig) -> Vec<FileRecord> {
    let walker = Walker::new(&config.base_dir, config.filter());
    let mut records = walker.walk();

    if let Some(output) = output_relative_path(walker.root(), &config.output_path()) {
        records.retain(|record| {
            let is_output = record.relative_path == output;
            if is_output {
                debug!(path = %record.relative_path, "Excluding snapshot output file");
            }
            !is_output
        });
    }

    sort_records(&mut records);
    info!(count = records.len(), "Scan complete");
    records
}

/// Location of the output file relative to `root`, if it lies inside it.
///
/// Only the parent directory is resolved; the file name is kept as given so a
/// symlink at the output location is matched by its own name.
fn output_relative_path(root: &Path, output: &Path) -> Option<String> {
    let name = output.file_name()?;
    let parent = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let parent = dunce::canonicalize(parent).ok()?;
    path::relative_path(root, &parent.join(name)).ok()
}

/// Run a full export described by `config`, reading sources with `reader`.
///
/// Per-file read failures are reported in the result; only configuration and
/// output-file errors fail the run.
pub fn run_export<R>(config: &ExportConfig, reader: &R) -> Result<ExportReport, ExportError>
where
    R: SourceReader + ?Sized,
{
    config
        .validate()
        .map_err(|errors| ExportError::Validation(format_validation_errors(&errors)))?;

    let records = scan(config);
    export_records(config, &records, reader)
}

/// Write already-scanned records to the configured output path.
pub fn export_records<R>(
    config: &ExportConfig,
    records: &[FileRecord],
    reader: &R,
) -> Result<ExportReport, ExportError>
where
    R: SourceReader + ?Sized,
{
    let output_path = config.output_path();
    let snapshot = write_snapshot_file(&output_path, records, reader)?;

    Ok(ExportReport {
        output_path,
        snapshot,
    })
}
