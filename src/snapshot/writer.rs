//! Snapshot writer: index section followed by content section.

use crate::error::{ExportError, ReadFailure};
use crate::snapshot::format;
use crate::snapshot::reader::SourceReader;
use crate::types::FileRecord;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Outcome of a snapshot write
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotReport {
    /// Number of records written to the index (and content) section
    pub files: usize,
    /// Files replaced by an error placeholder
    pub read_failures: Vec<ReadFailure>,
}

impl SnapshotReport {
    /// Files whose content made it into the snapshot
    pub fn files_written(&self) -> usize {
        self.files - self.read_failures.len()
    }
}

/// Write the snapshot for `records` (already sorted) to `out`.
///
/// Each source is read completely before its delimiter is emitted, so a read
/// failure produces only the placeholder block. Read failures never abort the
/// run; any error returned here comes from `out`.
pub fn write_snapshot<W, R>(
    out: &mut W,
    records: &[FileRecord],
    reader: &R,
) -> io::Result<SnapshotReport>
where
    W: Write,
    R: SourceReader + ?Sized,
{
    writeln!(out, "{}\n", format::INDEX_HEADER)?;
    for (idx, record) in records.iter().enumerate() {
        writeln!(out, "{}", format::index_entry(idx + 1, &record.relative_path))?;
    }
    write!(out, "\n\n")?;

    writeln!(out, "{}\n", format::CONTENT_HEADER)?;
    let mut report = SnapshotReport {
        files: records.len(),
        read_failures: Vec::new(),
    };

    for (idx, record) in records.iter().enumerate() {
        let index = idx + 1;
        match reader.read_text(&record.absolute_path) {
            Ok(content) => {
                writeln!(out, "\n{}", format::content_delimiter(index, &record.relative_path))?;
                out.write_all(content.as_bytes())?;
                write!(out, "\n\n")?;
                debug!(index, path = %record.relative_path, bytes = content.len(), "Wrote file");
            }
            Err(e) => {
                let message = e.to_string();
                warn!(
                    index,
                    path = %record.absolute_path.display(),
                    error = %message,
                    "Failed to read source file"
                );
                writeln!(
                    out,
                    "\n{}",
                    format::read_error_delimiter(index, &record.relative_path)
                )?;
                writeln!(out, "{}\n", format::read_error_note(&message))?;
                report.read_failures.push(ReadFailure {
                    index,
                    relative_path: record.relative_path.clone(),
                    absolute_path: record.absolute_path.clone(),
                    message,
                });
            }
        }
    }

    Ok(report)
}

/// Create (or truncate) `path` and write the snapshot into it.
///
/// Missing parent directories are created. Every output-side I/O failure is
/// fatal and reported as [`ExportError::Output`].
#[instrument(skip(records, reader), fields(path = %path.display(), files = records.len()))]
pub fn write_snapshot_file<R>(
    path: &Path,
    records: &[FileRecord],
    reader: &R,
) -> Result<SnapshotReport, ExportError>
where
    R: SourceReader + ?Sized,
{
    let output_err = |source: io::Error| ExportError::Output {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(output_err)?;
        }
    }

    let file = File::create(path).map_err(output_err)?;
    let mut out = BufWriter::new(file);
    let report = write_snapshot(&mut out, records, reader).map_err(output_err)?;
    out.flush().map_err(output_err)?;

    info!(
        written = report.files_written(),
        failed = report.read_failures.len(),
        "Snapshot written"
    );
    Ok(report)
}
