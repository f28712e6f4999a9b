//! CLI output: error mapping from export errors to the console surface.

use crate::error::ExportError;

/// Map export errors to a string for CLI output.
pub fn map_error(e: &ExportError) -> String {
    match e {
        ExportError::Output { source, .. } => source.to_string(),
        other => other.to_string(),
    }
}
