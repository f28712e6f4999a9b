//! Source file reading with lossy UTF-8 decoding.

use std::fs;
use std::io;
use std::path::Path;

/// Reads source files as text for the content section.
///
/// Implementations must not fail on invalid encodings; only I/O problems are
/// reported as errors.
pub trait SourceReader {
    fn read_text(&self, path: &Path) -> io::Result<String>;
}

/// Reads from the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl SourceReader for FsReader {
    fn read_text(&self, path: &Path) -> io::Result<String> {
        let bytes = fs::read(path)?;
        Ok(decode_lossy(bytes))
    }
}

/// Decode bytes as UTF-8, replacing each invalid sequence with U+FFFD.
///
/// Line endings and a leading byte-order mark are preserved.
pub fn decode_lossy(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}
