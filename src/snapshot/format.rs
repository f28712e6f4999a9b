//! Snapshot text framing: section headers and per-file delimiters.

/// First line of the index section
pub const INDEX_HEADER: &str = "# ÍNDICE DE ARCHIVOS (ESTRUCTURA REFACTORIZADA)";

/// First line of the content section
pub const CONTENT_HEADER: &str = "# CONTENIDO DE ARCHIVOS";

/// One index line, without the trailing newline: `3. src/main.ts`
pub fn index_entry(index: usize, relative_path: &str) -> String {
    format!("{}. {}", index, relative_path)
}

/// Delimiter line preceding a file's content: `// ====== [3] src/main.ts ======`
pub fn content_delimiter(index: usize, relative_path: &str) -> String {
    format!("// ====== [{}] {} ======", index, relative_path)
}

/// Delimiter line for a file that could not be read.
pub fn read_error_delimiter(index: usize, relative_path: &str) -> String {
    format!("// ====== [{}] {} (ERROR DE LECTURA) ======", index, relative_path)
}

/// Placeholder body line written in place of unreadable content.
pub fn read_error_note(message: &str) -> String {
    format!("// No se pudo leer el archivo. Error: {}", message)
}
