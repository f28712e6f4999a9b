//! Progress messages printed to stdout during a run.

use crate::error::ReadFailure;
use owo_colors::OwoColorize;
use std::path::Path;

pub fn format_start(base_dir: &Path) -> String {
    format!("Iniciando escaneo de archivos en: {}", base_dir.display())
}

pub fn format_found(count: usize, output_path: &Path) -> String {
    format!(
        "Se encontraron {} archivos válidos. Escribiendo en {}...",
        count,
        output_path.display()
    )
}

pub fn format_read_failure(failure: &ReadFailure) -> String {
    format!(
        "  ERROR al leer el archivo {}: {}",
        failure.absolute_path.display(),
        failure.message
    )
}

pub fn format_success(output_path: &Path) -> String {
    let name = output_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| output_path.display().to_string());
    format!("¡Éxito! El archivo '{}' ha sido creado.", name)
}

pub fn format_fatal(message: &str) -> String {
    format!("ERROR FATAL al escribir el archivo de salida: {}", message)
}

/// Bold green, for the final success line
pub fn style_success(line: &str) -> String {
    format!("{}", line.green().bold())
}

/// Bold red, for fatal errors
pub fn style_failure(line: &str) -> String {
    format!("{}", line.red().bold())
}
