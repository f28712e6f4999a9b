//! Codeflat CLI Binary
//!
//! Scans the configured base directory and writes the indexed snapshot.

use anyhow::Context;
use clap::Parser;
use codeflat::cli::{self, Cli};
use codeflat::config::{format_validation_errors, CodeflatConfig, ConfigLoader};
use codeflat::error::ExportError;
use codeflat::export;
use codeflat::logging::{init_logging, LoggingConfig};
use codeflat::snapshot::FsReader;
use std::process;
use tracing::{debug, error, info};

fn main() {
    let cli = Cli::parse();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{:#}", e);
            process::exit(1);
        }
    };

    let logging_config = build_logging_config(&cli, &config.logging);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Codeflat starting");

    if let Err(errors) = config.validate() {
        let message = format_validation_errors(&errors);
        error!("Invalid configuration: {}", message);
        eprintln!("{}", message);
        process::exit(1);
    }

    let export_config = &config.export;
    println!("{}", cli::format_start(&export_config.base_dir));

    let records = export::scan(export_config);
    println!(
        "{}",
        cli::format_found(records.len(), &export_config.output_path())
    );

    match export::export_records(export_config, &records, &FsReader) {
        Ok(report) => {
            for failure in &report.snapshot.read_failures {
                println!("{}", cli::format_read_failure(failure));
            }
            info!(
                files = report.snapshot.files,
                failed = report.snapshot.read_failures.len(),
                "Export completed"
            );
            println!(
                "{}",
                cli::style_success(&cli::format_success(&report.output_path))
            );
        }
        Err(e) => {
            println!("{}", fatal_line(&e));
            process::exit(1);
        }
    }
}

/// Console line for a fatal export error. The line on stdout is the only
/// user-facing report; the log only carries it at debug level.
fn fatal_line(err: &ExportError) -> String {
    debug!(error = %err, "Export failed");
    cli::style_failure(&cli::format_fatal(&cli::map_error(err)))
}

/// Load layered configuration for the current directory.
fn load_config() -> anyhow::Result<CodeflatConfig> {
    let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
    ConfigLoader::load(&cwd).context("Failed to load configuration")
}

/// Apply logging flags on top of the loaded logging configuration.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli, base: &LoggingConfig) -> LoggingConfig {
    let mut config = base.clone();

    if cli.quiet {
        config.enabled = false;
    }
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }

    config
}
