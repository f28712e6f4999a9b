//! CLI parse: clap types for codeflat. No behavior; definitions only.
//!
//! Only logging can be adjusted from the command line. What to scan and where
//! to write come from [`crate::config`].

use clap::Parser;

/// Codeflat - flatten a project tree into one indexed text snapshot
#[derive(Parser, Debug)]
#[command(name = "codeflat")]
#[command(about = "Flatten a project tree into a single indexed text snapshot")]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}
