//! CLI domain: parse, output and presentation only.
//! The export itself lives in [`crate::export`]; this layer only prints.

mod output;
mod parse;
mod presentation;

pub use output::map_error;
pub use parse::Cli;
pub use presentation::{
    format_fatal, format_found, format_read_failure, format_start, format_success, style_failure,
    style_success,
};
