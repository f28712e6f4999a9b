//! Merge rules: defaults first, later sources override earlier ones.
//!
//! Order: defaults, global file, workspace file, environment.

use crate::config::DEFAULT_OUTPUT_FILE;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
///
/// Selection sets are not seeded here; their serde defaults apply when a
/// source leaves them unset, so a file that sets `extensions` replaces the
/// whole set instead of merging element-wise.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("export.base_dir", ".")?
        .set_default("export.output_file", DEFAULT_OUTPUT_FILE)?
        .set_default("logging.level", "warn")?
        .set_default("logging.format", "text")?
        .set_default("logging.output", "stderr")
}
