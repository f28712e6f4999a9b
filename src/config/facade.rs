//! Config loading facade

use super::merge;
use super::sources::{environment, global_file, workspace_file};
use super::CodeflatConfig;
use crate::error::ExportError;
use config::File;
use std::path::{Path, PathBuf};

/// Loads [`CodeflatConfig`] from layered sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a run started in `workspace_root`.
    ///
    /// Precedence (lowest to highest): defaults, global file, workspace
    /// `codeflat.toml`, `CODEFLAT_*` environment variables.
    pub fn load(workspace_root: &Path) -> Result<CodeflatConfig, ExportError> {
        let builder = merge::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?.try_deserialize::<CodeflatConfig>()?;
        Ok(config)
    }

    /// Load a single configuration file over the defaults.
    pub fn load_from_file(path: &Path) -> Result<CodeflatConfig, ExportError> {
        let config = merge::builder_with_defaults()?
            .add_source(File::from(path).required(true))
            .build()?
            .try_deserialize::<CodeflatConfig>()?;
        Ok(config)
    }

    /// Built-in defaults without consulting any source.
    pub fn defaults() -> CodeflatConfig {
        CodeflatConfig::default()
    }

    /// Location of the global configuration file, if one can be determined
    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }
}
