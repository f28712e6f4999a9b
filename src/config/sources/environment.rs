//! Environment source: CODEFLAT_<SECTION>__<KEY>, e.g. CODEFLAT_EXPORT__BASE_DIR

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

pub const ENV_PREFIX: &str = "CODEFLAT";

/// Add scalar overrides from the environment. Selection sets are file-only.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__"),
    ))
}
