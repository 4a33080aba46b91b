//! Per-root config file source: `<root>/.dirgest.toml`

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File};
use std::path::Path;

/// File name looked up in the directory being digested.
pub const WORKSPACE_CONFIG_FILE: &str = ".dirgest.toml";

/// Add the per-root config file to builder.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let config_path = root.join(WORKSPACE_CONFIG_FILE);
    if config_path.is_file() {
        return Ok(builder.add_source(File::from(config_path.as_path()).required(false)));
    }
    Ok(builder)
}
