//! Merge rules: defaults applied underneath every other source.

use crate::tree::engine::DEFAULT_MAX_OPEN_FILES;
use crate::tree::hasher::Algorithm;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("algorithm", Algorithm::default().name())?
        .set_default("max_open_files", DEFAULT_MAX_OPEN_FILES as u64)
}
