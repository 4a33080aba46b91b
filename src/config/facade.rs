//! Config loading entry points.

use super::{merge, sources, DirgestConfig};
use crate::error::DigestError;
use config::{Environment, File};
use std::path::Path;
use tracing::debug;

/// Loads `DirgestConfig` from layered sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for digesting `root`
    ///
    /// Precedence (lowest to highest): defaults, global file,
    /// `<root>/.dirgest.toml`, `DIRGEST_*` environment variables
    /// (`__` separates nested keys, e.g. `DIRGEST_LOGGING__LEVEL`).
    pub fn load(root: &Path) -> Result<DirgestConfig, DigestError> {
        let builder = merge::builder_with_defaults()?;
        let builder = sources::global_file::add_to_builder(builder)?;
        let builder = sources::workspace_file::add_to_builder(builder, root)?;
        let builder = builder.add_source(
            Environment::with_prefix("DIRGEST")
                .prefix_separator("_")
                .separator("__"),
        );

        let config: DirgestConfig = builder.build()?.try_deserialize()?;
        debug!(algorithm = %config.algorithm, "Configuration loaded");
        Ok(config)
    }

    /// Load configuration from a single file on top of the defaults
    pub fn load_from_file(path: &Path) -> Result<DirgestConfig, DigestError> {
        let config = merge::builder_with_defaults()?
            .add_source(File::from(path).required(true))
            .build()?
            .try_deserialize()?;
        Ok(config)
    }
}
