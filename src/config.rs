//! Configuration System
//!
//! Layered configuration for the digest engine: built-in defaults, the
//! user's global config file, a per-root `.dirgest.toml`, and `DIRGEST_*`
//! environment variables, in increasing order of precedence.

use crate::logging::LoggingConfig;
use crate::tree::engine::DEFAULT_MAX_OPEN_FILES;
use crate::tree::hasher::Algorithm;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;
pub use sources::workspace_file::WORKSPACE_CONFIG_FILE;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirgestConfig {
    /// Hash algorithm name (see `Algorithm::supported`)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    /// Upper bound on concurrently open files and directories
    #[serde(default = "default_max_open_files")]
    pub max_open_files: usize,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_algorithm() -> String {
    Algorithm::default().name().to_string()
}

fn default_max_open_files() -> usize {
    DEFAULT_MAX_OPEN_FILES
}

impl Default for DirgestConfig {
    fn default() -> Self {
        Self {
            algorithm: default_algorithm(),
            max_open_files: default_max_open_files(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Algorithm(String),
    System(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Algorithm(msg) => write!(f, "Algorithm: {}", msg),
            ValidationError::System(msg) => write!(f, "System: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl DirgestConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.algorithm.parse::<Algorithm>() {
            errors.push(ValidationError::Algorithm(e.to_string()));
        }

        if self.max_open_files == 0 {
            errors.push(ValidationError::System(
                "max_open_files must be greater than zero".to_string(),
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
