//! CLI route: run context and dispatch to the digest engine and presentation.

use crate::cli::output::{format_algorithms, format_config, format_digest, OutputMode};
use crate::cli::parse::Cli;
use crate::config::{ConfigLoader, DirgestConfig};
use crate::error::DigestError;
use crate::tree::engine::DigestEngine;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Runtime context for CLI execution: the root to digest and the effective config.
pub struct RunContext {
    root: Option<PathBuf>,
    config: DirgestConfig,
}

impl RunContext {
    /// Load configuration for the CLI invocation.
    ///
    /// `--config` replaces layered loading; a positional algorithm overrides
    /// whatever the configuration says. The result is validated before any
    /// logging or traversal starts. `--list-algorithms` needs no configuration
    /// and loads none.
    pub fn new(cli: &Cli) -> Result<Self, DigestError> {
        if cli.list_algorithms {
            return Ok(Self {
                root: cli.path.clone(),
                config: DirgestConfig::default(),
            });
        }

        let mut config = if let Some(ref cfg_path) = cli.config {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            let lookup_root = cli.path.as_deref().unwrap_or_else(|| Path::new("."));
            ConfigLoader::load(lookup_root)?
        };

        if let Some(ref algorithm) = cli.algorithm {
            config.algorithm = algorithm.clone();
        }

        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            DigestError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;

        Ok(Self {
            root: cli.path.clone(),
            config,
        })
    }

    pub fn config(&self) -> &DirgestConfig {
        &self.config
    }

    /// Execute the invocation and return the text to print on stdout.
    pub async fn execute(&self, cli: &Cli) -> Result<String, DigestError> {
        if cli.list_algorithms {
            return Ok(format_algorithms());
        }
        if cli.show_config {
            return format_config(&self.config);
        }

        let root = self.root.as_ref().ok_or_else(|| {
            DigestError::InvalidArgument("root is required (non-empty path)".to_string())
        })?;

        let engine = DigestEngine::from_config(&self.config)?;
        debug!(root = %root.display(), algorithm = %engine.algorithm(), "Running digest");
        let node = engine.digest(root).await?;

        let mode = if cli.hash_only {
            OutputMode::HashOnly
        } else if cli.compact {
            OutputMode::Compact
        } else {
            OutputMode::Pretty
        };
        format_digest(&node, mode)
    }
}
