//! Error types for the directory digest engine.

use std::path::PathBuf;
use thiserror::Error;

/// Digest-related errors
#[derive(Debug, Error)]
pub enum DigestError {
    #[error("Unsupported hash algorithm '{name}'. Supported algorithms: {supported}")]
    UnsupportedAlgorithm { name: String, supported: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Entries in {dir:?} collide on display name '{name}'")]
    DuplicateEntryName { dir: PathBuf, name: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl DigestError {
    /// Attach the failing path to an I/O error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DigestError::Io {
            path: path.into(),
            source,
        }
    }

    /// Underlying I/O error kind, if this is an I/O failure
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            DigestError::Io { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for DigestError {
    fn from(err: serde_json::Error) -> Self {
        DigestError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for DigestError {
    fn from(err: config::ConfigError) -> Self {
        DigestError::ConfigError(err.to_string())
    }
}
