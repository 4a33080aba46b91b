//! CLI output: rendering of digest results, configuration, and errors.

use crate::config::DirgestConfig;
use crate::error::DigestError;
use crate::tree::hasher::Algorithm;
use crate::tree::node::DigestNode;
use serde::Serialize;

/// How a digest result is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// JSON indented with four spaces
    Pretty,
    /// Single-line JSON
    Compact,
    /// Root hash only
    HashOnly,
}

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &DigestError) -> String {
    match e {
        DigestError::Io { path, source } => format!("{}: {}", path.display(), source),
        other => other.to_string(),
    }
}

/// Render a digest result
pub fn format_digest(node: &DigestNode, mode: OutputMode) -> Result<String, DigestError> {
    match mode {
        OutputMode::HashOnly => Ok(node.digest.clone()),
        OutputMode::Compact => Ok(serde_json::to_string(node)?),
        OutputMode::Pretty => {
            let mut buf = Vec::new();
            let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
            let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
            node.serialize(&mut serializer)?;
            String::from_utf8(buf).map_err(|e| DigestError::Serialization(e.to_string()))
        }
    }
}

/// One supported algorithm per line, default marked
pub fn format_algorithms() -> String {
    let default = Algorithm::default().name();
    Algorithm::supported()
        .into_iter()
        .map(|name| {
            if name == default {
                format!("{} (default)", name)
            } else {
                name.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Effective configuration as TOML
pub fn format_config(config: &DirgestConfig) -> Result<String, DigestError> {
    toml::to_string_pretty(config).map_err(|e| DigestError::Serialization(e.to_string()))
}
