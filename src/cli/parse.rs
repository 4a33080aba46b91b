//! CLI parse: clap types for Dirgest. No behavior; definitions only.

use clap::Parser;
use std::path::PathBuf;

/// Dirgest CLI - Deterministic directory digests
#[derive(Parser, Debug)]
#[command(name = "dirgest")]
#[command(about = "Compute a single deterministic content digest for a directory tree")]
pub struct Cli {
    /// Directory to digest
    #[arg(required_unless_present_any = ["list_algorithms", "show_config"])]
    pub path: Option<PathBuf>,

    /// Hash algorithm (overrides configuration; see --list-algorithms)
    pub algorithm: Option<String>,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print only the root hash
    #[arg(long, conflicts_with = "compact")]
    pub hash_only: bool,

    /// Print the digest tree as single-line JSON
    #[arg(long)]
    pub compact: bool,

    /// List supported hash algorithms and exit
    #[arg(long)]
    pub list_algorithms: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub show_config: bool,

    /// Enable debug logging on stderr
    #[arg(long, short)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, short, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
