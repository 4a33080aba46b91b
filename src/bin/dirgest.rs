//! Dirgest CLI Binary
//!
//! Command-line interface for computing deterministic directory digests.

use clap::Parser;
use dirgest::cli::{Cli, RunContext};
use dirgest::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let context = match RunContext::new(&cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("{}", dirgest::cli::map_error(&e));
            process::exit(1);
        }
    };

    // Build logging config from the loaded config and CLI flags
    let logging_config = build_logging_config(&cli, &context.config().logging);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Dirgest CLI starting");

    match context.execute(&cli).await {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", dirgest::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from the config file and CLI args.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli, base: &LoggingConfig) -> LoggingConfig {
    let mut config = base.clone();

    if cli.quiet {
        config.enabled = false;
    }
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
        // A log file without an explicit destination means "write to it"
        if cli.log_output.is_none() {
            config.output = "file".to_string();
        }
    }

    config
}
