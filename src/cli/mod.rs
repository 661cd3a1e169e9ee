//! Command-line interface definitions.

pub mod check;
pub mod output;
pub mod run;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ethoracle - ETH price oracle relay and update client.
#[derive(Parser, Debug)]
#[command(name = "ethoracle")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    /// Override log level (debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long, global = true)]
    pub json_logs: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Relay price requests from the oracle contract (foreground)
    Oracle,

    /// Periodically request price updates through the caller contract
    Client,

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `ethoracle check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file and environment
    Config,
}
