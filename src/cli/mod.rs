//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for AI Shield using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// AI Shield - PII detection and redaction for AI prompts
#[derive(Parser, Debug)]
#[command(name = "aishield")]
#[command(version, about, long_about = None)]
#[command(author = "AI Shield Contributors")]
pub struct Cli {
    /// Path to configuration file (defaults are used when it does not exist)
    #[arg(short, long, default_value = "aishield.toml", env = "AISHIELD_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "AISHIELD_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Detect and redact PII in text
    Scan(commands::scan::ScanArgs),

    /// Show normalized audit records
    Logs(commands::logs::LogsArgs),

    /// Check the remote service and show the local catalog
    Status(commands::status::StatusArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),
}
