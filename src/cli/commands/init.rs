//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "aishield.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing AI Shield configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::sample_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Point [remote] base_url at your scanning service");
                println!("  3. Validate configuration: aishield validate-config");
                println!("  4. Scan some text: aishield scan \"Contact me at jane@example.com\"");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Sample configuration with every section at its default
    pub fn sample_config() -> &'static str {
        r#"# AI Shield Configuration File
# PII detection and redaction for prompts sent to AI services

[application]
log_level = "info"            # trace | debug | info | warn | error

[detection]
catalog = "extended"          # extended | minimal
# pattern_overrides = "patterns.toml"

[remote]
enabled = true
base_url = "http://localhost:5000"
timeout_seconds = 5
health_timeout_seconds = 3

[scan]
enabled = true
auto_redact = true
show_warnings = true

[audit]
enabled = true
log_path = "./audit/scans.jsonl"

[logging]
local_enabled = false
local_path = "./logs"
local_rotation = "daily"      # daily | hourly
"#
    }
}
