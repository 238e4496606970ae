//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the AI Shield configuration file.

use crate::config::load_config;
use crate::detection::DetectionEngine;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // Loading validates every section
        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        // Pattern overrides only fail once compiled
        let engine = match DetectionEngine::from_config(&config.detection) {
            Ok(engine) => engine,
            Err(e) => {
                println!("❌ Detection patterns are invalid");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!(
            "  Catalog: {} ({} categories)",
            engine.variant(),
            engine.catalog().len()
        );
        if let Some(path) = &config.detection.pattern_overrides {
            println!("  Pattern Overrides: {}", path.display());
        }
        if config.remote.enabled {
            println!("  Remote Service: {}", config.remote.base_url);
            println!("  Remote Timeout: {}s", config.remote.timeout_seconds);
        } else {
            println!("  Remote Service: disabled");
        }
        println!("  Auto Redact: {}", config.scan.auto_redact);
        if config.audit.enabled {
            println!("  Audit Log: {}", config.audit.log_path.display());
        } else {
            println!("  Audit Log: disabled");
        }
        if config.logging.local_enabled {
            println!(
                "  File Logging: {} ({})",
                config.logging.local_path, config.logging.local_rotation
            );
        }
        println!();

        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_validate_missing_file() {
        let code = ValidateArgs {}.execute("nonexistent-aishield.toml").await.unwrap();
        assert_eq!(code, 2);
    }

    #[tokio::test]
    async fn test_validate_bad_override_pattern() {
        let mut patterns = NamedTempFile::new().unwrap();
        writeln!(patterns, "[patterns]\nssn = '(unclosed'").unwrap();

        let mut config = NamedTempFile::new().unwrap();
        writeln!(
            config,
            "[detection]\npattern_overrides = '{}'",
            patterns.path().display()
        )
        .unwrap();

        let code = ValidateArgs {}
            .execute(&config.path().to_string_lossy())
            .await
            .unwrap();
        assert_eq!(code, 2);
    }
}
