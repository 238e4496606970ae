//! Status command implementation
//!
//! This module implements the `status` command: a connectivity check
//! against the remote service and a summary of the local catalog.

use crate::config::load_config_or_default;
use crate::detection::DetectionEngine;
use crate::remote::HttpRemoteClient;
use clap::Args;

/// Arguments for the status command
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Skip the connectivity check
    #[arg(long)]
    pub offline: bool,
}

impl StatusArgs {
    /// Execute the status command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Checking scanner status");

        println!("📊 AI Shield Status");
        println!();

        let config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {}", e);
                return Ok(2); // Configuration error exit code
            }
        };

        let engine = match DetectionEngine::from_config(&config.detection) {
            Ok(engine) => engine,
            Err(e) => {
                println!("❌ Failed to load detection patterns");
                println!("   Error: {}", e);
                return Ok(2);
            }
        };

        println!("Local detection:");
        println!(
            "  Catalog: {} ({} categories)",
            engine.variant(),
            engine.catalog().len()
        );
        for rule in engine.catalog().categories() {
            println!("    - {:<16} {}", rule.id().as_str(), rule.label());
        }
        println!();

        println!("Remote service:");
        if !config.remote.enabled {
            println!("  ⏸️  Disabled (local detection only)");
            return Ok(0);
        }
        println!("  URL: {}", config.remote.base_url);

        if self.offline {
            println!("  ⏭️  Connectivity check skipped");
            return Ok(0);
        }

        let client = match HttpRemoteClient::new(&config.remote) {
            Ok(c) => c,
            Err(e) => {
                println!("  ❌ Failed to create remote client: {}", e);
                return Ok(2);
            }
        };

        match client.health_check().await {
            Ok(()) => {
                println!("  ✅ Online");
            }
            Err(e) => {
                tracing::warn!(error_kind = e.kind(), error = %e, "Remote service unreachable");
                println!("  ⚠️  Offline ({})", e);
                println!("  Scans will fall back to the local {} catalog", engine.variant());
                println!();
                return Ok(4); // Connection error exit code
            }
        }

        println!();
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_status_offline_with_defaults() {
        let args = StatusArgs { offline: true };
        let code = args.execute("nonexistent-aishield.toml").await.unwrap();
        assert_eq!(code, 0);
    }
}
