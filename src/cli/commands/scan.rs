//! Scan command implementation
//!
//! This module implements the `scan` command: detect and redact PII in a
//! piece of text, remote first with local fallback.

use crate::audit::AuditLogger;
use crate::config::{load_config_or_default, RemoteConfig};
use crate::detection::{CatalogVariant, DetectionEngine, DetectionResult, EntityStats};
use crate::fallback::{FallbackOrchestrator, ScanSettings, ScanSource, ScanStats};
use crate::log_scan_result;
use crate::remote::HttpRemoteClient;
use anyhow::Context;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Arguments for the scan command
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Text to scan (stdin is read when neither TEXT nor --file is given)
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(short, long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Skip the remote service and scan locally
    #[arg(long)]
    pub offline: bool,

    /// Use the minimal pattern catalog
    #[arg(long)]
    pub minimal: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with code 1 when PII is found
    #[arg(long)]
    pub fail_on_pii: bool,
}

/// JSON output of a scan
#[derive(Debug, Serialize)]
struct ScanReport<'a> {
    #[serde(flatten)]
    result: &'a DetectionResult,
    source: ScanSource,
    stats: EntityStats,
}

impl ScanArgs {
    /// Execute the scan command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ Failed to load configuration file");
                eprintln!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        let input = self.read_input()?;
        let settings = ScanSettings::from(&config.scan);

        if !settings.enabled {
            tracing::info!("Scanning disabled, passing text through");
            println!("{input}");
            return Ok(0);
        }

        let mut detection = config.detection.clone();
        if self.minimal {
            detection.catalog = CatalogVariant::Minimal;
        }

        let engine = match DetectionEngine::from_config(&detection) {
            Ok(engine) => Arc::new(engine),
            Err(e) => {
                eprintln!("❌ Failed to load detection patterns");
                eprintln!("   Error: {e}");
                return Ok(2);
            }
        };

        let orchestrator = match self.build_orchestrator(engine, &config.remote) {
            Ok(o) => o,
            Err(e) => {
                eprintln!("❌ Failed to create remote client");
                eprintln!("   Error: {e}");
                return Ok(2);
            }
        };

        let started = Instant::now();
        let mut stats = ScanStats::new();
        let processed = orchestrator.process_text_with_source(&input).await;
        stats.record(&processed.result, processed.source);
        log_scan_result!(processed.source, stats.pii_found, started.elapsed());

        self.write_audit_record(&config.audit, &processed.result);

        if self.json {
            let report = ScanReport {
                result: &processed.result,
                source: processed.source,
                stats: processed.result.stats(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            Self::print_result(&processed.result, processed.source, &settings);
        }

        if self.fail_on_pii && processed.result.has_pii {
            return Ok(1);
        }
        Ok(0)
    }

    fn read_input(&self) -> anyhow::Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        if let Some(path) = &self.file {
            return std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()));
        }

        std::io::read_to_string(std::io::stdin()).context("Failed to read text from stdin")
    }

    fn build_orchestrator(
        &self,
        engine: Arc<DetectionEngine>,
        remote: &RemoteConfig,
    ) -> crate::domain::Result<FallbackOrchestrator> {
        if self.offline || !remote.enabled {
            return Ok(FallbackOrchestrator::local_only(engine));
        }

        let client = HttpRemoteClient::new(remote)?;
        Ok(FallbackOrchestrator::new(engine, Arc::new(client)).with_timeout(remote.timeout()))
    }

    fn write_audit_record(&self, config: &crate::config::AuditConfig, result: &DetectionResult) {
        let outcome = AuditLogger::from_config(config).and_then(|logger| logger.log_scan(result));
        if let Err(e) = outcome {
            tracing::warn!(error = %e, "Failed to write audit record");
        }
    }

    fn print_result(result: &DetectionResult, source: ScanSource, settings: &ScanSettings) {
        if result.has_pii && settings.show_warnings {
            eprintln!(
                "⚠️  {} PII entit{} detected ({source} scan)",
                result.entities.len(),
                if result.entities.len() == 1 { "y" } else { "ies" }
            );
            for entity in &result.entities {
                eprintln!(
                    "   - {} at {}..{}",
                    entity.category.label(),
                    entity.start,
                    entity.end
                );
            }
        }

        println!("{}", settings.output_text(result));
    }
}
