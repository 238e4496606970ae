//! Logs command implementation
//!
//! This module implements the `logs` command: fetch raw audit records from
//! the remote service or the local audit file, normalize them and print
//! them.

use crate::audit::{filter_by_decision, normalize, read_records, AuditRecord, AuditRecordRaw, PolicyDecision};
use crate::config::{load_config_or_default, ShieldConfig};
use crate::remote::HttpRemoteClient;
use clap::Args;

/// Arguments for the logs command
#[derive(Args, Debug)]
pub struct LogsArgs {
    /// Read the local audit file instead of the remote service
    #[arg(long)]
    pub local: bool,

    /// Only show records with this decision (masked, blocked, warning, allowed)
    #[arg(long)]
    pub decision: Option<PolicyDecision>,

    /// Print records as JSON
    #[arg(long)]
    pub json: bool,
}

impl LogsArgs {
    /// Execute the logs command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ Failed to load configuration file");
                eprintln!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        let raw = match self.load_raw_records(&config).await {
            Ok(records) => records,
            Err(code) => return Ok(code),
        };

        let mut records = normalize(&raw);
        if let Some(decision) = self.decision {
            records = filter_by_decision(records, decision);
        }
        tracing::info!(raw = raw.len(), shown = records.len(), "Audit records normalized");

        if self.json {
            println!("{}", serde_json::to_string_pretty(&records)?);
        } else {
            Self::print_table(&records);
        }
        Ok(0)
    }

    /// Raw records, or the exit code to return
    async fn load_raw_records(&self, config: &ShieldConfig) -> Result<Vec<AuditRecordRaw>, i32> {
        if self.local {
            let path = &config.audit.log_path;
            if !path.exists() {
                eprintln!("No local audit records found at {}", path.display());
                return Ok(Vec::new());
            }
            return read_records(path).map_err(|e| {
                eprintln!("❌ Failed to read audit log");
                eprintln!("   Error: {e}");
                5 // Fatal error exit code
            });
        }

        let client = HttpRemoteClient::new(&config.remote).map_err(|e| {
            eprintln!("❌ Failed to create remote client");
            eprintln!("   Error: {e}");
            2
        })?;

        match client.fetch_logs().await {
            Ok(values) => Ok(values.iter().map(AuditRecordRaw::from_value).collect()),
            Err(e) => {
                tracing::warn!(error_kind = e.kind(), error = %e, "Failed to fetch audit logs");
                eprintln!("❌ Failed to fetch audit logs from {}", client.base_url());
                eprintln!("   Error: {e}");
                eprintln!("   Use --local to read the local audit file");
                Err(4) // Connection error exit code
            }
        }
    }

    fn print_table(records: &[AuditRecord]) {
        if records.is_empty() {
            println!("No audit records to show.");
            return;
        }

        println!("Found {} audit record(s):", records.len());
        println!();
        println!(
            "{:<26} {:<12} {:<9} {:<9} {:<24} {}",
            "Timestamp", "Kind", "Decision", "Entities", "Redactions", "Input"
        );
        println!("{}", "-".repeat(110));

        for record in records {
            let redactions: Vec<_> = record.redactions.iter().map(|r| r.category.as_str()).collect();
            println!(
                "{:<26} {:<12} {:<9} {:<9} {:<24} {}",
                record.timestamp.as_deref().unwrap_or("-"),
                record.kind.label(),
                record.policy_decision,
                record.entities_count,
                truncate(&redactions.join(","), 24),
                truncate(&record.input_hash, 32)
            );
        }
        println!();
    }
}

fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }
    let mut truncated: String = value.chars().take(max_chars.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
        assert_eq!(truncate("ééééé", 5), "ééééé");
    }

    #[tokio::test]
    async fn test_load_local_records() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("scans.jsonl");
        std::fs::write(&log_path, "{\"original_hash\":\"a\"}\nbroken\n").unwrap();

        let mut config = ShieldConfig::default();
        config.audit.log_path = log_path;

        let args = LogsArgs {
            local: true,
            decision: None,
            json: false,
        };
        let records = args.load_raw_records(&config).await.unwrap();
        assert_eq!(records.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_local_file_is_empty() {
        let mut config = ShieldConfig::default();
        config.audit.log_path = "/nonexistent/scans.jsonl".into();

        let args = LogsArgs {
            local: true,
            decision: Some(PolicyDecision::Masked),
            json: true,
        };
        assert!(args.load_raw_records(&config).await.unwrap().is_empty());
    }
}
