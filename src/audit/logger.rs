//! Local audit logger for scan operations
//!
//! Appends one raw record per scan to a JSON-lines file, in the same shape
//! the remote service writes, so both sources normalize the same way.

use super::records::{AuditRecordRaw, RawEntity};
use crate::config::AuditConfig;
use crate::detection::{hash_text, DetectionResult};
use crate::domain::{Result, ShieldError};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Producer type written by this logger
pub const TEXT_SCAN_TYPE: &str = "process_text";

/// Audit logger for scan operations
#[derive(Debug, Clone)]
pub struct AuditLogger {
    log_path: PathBuf,
    enabled: bool,
}

impl AuditLogger {
    /// Create a new audit logger
    pub fn new(log_path: PathBuf, enabled: bool) -> Result<Self> {
        if enabled {
            // Ensure parent directory exists
            if let Some(parent) = log_path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|e| {
                    ShieldError::Io(format!(
                        "Failed to create audit log directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }

        Ok(Self { log_path, enabled })
    }

    /// Create a logger from the `[audit]` configuration section
    pub fn from_config(config: &AuditConfig) -> Result<Self> {
        Self::new(config.log_path.clone(), config.enabled)
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record one scan
    ///
    /// Only the SHA-256 of the input and the entity categories are written;
    /// matched text never reaches the file.
    pub fn log_scan(&self, result: &DetectionResult) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let record = Self::scan_record(result, chrono::Utc::now().timestamp_millis() as f64 / 1000.0);
        self.write_record(&record)?;

        tracing::debug!(
            path = %self.log_path.display(),
            entities = result.entities.len(),
            "Audit record written"
        );
        Ok(())
    }

    fn scan_record(result: &DetectionResult, ts: f64) -> AuditRecordRaw {
        AuditRecordRaw {
            record_type: Some(TEXT_SCAN_TYPE.to_string()),
            ts: Some(ts),
            original_hash: Some(hash_text(&result.original_text)),
            entities: Some(
                result
                    .entities
                    .iter()
                    .map(|span| RawEntity {
                        category: Some(span.category.as_str().to_string()),
                        text: None,
                    })
                    .collect(),
            ),
            ..AuditRecordRaw::default()
        }
    }

    /// Write an audit record to the log file
    fn write_record(&self, record: &AuditRecordRaw) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| {
                ShieldError::Io(format!(
                    "Failed to open audit log {}: {e}",
                    self.log_path.display()
                ))
            })?;

        let json_line = serde_json::to_string(record)?;
        writeln!(file, "{json_line}")?;

        Ok(())
    }
}

/// Read raw records from a JSON-lines audit file
///
/// Blank lines are skipped; lines that are not valid JSON become empty
/// records so that the remaining lines still normalize.
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<AuditRecordRaw>> {
    let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
        ShieldError::Io(format!(
            "Failed to read audit log {}: {e}",
            path.as_ref().display()
        ))
    })?;

    Ok(content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(AuditRecordRaw::from_json_line)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::normalizer::normalize;
    use crate::audit::records::PolicyDecision;
    use crate::detection::{CategoryId, Span};
    use tempfile::tempdir;

    fn ssn_result() -> DetectionResult {
        DetectionResult {
            original_text: "SSN 123-45-6789".to_string(),
            redacted_text: "SSN [REDACTED]".to_string(),
            entities: vec![Span::new(CategoryId::Ssn, "123-45-6789", 4, 15)],
            has_pii: true,
        }
    }

    #[test]
    fn test_audit_logger_creation() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("nested").join("scans.jsonl");

        let logger = AuditLogger::new(log_path.clone(), true).unwrap();
        assert!(logger.is_enabled());
        assert!(log_path.parent().unwrap().exists());
    }

    #[test]
    fn test_log_scan_never_writes_plaintext() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("scans.jsonl");
        let logger = AuditLogger::new(log_path.clone(), true).unwrap();

        logger.log_scan(&ssn_result()).unwrap();

        let content = std::fs::read_to_string(&log_path).unwrap();
        assert!(content.contains("process_text"));
        assert!(content.contains(&hash_text("SSN 123-45-6789")));
        assert!(!content.contains("123-45-6789"));
    }

    #[test]
    fn test_disabled_logger_writes_nothing() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("scans.jsonl");
        let logger = AuditLogger::new(log_path.clone(), false).unwrap();

        logger.log_scan(&ssn_result()).unwrap();
        assert!(!log_path.exists());
    }

    #[test]
    fn test_written_records_normalize() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("scans.jsonl");
        let logger = AuditLogger::new(log_path.clone(), true).unwrap();

        logger.log_scan(&ssn_result()).unwrap();
        logger
            .log_scan(&DetectionResult::clean("nothing here"))
            .unwrap();

        let normalized = normalize(&read_records(&log_path).unwrap());
        assert_eq!(normalized.len(), 2);
        assert_eq!(normalized[0].policy_decision, PolicyDecision::Masked);
        assert_eq!(normalized[0].redactions[0].category, "SSN");
        assert!(normalized[0].timestamp.is_some());
        assert_eq!(normalized[1].policy_decision, PolicyDecision::Allowed);
    }

    #[test]
    fn test_read_records_tolerates_bad_lines() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("scans.jsonl");
        std::fs::write(
            &log_path,
            "{\"original_hash\":\"a\"}\n\n   \nnot json\n{\"original_hash\":\"b\"}\n",
        )
        .unwrap();

        let records = read_records(&log_path).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[1], AuditRecordRaw::default());
    }

    #[test]
    fn test_read_missing_file_is_error() {
        assert!(read_records("/nonexistent/scans.jsonl").is_err());
    }
}
