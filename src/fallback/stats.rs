//! Scan settings and statistics
//!
//! Both are plain values owned by the caller and passed in explicitly.

use super::orchestrator::ScanSource;
use crate::detection::DetectionResult;
use serde::{Deserialize, Serialize};

/// User-facing scan behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSettings {
    /// Run detection at all
    pub enabled: bool,

    /// Substitute the redacted text for the original
    pub auto_redact: bool,

    /// Print a warning when PII is found
    pub show_warnings: bool,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            auto_redact: true,
            show_warnings: true,
        }
    }
}

impl ScanSettings {
    /// Text to forward after a scan: redacted when `auto_redact` is on
    pub fn output_text<'a>(&self, result: &'a DetectionResult) -> &'a str {
        if self.auto_redact {
            &result.redacted_text
        } else {
            &result.original_text
        }
    }
}

/// Running totals across scans
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    /// Number of texts scanned
    pub scans: u64,

    /// Total entities found
    pub pii_found: u64,

    /// Scans answered by the remote service
    pub remote_scans: u64,

    /// Scans answered by the local engine
    pub local_fallbacks: u64,
}

impl ScanStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one completed scan
    pub fn record(&mut self, result: &DetectionResult, source: ScanSource) {
        self.scans += 1;
        self.pii_found += result.entities.len() as u64;
        match source {
            ScanSource::Remote => self.remote_scans += 1,
            ScanSource::Local => self.local_fallbacks += 1,
        }
    }
}
