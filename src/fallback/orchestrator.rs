//! Remote-first detection with local fallback
//!
//! Each call makes exactly one remote attempt, bounded by a timeout. Any
//! failure (transport, status, malformed body, timeout) is logged as a
//! warning and answered by the local [`DetectionEngine`] instead. There are
//! no retries and no state carried between calls.

use super::stats::ScanStats;
use crate::detection::{CatalogVariant, DetectionEngine, DetectionResult};
use crate::domain::RemoteError;
use crate::remote::RemoteDetector;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Default bound on the remote attempt
pub const DEFAULT_REMOTE_TIMEOUT: Duration = Duration::from_secs(5);

/// Which path produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanSource {
    Remote,
    Local,
}

impl fmt::Display for ScanSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote => f.write_str("remote"),
            Self::Local => f.write_str("local"),
        }
    }
}

/// A detection result together with its origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedText {
    pub result: DetectionResult,
    pub source: ScanSource,
}

/// Fallback orchestrator
pub struct FallbackOrchestrator {
    engine: Arc<DetectionEngine>,
    remote: Option<Arc<dyn RemoteDetector>>,
    timeout: Duration,
}

impl FallbackOrchestrator {
    /// Create an orchestrator that tries `remote` first
    pub fn new(engine: Arc<DetectionEngine>, remote: Arc<dyn RemoteDetector>) -> Self {
        Self {
            engine,
            remote: Some(remote),
            timeout: DEFAULT_REMOTE_TIMEOUT,
        }
    }

    /// Create an orchestrator that always runs locally
    pub fn local_only(engine: Arc<DetectionEngine>) -> Self {
        Self {
            engine,
            remote: None,
            timeout: DEFAULT_REMOTE_TIMEOUT,
        }
    }

    /// Set the bound on the remote attempt
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Catalog variant used when falling back
    pub fn local_variant(&self) -> CatalogVariant {
        self.engine.variant()
    }

    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Detect PII, remote first, local on any failure
    pub async fn process_text(&self, text: &str) -> DetectionResult {
        self.process_text_with_source(text).await.result
    }

    /// Like [`process_text`](Self::process_text), also reporting which path answered
    pub async fn process_text_with_source(&self, text: &str) -> ProcessedText {
        if let Some(remote) = &self.remote {
            match self.attempt_remote(remote.as_ref(), text).await {
                Ok(result) => {
                    tracing::debug!(entities = result.entities.len(), "Remote detection succeeded");
                    return ProcessedText {
                        result,
                        source: ScanSource::Remote,
                    };
                }
                Err(e) => {
                    tracing::warn!(
                        error_kind = e.kind(),
                        error = %e,
                        variant = %self.local_variant(),
                        "Remote detection failed, using local detection"
                    );
                }
            }
        }

        ProcessedText {
            result: self.engine.detect(text),
            source: ScanSource::Local,
        }
    }

    /// Detect PII and account for the scan in `stats`
    pub async fn process_and_record(&self, text: &str, stats: &mut ScanStats) -> DetectionResult {
        let processed = self.process_text_with_source(text).await;
        stats.record(&processed.result, processed.source);
        processed.result
    }

    async fn attempt_remote(
        &self,
        remote: &dyn RemoteDetector,
        text: &str,
    ) -> Result<DetectionResult, RemoteError> {
        match tokio::time::timeout(self.timeout, remote.detect(text)).await {
            Ok(result) => result,
            Err(_) => Err(RemoteError::Timeout(format!(
                "no response within {} ms",
                self.timeout.as_millis()
            ))),
        }
    }
}
