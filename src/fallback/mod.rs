//! Remote/local fallback orchestration
//!
//! Wraps a [`RemoteDetector`](crate::remote::RemoteDetector) and the local
//! [`DetectionEngine`](crate::detection::DetectionEngine) so callers always
//! get a result, together with the explicit settings and statistics values
//! that drive a scanning session.

pub mod orchestrator;
pub mod stats;

pub use orchestrator::{FallbackOrchestrator, ProcessedText, ScanSource, DEFAULT_REMOTE_TIMEOUT};
pub use stats::{ScanSettings, ScanStats};
