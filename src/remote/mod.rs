//! Remote scanning service
//!
//! This module defines the [`RemoteDetector`] trait that abstracts the
//! remote detection call, so the fallback orchestrator can be driven by the
//! HTTP client in production and by in-process fakes in tests.

pub mod client;
pub mod models;

pub use client::HttpRemoteClient;
pub use models::{LogsResponse, WireDetectionResult};

use crate::detection::DetectionResult;
use crate::domain::RemoteError;
use async_trait::async_trait;

/// A service that can detect PII on our behalf
///
/// Every error is recoverable: callers fall back to local detection.
#[async_trait]
pub trait RemoteDetector: Send + Sync {
    /// Run detection remotely and return the service's result
    async fn detect(&self, text: &str) -> Result<DetectionResult, RemoteError>;
}
