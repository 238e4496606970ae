//! PII detection module
//!
//! Local, deterministic detection and redaction of PII in free text. The
//! pipeline is pattern catalog → span scanner → overlap resolver → redactor,
//! wrapped by the [`DetectionEngine`] facade.
//!
//! # Usage
//!
//! ```rust,ignore
//! use aishield::detection::{CatalogVariant, DetectionEngine};
//!
//! let engine = DetectionEngine::new(CatalogVariant::Extended)?;
//! let result = engine.detect("SSN 123-45-6789");
//! assert_eq!(result.redacted_text, "SSN [REDACTED]");
//! ```

pub mod engine;
pub mod models;
pub mod patterns;
pub mod redactor;
pub mod resolver;
pub mod scanner;

// Re-export main types
pub use engine::DetectionEngine;
pub use models::{CategoryId, DetectionResult, EntityStats, Span};
pub use patterns::{CatalogVariant, PatternCatalog, PatternOverrides, PatternRule};
pub use redactor::{Redactor, PLACEHOLDER};
pub use resolver::ResolvedSpans;

use sha2::{Digest, Sha256};

/// SHA-256 hex digest of `text`
///
/// Used wherever a record must identify its input without storing it.
pub fn hash_text(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let result = hasher.finalize();
    format!("{result:x}")
}
