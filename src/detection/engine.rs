//! Detection engine
//!
//! This module provides the [`DetectionEngine`] facade that runs the local
//! pipeline on a piece of text.
//!
//! # Architecture
//!
//! The engine composes three stages:
//! - **Scanner**: applies every catalog rule and reports raw, possibly
//!   overlapping spans
//! - **Resolver**: drops digit-group fragments of longer numbers, then
//!   keeps a non-overlapping, start-ordered subset
//! - **Redactor**: replaces each kept span with `[REDACTED]`
//!
//! # Examples
//!
//! ```no_run
//! use aishield::detection::{CatalogVariant, DetectionEngine};
//!
//! # fn example() -> aishield::domain::Result<()> {
//! let engine = DetectionEngine::new(CatalogVariant::Minimal)?;
//! let result = engine.detect("Contact me at jane@example.com or 555-123-4567");
//!
//! assert!(result.has_pii);
//! assert_eq!(result.redacted_text, "Contact me at [REDACTED] or [REDACTED]");
//! # Ok(())
//! # }
//! ```

use super::models::{CategoryId, DetectionResult, Span};
use super::patterns::{CatalogVariant, PatternCatalog, PatternOverrides};
use super::redactor::Redactor;
use super::resolver::{drop_nested_digit_groups, resolve, ResolvedSpans};
use super::scanner::{scan, scan_rule};
use crate::config::DetectionConfig;
use crate::domain::Result;
use std::sync::Arc;

/// Local detection engine
///
/// # Thread Safety
///
/// The engine holds only immutable, compiled state. It is `Send + Sync` and
/// can be shared across tasks behind an `Arc`; every call is independent.
#[derive(Debug, Clone)]
pub struct DetectionEngine {
    catalog: Arc<PatternCatalog>,
    redactor: Redactor,
}

impl DetectionEngine {
    /// Create an engine over the built-in catalog
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the embedded pattern library does not
    /// compile.
    pub fn new(variant: CatalogVariant) -> Result<Self> {
        Ok(Self::with_catalog(PatternCatalog::builtin(variant)?))
    }

    /// Create an engine over a custom catalog
    pub fn with_catalog(catalog: PatternCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            redactor: Redactor::new(),
        }
    }

    /// Create an engine from the `[detection]` configuration section
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the override file cannot be read, names
    /// an unknown category, or contains an invalid regex.
    pub fn from_config(config: &DetectionConfig) -> Result<Self> {
        let overrides = match &config.pattern_overrides {
            Some(path) => PatternOverrides::from_file(path)?,
            None => PatternOverrides::default(),
        };

        let catalog = PatternCatalog::with_overrides(config.catalog, &overrides)?;
        tracing::debug!(
            variant = %catalog.variant(),
            rules = catalog.len(),
            overrides = overrides.patterns.len(),
            "Pattern catalog loaded"
        );

        Ok(Self::with_catalog(catalog))
    }

    /// Detect and redact PII in `text`
    ///
    /// If the spans cannot be applied to `text`, the whole text is replaced
    /// by the placeholder rather than returned partly redacted.
    pub fn detect(&self, text: &str) -> DetectionResult {
        let resolved = self.resolve(text);
        let redacted_text = self
            .redactor
            .redact(text, &resolved)
            .unwrap_or_else(|e| {
                tracing::error!(error = %e, "Redaction failed, withholding entire text");
                self.redactor.placeholder().to_string()
            });
        let entities = resolved.into_vec();

        tracing::debug!(
            variant = %self.catalog.variant(),
            text_len = text.len(),
            entities = entities.len(),
            "Local detection complete"
        );

        DetectionResult {
            original_text: text.to_string(),
            redacted_text,
            has_pii: !entities.is_empty(),
            entities,
        }
    }

    /// Raw scanner output, before overlap resolution
    pub fn scan(&self, text: &str) -> Vec<Span> {
        scan(text, &self.catalog)
    }

    /// Scanner output reduced to a redactable span list
    pub fn resolve(&self, text: &str) -> ResolvedSpans {
        resolve(drop_nested_digit_groups(self.scan(text)))
    }

    /// Whether one category's rule matches anywhere in `text`
    ///
    /// Always false for categories outside the engine's catalog variant.
    pub fn has_category(&self, text: &str, category: CategoryId) -> bool {
        let Some(rule) = self.catalog.rule(category) else {
            return false;
        };

        let mut spans = Vec::new();
        scan_rule(text, rule, &mut spans);
        !spans.is_empty()
    }

    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    pub fn variant(&self) -> CatalogVariant {
        self.catalog.variant()
    }
}
