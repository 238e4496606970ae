// AI Shield - PII Detection and Redaction for AI Prompts
// Copyright (c) 2025 AI Shield Contributors
// Licensed under the MIT License

//! # AI Shield - PII Detection and Redaction
//!
//! AI Shield finds personally identifiable information in free text and
//! replaces it with a placeholder before the text reaches a third-party AI
//! service.
//!
//! ## Overview
//!
//! This library provides:
//! - **Detection** of thirteen PII categories with an ordered regex catalog
//! - **Redaction** of a non-overlapping span list with `[REDACTED]`
//! - **Fallback** from a remote scanning service to local detection
//! - **Audit** records, written locally and normalized from any producer
//!
//! ## Architecture
//!
//! - [`detection`] - Pattern catalog, scanner, overlap resolver, redactor, engine
//! - [`remote`] - Remote scanning service trait and HTTP client
//! - [`fallback`] - Remote-first orchestration, scan settings and statistics
//! - [`audit`] - Audit record logging and normalization
//! - [`domain`] - Error and result types
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//! - [`cli`] - Command-line interface
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use aishield::detection::{CatalogVariant, DetectionEngine};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = DetectionEngine::new(CatalogVariant::Extended)?;
//! let result = engine.detect("Contact me at jane@example.com or 555-123-4567");
//!
//! assert!(result.has_pii);
//! println!("{}", result.redacted_text);
//! # Ok(())
//! # }
//! ```
//!
//! ## Remote Detection with Fallback
//!
//! ```rust,no_run
//! use aishield::config::RemoteConfig;
//! use aishield::detection::{CatalogVariant, DetectionEngine};
//! use aishield::fallback::FallbackOrchestrator;
//! use aishield::remote::HttpRemoteClient;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let remote = RemoteConfig::default();
//! let engine = Arc::new(DetectionEngine::new(CatalogVariant::Extended)?);
//! let client = Arc::new(HttpRemoteClient::new(&remote)?);
//!
//! let orchestrator = FallbackOrchestrator::new(engine, client).with_timeout(remote.timeout());
//! let result = orchestrator.process_text("SSN 123-45-6789").await;
//! assert_eq!(result.redacted_text, "SSN [REDACTED]");
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Library operations return [`domain::Result`], whose error type is
//! [`domain::ShieldError`]. Remote failures are [`domain::RemoteError`] and
//! never reach callers of the orchestrator.

pub mod audit;
pub mod cli;
pub mod config;
pub mod detection;
pub mod domain;
pub mod fallback;
pub mod logging;
pub mod remote;
