//! Configuration management for AI Shield.
//!
//! # Overview
//!
//! AI Shield uses an optional TOML configuration file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `AISHIELD_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use aishield::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("aishield.toml")?;
//!
//! println!("Remote service: {}", config.remote.base_url);
//! println!("Catalog: {}", config.detection.catalog);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level
//! - [`DetectionConfig`] - Catalog variant and pattern overrides
//! - [`RemoteConfig`] - Remote scanning service and timeouts
//! - [`ScanConfig`] - Redaction and warning behaviour
//! - [`AuditConfig`] - Local audit log
//! - [`LoggingConfig`] - Rolling file logs
//!
//! # Example Configuration
//!
//! ```toml
//! [detection]
//! catalog = "minimal"
//!
//! [remote]
//! base_url = "${AISHIELD_SCANNER_URL}"
//! timeout_seconds = 5
//!
//! [audit]
//! log_path = "./audit/scans.jsonl"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default};
pub use schema::{
    ApplicationConfig, AuditConfig, DetectionConfig, LoggingConfig, RemoteConfig, ScanConfig,
    ShieldConfig,
};
