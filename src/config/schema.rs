//! Configuration schema types
//!
//! This module defines the configuration structure for AI Shield. Every
//! section and every key has a default, so an empty file is a valid
//! configuration.

use crate::detection::CatalogVariant;
use crate::fallback::ScanSettings;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Main AI Shield configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShieldConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Local detection settings
    #[serde(default)]
    pub detection: DetectionConfig,

    /// Remote scanning service
    #[serde(default)]
    pub remote: RemoteConfig,

    /// Scan behaviour
    #[serde(default)]
    pub scan: ScanConfig,

    /// Local audit log
    #[serde(default)]
    pub audit: AuditConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ShieldConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.detection.validate()?;
        self.remote.validate()?;
        self.audit.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Local detection configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Catalog variant (extended, minimal)
    #[serde(default)]
    pub catalog: CatalogVariant,

    /// Optional TOML file replacing built-in patterns per category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern_overrides: Option<PathBuf>,
}

impl DetectionConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(path) = &self.pattern_overrides {
            if !path.exists() {
                return Err(format!(
                    "pattern_overrides file not found: {}",
                    path.display()
                ));
            }
        }
        Ok(())
    }
}

/// Remote scanning service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Try the remote service before local detection
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Base URL of the service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bound on one detection request
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Bound on the connectivity check
    #[serde(default = "default_health_timeout_seconds")]
    pub health_timeout_seconds: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
            health_timeout_seconds: default_health_timeout_seconds(),
        }
    }
}

impl RemoteConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn validate(&self) -> Result<(), String> {
        let url = url::Url::parse(&self.base_url)
            .map_err(|e| format!("Invalid remote base_url '{}': {e}", self.base_url))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(format!(
                "remote base_url must use http or https, got '{}'",
                url.scheme()
            ));
        }

        if self.timeout_seconds == 0 {
            return Err("remote timeout_seconds must be greater than 0".to_string());
        }
        if self.health_timeout_seconds == 0 {
            return Err("remote health_timeout_seconds must be greater than 0".to_string());
        }
        Ok(())
    }
}

/// Scan behaviour configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Run detection at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Output the redacted text instead of the original
    #[serde(default = "default_true")]
    pub auto_redact: bool,

    /// Warn when PII is found
    #[serde(default = "default_true")]
    pub show_warnings: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            auto_redact: true,
            show_warnings: true,
        }
    }
}

impl From<&ScanConfig> for ScanSettings {
    fn from(config: &ScanConfig) -> Self {
        Self {
            enabled: config.enabled,
            auto_redact: config.auto_redact,
            show_warnings: config.show_warnings,
        }
    }
}

/// Local audit log configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Append a record per scan
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// JSON-lines file
    #[serde(default = "default_audit_log_path")]
    pub log_path: PathBuf,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_path: default_audit_log_path(),
        }
    }
}

impl AuditConfig {
    fn validate(&self) -> Result<(), String> {
        if self.enabled && self.log_path.as_os_str().is_empty() {
            return Err("audit log_path cannot be empty when audit is enabled".to_string());
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.is_empty() {
            return Err("local_path cannot be empty when local logging is enabled".to_string());
        }
        Ok(())
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_timeout_seconds() -> u64 {
    5
}

fn default_health_timeout_seconds() -> u64 {
    3
}

fn default_audit_log_path() -> PathBuf {
    PathBuf::from("./audit/scans.jsonl")
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
