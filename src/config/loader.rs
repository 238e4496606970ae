//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::ShieldConfig;
use crate::domain::errors::ShieldError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into ShieldConfig
/// 4. Applies environment variable overrides (AISHIELD_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use aishield::config::loader::load_config;
///
/// let config = load_config("aishield.toml")?;
/// # Ok::<(), aishield::domain::ShieldError>(())
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ShieldConfig> {
    let path = path.as_ref();

    // Check if file exists
    if !path.exists() {
        return Err(ShieldError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    // Read file contents
    let contents = fs::read_to_string(path).map_err(|e| {
        ShieldError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    // Perform environment variable substitution
    let contents = substitute_env_vars(&contents)?;

    // Parse TOML
    let config: ShieldConfig = toml::from_str(&contents)
        .map_err(|e| ShieldError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    finish(config)
}

/// Loads configuration, falling back to defaults when the file is absent
///
/// Environment overrides and validation still apply to the defaults.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<ShieldConfig> {
    let path = path.as_ref();
    if path.exists() {
        return load_config(path);
    }

    tracing::debug!(path = %path.display(), "Configuration file not found, using defaults");
    finish(ShieldConfig::default())
}

fn finish(mut config: ShieldConfig) -> Result<ShieldConfig> {
    // Apply environment variable overrides
    apply_env_overrides(&mut config)?;

    // Validate configuration
    config.validate().map_err(|e| {
        ShieldError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error listing every referenced environment variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| ShieldError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    // Process line by line to skip comments
    for line in input.lines() {
        let trimmed = line.trim_start();

        // Skip comment lines - don't process env vars in comments
        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ShieldError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using AISHIELD_* prefix
///
/// Environment variables follow the pattern: AISHIELD_<SECTION>_<KEY>
/// For example: AISHIELD_REMOTE_BASE_URL, AISHIELD_DETECTION_CATALOG
fn apply_env_overrides(config: &mut ShieldConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("AISHIELD_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Detection overrides
    if let Ok(val) = std::env::var("AISHIELD_DETECTION_CATALOG") {
        config.detection.catalog = val.parse().map_err(|e: String| {
            ShieldError::Configuration(format!("AISHIELD_DETECTION_CATALOG: {e}"))
        })?;
    }
    if let Ok(val) = std::env::var("AISHIELD_DETECTION_PATTERN_OVERRIDES") {
        config.detection.pattern_overrides = Some(val.into());
    }

    // Remote overrides
    if let Ok(val) = std::env::var("AISHIELD_REMOTE_ENABLED") {
        config.remote.enabled = val.parse().unwrap_or(true);
    }
    if let Ok(val) = std::env::var("AISHIELD_REMOTE_BASE_URL") {
        config.remote.base_url = val;
    }
    if let Ok(val) = std::env::var("AISHIELD_REMOTE_TIMEOUT_SECONDS") {
        if let Ok(seconds) = val.parse() {
            config.remote.timeout_seconds = seconds;
        }
    }
    if let Ok(val) = std::env::var("AISHIELD_REMOTE_HEALTH_TIMEOUT_SECONDS") {
        if let Ok(seconds) = val.parse() {
            config.remote.health_timeout_seconds = seconds;
        }
    }

    // Scan overrides
    if let Ok(val) = std::env::var("AISHIELD_SCAN_ENABLED") {
        config.scan.enabled = val.parse().unwrap_or(true);
    }
    if let Ok(val) = std::env::var("AISHIELD_SCAN_AUTO_REDACT") {
        config.scan.auto_redact = val.parse().unwrap_or(true);
    }
    if let Ok(val) = std::env::var("AISHIELD_SCAN_SHOW_WARNINGS") {
        config.scan.show_warnings = val.parse().unwrap_or(true);
    }

    // Audit overrides
    if let Ok(val) = std::env::var("AISHIELD_AUDIT_ENABLED") {
        config.audit.enabled = val.parse().unwrap_or(true);
    }
    if let Ok(val) = std::env::var("AISHIELD_AUDIT_LOG_PATH") {
        config.audit.log_path = val.into();
    }

    // Logging overrides
    if let Ok(val) = std::env::var("AISHIELD_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("AISHIELD_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("AISHIELD_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}
