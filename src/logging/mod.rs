//! Logging and observability
//!
//! Structured logging through `tracing`, with console output and an
//! optional rolling JSON file. Events carry counts, categories, offsets and
//! digests; matched text is never logged.
//!
//! # Example
//!
//! ```no_run
//! use aishield::logging::init_logging;
//! use aishield::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config)?;
//!
//! tracing::info!("Application started");
//! # Ok::<(), aishield::domain::ShieldError>(())
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the outcome of one scan
///
/// # Example
///
/// ```no_run
/// use aishield::log_scan_result;
/// use std::time::Duration;
///
/// log_scan_result!("local", 2, Duration::from_millis(3));
/// ```
#[macro_export]
macro_rules! log_scan_result {
    ($source:expr, $entities:expr, $duration:expr) => {
        tracing::info!(
            source = %$source,
            entities = $entities,
            duration_ms = $duration.as_millis() as u64,
            "Scan completed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use aishield::log_error_with_context;
/// use aishield::domain::ShieldError;
///
/// let error = ShieldError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
