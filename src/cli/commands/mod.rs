//! CLI command implementations
//!
//! Every command returns an exit code: 0 success, 1 PII found with
//! `scan --fail-on-pii`, 2 configuration error, 4 connection error,
//! 5 fatal error.

pub mod init;
pub mod logs;
pub mod scan;
pub mod status;
pub mod validate;
