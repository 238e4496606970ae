//! Result type alias for AI Shield

use super::errors::ShieldError;

/// Result type alias for AI Shield operations
///
/// # Examples
///
/// ```
/// use aishield::domain::result::Result;
/// use aishield::domain::errors::ShieldError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(ShieldError::Configuration("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ShieldError>;
