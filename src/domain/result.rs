//! Result type alias for Cloak
//!
//! This module provides a convenient Result type alias that uses CloakError
//! as the error type.

use super::errors::CloakError;

/// Result type alias for Cloak operations
///
/// This is a convenience type alias that uses `CloakError` as the error type.
/// Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use cloak::domain::result::Result;
/// use cloak::domain::errors::CloakError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(CloakError::Configuration("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, CloakError>;
