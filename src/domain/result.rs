//! Result type alias
//!
//! Convenience alias that uses [`FbxError`] as the error type.

use super::errors::FbxError;

/// Result type alias for library operations
///
/// # Examples
///
/// ```
/// use fbx_exporter::domain::result::Result;
/// use fbx_exporter::domain::errors::FbxError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(FbxError::configuration("Invalid input"))
/// }
/// ```
pub type Result<T> = std::result::Result<T, FbxError>;
