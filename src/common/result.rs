use crate::common::error::GetError;

/// Result alias used by the application layer
///
/// # Examples
///
/// ```
/// use vcs_get::common::result::GetResult;
///
/// fn example_function() -> GetResult<String> {
///     Ok("success".to_string())
/// }
/// # assert!(example_function().is_ok());
/// ```
pub type GetResult<T> = Result<T, GetError>;
