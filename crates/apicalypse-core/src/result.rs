//! Result type aliases

use crate::error::FieldResolutionError;

/// Standard Result type for operations that resolve typed field references
pub type QueryResult<T> = Result<T, FieldResolutionError>;
