//! Error types for sqltpl

use thiserror::Error;

/// Result type alias for sqltpl operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Error types for template construction and query building
#[derive(Debug, Error)]
pub enum QueryError {
    /// Template string is empty or whitespace-only
    #[error("template must not be empty")]
    EmptyTemplate,

    /// Parameter name is empty or whitespace-only
    #[error("parameter name must not be empty")]
    InvalidParameterName,

    /// Placeholder count in the template disagrees with the parameter count
    #[error("template has {expected} placeholder(s), got {found} parameter(s)")]
    ParameterCountMismatch { expected: usize, found: usize },

    /// A parameter's placeholder token does not occur in the template
    #[error("placeholder {token} not found in template")]
    PlaceholderNotFound { token: String },

    /// Umbrella error for build failures, carrying the underlying cause.
    ///
    /// Never raised standalone; the inner error is always one of the
    /// build-time variants and is reachable both by matching and through
    /// [`std::error::Error::source`].
    #[error("failed to build query")]
    BuildFailed(#[source] Box<QueryError>),
}

impl QueryError {
    /// Wrap a build-time validation error in the umbrella build failure.
    pub(crate) fn build_failed(cause: QueryError) -> Self {
        Self::BuildFailed(Box::new(cause))
    }

    /// The underlying cause if this is a build failure.
    pub fn cause(&self) -> Option<&QueryError> {
        match self {
            Self::BuildFailed(cause) => Some(cause),
            _ => None,
        }
    }

    /// Check if this is a build failure
    pub fn is_build_failed(&self) -> bool {
        matches!(self, Self::BuildFailed(_))
    }

    /// Check if this is a count mismatch, unwrapping the umbrella if present
    pub fn is_count_mismatch(&self) -> bool {
        matches!(
            self.cause().unwrap_or(self),
            Self::ParameterCountMismatch { .. }
        )
    }

    /// Check if this is a missing placeholder, unwrapping the umbrella if present
    pub fn is_placeholder_not_found(&self) -> bool {
        matches!(self.cause().unwrap_or(self), Self::PlaceholderNotFound { .. })
    }
}
