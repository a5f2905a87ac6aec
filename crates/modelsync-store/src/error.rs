//! Storage error taxonomy
//!
//! Every gateway failure folds into one of these variants. Storage
//! errors never abort a reconciliation pass; the affected model fails
//! and the pass continues.

/// Errors surfaced by a [`crate::SchemaStore`] implementation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The operation did not complete in time
    #[error("storage timeout: {0}")]
    Timeout(String),

    /// The write conflicted with existing state (e.g. alias taken)
    #[error("storage conflict: {0}")]
    Conflict(String),

    /// The backing store could not be reached
    #[error("storage connection failed: {0}")]
    Connection(String),

    /// Any other backend-specific failure
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Create a conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// Create a backend error
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }

    /// True when retrying the same operation later could succeed
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout(_) | Self::Connection(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_display() {
        let err = StoreError::conflict("alias `article` already taken");
        assert!(err.to_string().contains("storage conflict"));
        assert!(err.to_string().contains("article"));
    }

    #[test]
    fn store_error_retryable() {
        assert!(StoreError::Timeout("slow".into()).is_retryable());
        assert!(StoreError::Connection("down".into()).is_retryable());
        assert!(!StoreError::conflict("taken").is_retryable());
        assert!(!StoreError::backend("broken").is_retryable());
    }
}
