//! Error types for declared-model handling

/// Errors raised while turning a declared model into a descriptor
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// The declared model resolves to an unusable alias
    #[error("invalid descriptor for `{type_name}`: {reason}")]
    InvalidDescriptor {
        /// Fully qualified name of the offending declared model
        type_name: String,
        /// Why the descriptor could not be produced
        reason: String,
    },
}

impl ModelError {
    /// Create an invalid-descriptor error
    pub fn invalid_descriptor(type_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDescriptor {
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }
}
