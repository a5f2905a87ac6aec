//! Error types for runtime configuration

/// Errors raised while loading or validating [`crate::SyncSettings`]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// A setting holds an unusable value
    #[error("invalid setting `{field}`: {reason}")]
    InvalidField {
        /// Name of the offending setting
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// The settings document could not be parsed
    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),
}

impl SettingsError {
    /// Create an invalid-field error
    pub fn invalid_field(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}
