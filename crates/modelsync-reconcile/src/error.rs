//! Error types for reconciliation
//!
//! Every variant is contained within a single model's reconciliation;
//! none of them propagate out of a pass.

use modelsync_model::ModelError;
use modelsync_store::StoreError;

/// Why one model's reconciliation failed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReconcileError {
    /// The declared model could not produce a usable descriptor
    #[error(transparent)]
    InvalidDescriptor(#[from] ModelError),

    /// Another declared model already claimed this alias in this pass
    #[error("duplicate alias `{alias}`: already declared by `{first_type}`")]
    DuplicateAlias {
        /// The contested alias
        alias: String,
        /// Type name of the model that claimed the alias first
        first_type: String,
    },

    /// The gateway's read or write failed
    #[error(transparent)]
    Storage(#[from] StoreError),

    /// Writer election was revoked before a pending write
    #[error("writer election lost mid-pass")]
    ElectionLost,
}

impl ReconcileError {
    /// Create a duplicate-alias error
    pub fn duplicate_alias(alias: impl Into<String>, first_type: impl Into<String>) -> Self {
        Self::DuplicateAlias {
            alias: alias.into(),
            first_type: first_type.into(),
        }
    }
}
