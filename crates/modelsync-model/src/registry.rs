//! Declared-model registry
//!
//! Models register explicitly at process initialization instead of being
//! discovered through runtime type introspection. The registry is the
//! single enumeration source for reconciliation passes and yields models
//! in a deterministic order (lexicographic by fully qualified type name),
//! which is what makes the duplicate-alias tie-break stable across runs.
//!
//! Abstract base markers are never registered; the registry only holds
//! concrete content models.

use crate::descriptor::{ExtractDefaults, ModelDescriptor, PropertyGroupDescriptor};
use crate::error::ModelError;
use crate::metadata::ModelMetadata;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One content model declared in application code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredModel {
    /// Fully qualified type name, e.g. `site::models::ArticlePage`
    pub type_name: String,

    /// Optional explicit metadata overrides
    pub metadata: Option<ModelMetadata>,

    /// Declared property groups in order
    pub property_groups: Vec<PropertyGroupDescriptor>,
}

impl DeclaredModel {
    /// Declare a model with no explicit metadata
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            metadata: None,
            property_groups: Vec::new(),
        }
    }

    /// Attach explicit metadata overrides
    #[must_use]
    pub fn with_metadata(mut self, metadata: ModelMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Append a declared property group
    #[must_use]
    pub fn with_group(mut self, group: PropertyGroupDescriptor) -> Self {
        self.property_groups.push(group);
        self
    }

    /// The bare type name: the final segment of the qualified path
    #[must_use]
    pub fn bare_name(&self) -> &str {
        self.type_name.rsplit("::").next().unwrap_or(&self.type_name)
    }

    /// Extract the normalized descriptor for this model
    ///
    /// Explicit metadata wins field-wise; omitted fields fall back to the
    /// bare type name (alias, display name), the configured defaults
    /// (icon, thumbnail), `false` (root-allowance) and an empty
    /// description. The persisted schema is never consulted.
    ///
    /// # Errors
    /// `ModelError::InvalidDescriptor` when the resolved alias is empty
    /// or whitespace-only.
    pub fn descriptor(&self, defaults: &ExtractDefaults) -> Result<ModelDescriptor, ModelError> {
        let meta = self.metadata.clone().unwrap_or_default();
        let bare = self.bare_name();

        let alias = meta.alias.unwrap_or_else(|| bare.to_string());
        if alias.trim().is_empty() {
            return Err(ModelError::invalid_descriptor(
                &self.type_name,
                "alias is empty or whitespace",
            ));
        }

        Ok(ModelDescriptor {
            alias,
            display_name: meta.display_name.unwrap_or_else(|| bare.to_string()),
            description: meta.description.unwrap_or_default(),
            icon: meta.icon.unwrap_or_else(|| defaults.icon.clone()),
            thumbnail: meta.thumbnail.unwrap_or_else(|| defaults.thumbnail.clone()),
            allowed_as_root: meta.allowed_as_root.unwrap_or(false),
            property_groups: self.property_groups.clone(),
        })
    }
}

/// Explicit registry of every declared model in the process
///
/// Populated once at initialization. Enumeration order is lexicographic
/// by fully qualified type name, so every pass sees the same sequence.
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    models: BTreeMap<String, DeclaredModel>,
}

impl ModelRegistry {
    /// Create an empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a declared model
    ///
    /// Re-registering the same type name replaces the earlier entry.
    pub fn register(&mut self, model: DeclaredModel) {
        self.models.insert(model.type_name.clone(), model);
    }

    /// Register every model from an iterator
    pub fn register_all(&mut self, models: impl IntoIterator<Item = DeclaredModel>) {
        for model in models {
            self.register(model);
        }
    }

    /// Look up a model by fully qualified type name
    #[must_use]
    pub fn get(&self, type_name: &str) -> Option<&DeclaredModel> {
        self.models.get(type_name)
    }

    /// Iterate models in deterministic (lexicographic) order
    pub fn models(&self) -> impl Iterator<Item = &DeclaredModel> {
        self.models.values()
    }

    /// Number of registered models
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// True when nothing is registered
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl FromIterator<DeclaredModel> for ModelRegistry {
    fn from_iter<I: IntoIterator<Item = DeclaredModel>>(iter: I) -> Self {
        let mut registry = Self::new();
        registry.register_all(iter);
        registry
    }
}
