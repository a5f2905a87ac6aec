//! Explicit metadata overrides for declared models
//!
//! A declared model normally derives its schema identity from its bare
//! type name. [`ModelMetadata`] lets a model state any of those fields
//! explicitly; fields it leaves unset fall back to the extraction
//! defaults (see [`crate::DeclaredModel::descriptor`]).

use serde::{Deserialize, Serialize};

/// Explicit overrides for a declared model's schema fields
///
/// Every field specified here wins over the type-name-derived default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Content-type alias override
    pub alias: Option<String>,

    /// Display name override
    pub display_name: Option<String>,

    /// Description override
    pub description: Option<String>,

    /// Icon override (e.g. `icon-article`)
    pub icon: Option<String>,

    /// Thumbnail override (e.g. `article.png`)
    pub thumbnail: Option<String>,

    /// Whether content of this type may sit at the content root
    pub allowed_as_root: Option<bool>,
}

impl ModelMetadata {
    /// Create empty metadata (no overrides)
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the alias override
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Set the display name override
    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Set the description override
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the icon override
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the thumbnail override
    #[must_use]
    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    /// Set the root-allowance override
    #[must_use]
    pub fn allowed_as_root(mut self, allowed: bool) -> Self {
        self.allowed_as_root = Some(allowed);
        self
    }

    /// True when no field is overridden
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.alias.is_none()
            && self.display_name.is_none()
            && self.description.is_none()
            && self.icon.is_none()
            && self.thumbnail.is_none()
            && self.allowed_as_root.is_none()
    }
}
