//! Normalized schema descriptors
//!
//! A [`ModelDescriptor`] is the normalized view of one declared model:
//! the exact shape the reconciler compares against the persisted schema.
//! Descriptors carry no persistence identity and are rebuilt on every
//! pass.

use serde::{Deserialize, Serialize};
use std::fmt;

/// System default icon for content types that do not specify one
pub const DEFAULT_ICON: &str = "icon-document";

/// System default thumbnail for content types that do not specify one
pub const DEFAULT_THUMBNAIL: &str = "folder.png";

/// Reference to a data type by its stable name
///
/// The data-type store itself is outside this system; properties only
/// carry the reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataTypeRef(pub String);

impl DataTypeRef {
    /// Create a data-type reference
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The referenced data-type name
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DataTypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DataTypeRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// One property within a property group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    /// Stable property alias (join key within its group's schema)
    pub alias: String,
    /// Data type backing the property
    pub data_type: DataTypeRef,
    /// Editor-facing display name
    pub display_name: String,
}

impl PropertyDescriptor {
    /// Create a property descriptor
    pub fn new(
        alias: impl Into<String>,
        data_type: impl Into<DataTypeRef>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            alias: alias.into(),
            data_type: data_type.into(),
            display_name: display_name.into(),
        }
    }
}

/// Ordered group of properties under a shared name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyGroupDescriptor {
    /// Group name (join key against the persisted schema's groups)
    pub name: String,
    /// Properties in declaration order
    pub properties: Vec<PropertyDescriptor>,
}

impl PropertyGroupDescriptor {
    /// Create an empty group
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    /// Append a property
    #[must_use]
    pub fn with_property(mut self, property: PropertyDescriptor) -> Self {
        self.properties.push(property);
        self
    }

    /// Look up a property by alias
    #[must_use]
    pub fn property(&self, alias: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|p| p.alias == alias)
    }
}

/// Normalized descriptor for one declared model
///
/// Ephemeral comparison input: produced fresh on each reconciliation
/// pass, never persisted itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Stable unique alias joining the model to its persisted schema
    pub alias: String,
    /// Editor-facing display name
    pub display_name: String,
    /// Description shown in administration tooling
    pub description: String,
    /// Icon reference
    pub icon: String,
    /// Thumbnail reference
    pub thumbnail: String,
    /// Whether content of this type may sit at the content root
    pub allowed_as_root: bool,
    /// Declared property groups in order
    pub property_groups: Vec<PropertyGroupDescriptor>,
}

impl ModelDescriptor {
    /// Look up a property group by name
    #[must_use]
    pub fn group(&self, name: &str) -> Option<&PropertyGroupDescriptor> {
        self.property_groups.iter().find(|g| g.name == name)
    }
}

/// Configurable fallbacks applied during extraction
///
/// Defaults come from the system constants; deployments may override
/// them through settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractDefaults {
    /// Icon used when neither metadata nor the model specify one
    pub icon: String,
    /// Thumbnail used when neither metadata nor the model specify one
    pub thumbnail: String,
}

impl Default for ExtractDefaults {
    fn default() -> Self {
        Self {
            icon: DEFAULT_ICON.to_string(),
            thumbnail: DEFAULT_THUMBNAIL.to_string(),
        }
    }
}
