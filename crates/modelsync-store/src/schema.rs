//! Persisted content-type schema records
//!
//! Same logical shape as a [`ModelDescriptor`] plus the two things only
//! the store knows: a numeric identity assigned on first save and a
//! position in the content-type tree. Records are mutated only by the
//! reconciler (through the gateway) or by administration tooling;
//! reconciliation never deletes them.

use modelsync_model::{ModelDescriptor, PropertyGroupDescriptor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned numeric identity of a persisted schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaId(pub u64);

impl fmt::Display for SchemaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position of a schema in the content-type tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParentRef {
    /// Directly under the tree root
    #[default]
    Root,
    /// Under another persisted schema
    Schema(SchemaId),
}

/// The system-of-record content-type record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSchema {
    /// Store-assigned identity; `None` until the first save
    pub id: Option<SchemaId>,
    /// Tree position
    pub parent: ParentRef,
    /// Stable unique alias (join key against declared models)
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
    /// Property groups; may contain administration-added groups the
    /// declared model knows nothing about
    pub property_groups: Vec<PropertyGroupDescriptor>,
}

impl PersistedSchema {
    /// Build a fresh (unsaved) record from a descriptor
    ///
    /// Used on the create path: groups are copied as declared since
    /// there is no prior state to merge with.
    #[must_use]
    pub fn from_descriptor(descriptor: &ModelDescriptor, parent: ParentRef) -> Self {
        Self {
            id: None,
            parent,
            alias: descriptor.alias.clone(),
            display_name: descriptor.display_name.clone(),
            description: descriptor.description.clone(),
            icon: descriptor.icon.clone(),
            thumbnail: descriptor.thumbnail.clone(),
            allowed_as_root: descriptor.allowed_as_root,
            property_groups: descriptor.property_groups.clone(),
        }
    }

    /// Look up a property group by name
    #[must_use]
    pub fn group(&self, name: &str) -> Option<&PropertyGroupDescriptor> {
        self.property_groups.iter().find(|g| g.name == name)
    }

    /// True when the record has been saved at least once
    #[inline]
    #[must_use]
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modelsync_model::{PropertyDescriptor, DEFAULT_ICON, DEFAULT_THUMBNAIL};
    use pretty_assertions::assert_eq;

    fn article_descriptor() -> ModelDescriptor {
        ModelDescriptor {
            alias: "article".to_string(),
            display_name: "Article".to_string(),
            description: "A news article".to_string(),
            icon: DEFAULT_ICON.to_string(),
            thumbnail: DEFAULT_THUMBNAIL.to_string(),
            allowed_as_root: true,
            property_groups: vec![PropertyGroupDescriptor::new("Content")
                .with_property(PropertyDescriptor::new("title", "Textstring", "Title"))],
        }
    }

    #[test]
    fn from_descriptor_copies_fields() {
        let descriptor = article_descriptor();
        let schema = PersistedSchema::from_descriptor(&descriptor, ParentRef::Root);

        assert_eq!(schema.id, None);
        assert!(!schema.is_persisted());
        assert_eq!(schema.parent, ParentRef::Root);
        assert_eq!(schema.alias, "article");
        assert_eq!(schema.display_name, "Article");
        assert!(schema.allowed_as_root);
        assert_eq!(schema.property_groups, descriptor.property_groups);
    }

    #[test]
    fn group_lookup() {
        let schema = PersistedSchema::from_descriptor(&article_descriptor(), ParentRef::Root);
        assert!(schema.group("Content").is_some());
        assert!(schema.group("Settings").is_none());
    }

    #[test]
    fn parent_ref_default_is_root() {
        assert_eq!(ParentRef::default(), ParentRef::Root);
    }
}
