//! Schema diffing and non-destructive merge
//!
//! Compares a freshly extracted descriptor against the persisted record
//! and produces the merged record to write back, restricted to the
//! fields the reconciler owns. Property groups merge additively: groups
//! match by name, properties by alias; anything present only on the
//! persisted side (administration-added) is left exactly as found.

use crate::outcome::SchemaField;
use modelsync_model::{ModelDescriptor, PropertyGroupDescriptor};
use modelsync_store::PersistedSchema;
use std::collections::BTreeSet;

/// Outcome of comparing one descriptor against its persisted schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDiff {
    /// The owned fields that diverged
    pub changed: BTreeSet<SchemaField>,
    /// The persisted record with the descriptor's values merged in
    pub merged: PersistedSchema,
}

impl SchemaDiff {
    /// True when descriptor and persisted schema already agree
    #[inline]
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.changed.is_empty()
    }
}

/// Compute the minimal owned-field diff and the merged record
#[must_use]
pub fn diff(descriptor: &ModelDescriptor, persisted: &PersistedSchema) -> SchemaDiff {
    let mut changed = BTreeSet::new();
    let mut merged = persisted.clone();

    if merged.alias != descriptor.alias {
        merged.alias = descriptor.alias.clone();
        changed.insert(SchemaField::Alias);
    }
    if merged.display_name != descriptor.display_name {
        merged.display_name = descriptor.display_name.clone();
        changed.insert(SchemaField::DisplayName);
    }
    if merged.description != descriptor.description {
        merged.description = descriptor.description.clone();
        changed.insert(SchemaField::Description);
    }
    if merged.icon != descriptor.icon {
        merged.icon = descriptor.icon.clone();
        changed.insert(SchemaField::Icon);
    }
    if merged.thumbnail != descriptor.thumbnail {
        merged.thumbnail = descriptor.thumbnail.clone();
        changed.insert(SchemaField::Thumbnail);
    }
    if merged.allowed_as_root != descriptor.allowed_as_root {
        merged.allowed_as_root = descriptor.allowed_as_root;
        changed.insert(SchemaField::AllowedAsRoot);
    }
    if merge_groups(&mut merged.property_groups, &descriptor.property_groups) {
        changed.insert(SchemaField::PropertyGroups);
    }

    SchemaDiff { changed, merged }
}

/// Merge declared groups into the persisted ones, additively
///
/// Returns true when anything changed. Persisted-only groups and
/// properties are never removed or reordered.
fn merge_groups(
    persisted: &mut Vec<PropertyGroupDescriptor>,
    declared: &[PropertyGroupDescriptor],
) -> bool {
    let mut changed = false;

    for group in declared {
        match persisted.iter_mut().find(|g| g.name == group.name) {
            Some(existing) => {
                for property in &group.properties {
                    match existing.properties.iter_mut().find(|p| p.alias == property.alias) {
                        Some(found) => {
                            if found.display_name != property.display_name
                                || found.data_type != property.data_type
                            {
                                found.display_name = property.display_name.clone();
                                found.data_type = property.data_type.clone();
                                changed = true;
                            }
                        }
                        None => {
                            existing.properties.push(property.clone());
                            changed = true;
                        }
                    }
                }
            }
            None => {
                persisted.push(group.clone());
                changed = true;
            }
        }
    }

    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use modelsync_model::{PropertyDescriptor, DEFAULT_ICON, DEFAULT_THUMBNAIL};
    use modelsync_store::ParentRef;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn descriptor() -> ModelDescriptor {
        ModelDescriptor {
            alias: "article".to_string(),
            display_name: "Article".to_string(),
            description: "A news article".to_string(),
            icon: DEFAULT_ICON.to_string(),
            thumbnail: DEFAULT_THUMBNAIL.to_string(),
            allowed_as_root: false,
            property_groups: vec![PropertyGroupDescriptor::new("Content")
                .with_property(PropertyDescriptor::new("title", "Textstring", "Title"))],
        }
    }

    fn persisted() -> PersistedSchema {
        let mut schema = PersistedSchema::from_descriptor(&descriptor(), ParentRef::Root);
        schema.id = Some(modelsync_store::SchemaId(1));
        schema
    }

    #[test]
    fn identical_records_are_unchanged() {
        let d = diff(&descriptor(), &persisted());
        assert!(d.is_unchanged());
        assert_eq!(d.merged, persisted());
    }

    #[test]
    fn display_field_divergence_is_tracked() {
        let mut stored = persisted();
        stored.display_name = "Old".to_string();
        stored.icon = "icon-old".to_string();

        let d = diff(&descriptor(), &stored);
        assert_eq!(
            d.changed,
            BTreeSet::from([SchemaField::DisplayName, SchemaField::Icon])
        );
        assert_eq!(d.merged.display_name, "Article");
        assert_eq!(d.merged.icon, DEFAULT_ICON);
    }

    #[test]
    fn admin_added_group_is_preserved() {
        let mut stored = persisted();
        stored.property_groups.push(
            PropertyGroupDescriptor::new("Seo")
                .with_property(PropertyDescriptor::new("metaTitle", "Textstring", "Meta title")),
        );

        let d = diff(&descriptor(), &stored);
        assert!(d.is_unchanged());
        assert!(d.merged.group("Seo").is_some());
    }

    #[test]
    fn declared_only_group_is_added() {
        let mut wanted = descriptor();
        wanted.property_groups.push(
            PropertyGroupDescriptor::new("Settings")
                .with_property(PropertyDescriptor::new("hidden", "TrueFalse", "Hidden")),
        );

        let d = diff(&wanted, &persisted());
        assert_eq!(d.changed, BTreeSet::from([SchemaField::PropertyGroups]));
        assert!(d.merged.group("Settings").is_some());
        // The pre-existing group is untouched
        assert_eq!(d.merged.group("Content").unwrap().properties.len(), 1);
    }

    #[test]
    fn divergent_property_display_is_updated() {
        let mut stored = persisted();
        stored.property_groups[0].properties[0].display_name = "Old title".to_string();

        let d = diff(&descriptor(), &stored);
        assert_eq!(d.changed, BTreeSet::from([SchemaField::PropertyGroups]));
        assert_eq!(
            d.merged.group("Content").unwrap().property("title").unwrap().display_name,
            "Title"
        );
    }

    #[test]
    fn admin_added_property_is_preserved() {
        let mut stored = persisted();
        stored.property_groups[0]
            .properties
            .push(PropertyDescriptor::new("extra", "Textstring", "Extra"));

        let d = diff(&descriptor(), &stored);
        assert!(d.is_unchanged());
        assert!(d.merged.group("Content").unwrap().property("extra").is_some());
    }

    proptest! {
        // Merging is idempotent: applying the same descriptor to its own
        // merge result finds nothing left to change.
        #[test]
        fn prop_merge_is_idempotent(
            display_name in "[A-Za-z ]{1,24}",
            description in "[A-Za-z ]{0,40}",
            icon in "icon-[a-z]{1,12}",
            allowed_as_root: bool,
        ) {
            let mut wanted = descriptor();
            wanted.display_name = display_name;
            wanted.description = description;
            wanted.icon = icon;
            wanted.allowed_as_root = allowed_as_root;

            let first = diff(&wanted, &persisted());
            let second = diff(&wanted, &first.merged);
            prop_assert!(second.is_unchanged());
        }
    }
}
