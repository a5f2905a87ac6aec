//! Testing utilities for the modelsync workspace
//!
//! Shared fixtures and test doubles.

#![allow(missing_docs)]

use modelsync_model::{
    DeclaredModel, ModelMetadata, ModelRegistry, PropertyDescriptor, PropertyGroupDescriptor,
};
use modelsync_reconcile::WriterElection;
use std::sync::atomic::{AtomicBool, Ordering};

/// A typical article model with explicit metadata and one group
pub fn article_model() -> DeclaredModel {
    DeclaredModel::new("site::models::Article")
        .with_metadata(
            ModelMetadata::new()
                .with_alias("article")
                .with_display_name("Article")
                .with_description("A news article")
                .with_icon("icon-article"),
        )
        .with_group(
            PropertyGroupDescriptor::new("Content")
                .with_property(PropertyDescriptor::new("title", "Textstring", "Title"))
                .with_property(PropertyDescriptor::new("body", "RichText", "Body")),
        )
}

/// A root-allowed home page model relying mostly on defaults
pub fn home_model() -> DeclaredModel {
    DeclaredModel::new("site::models::Home")
        .with_metadata(ModelMetadata::new().with_alias("home").allowed_as_root(true))
}

/// Registry over the given models
pub fn registry(models: Vec<DeclaredModel>) -> ModelRegistry {
    models.into_iter().collect()
}

/// The standard two-model site registry used across integration tests
pub fn site_registry() -> ModelRegistry {
    registry(vec![article_model(), home_model()])
}

/// Writer election whose answer can be flipped from the test body
#[derive(Debug)]
pub struct ToggleElection {
    writer: AtomicBool,
}

impl ToggleElection {
    pub fn new(writer: bool) -> Self {
        Self {
            writer: AtomicBool::new(writer),
        }
    }

    pub fn set_writer(&self, writer: bool) {
        self.writer.store(writer, Ordering::SeqCst);
    }
}

impl WriterElection for ToggleElection {
    fn is_writer(&self) -> bool {
        self.writer.load(Ordering::SeqCst)
    }
}
