//! Modelsync Declared-Model System
//!
//! Code-first content models and their normalized schema descriptors.
//!
//! # Core Concepts
//!
//! - [`DeclaredModel`]: a content type expressed in application code
//! - [`ModelMetadata`]: optional explicit overrides for schema fields
//! - [`ModelDescriptor`]: the normalized descriptor extracted from a
//!   declared model, used as the comparison input for reconciliation
//! - [`ModelRegistry`]: explicit registry of every declared model in the
//!   process, enumerated in a deterministic order
//!
//! Descriptors are ephemeral: they are produced fresh on every
//! reconciliation pass and never persisted.

#![allow(missing_docs)]

mod descriptor;
mod error;
mod metadata;
mod registry;

pub use descriptor::{
    DataTypeRef, ExtractDefaults, ModelDescriptor, PropertyDescriptor, PropertyGroupDescriptor,
    DEFAULT_ICON, DEFAULT_THUMBNAIL,
};
pub use error::ModelError;
pub use metadata::ModelMetadata;
pub use registry::{DeclaredModel, ModelRegistry};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
