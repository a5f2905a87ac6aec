//! Modelsync Schema Store
//!
//! The system-of-record side of reconciliation: persisted content-type
//! schemas, the repository gateway trait the core consumes, and an
//! in-memory reference backend.
//!
//! # Core Concepts
//!
//! - [`PersistedSchema`]: the stored content-type record (descriptor
//!   shape plus a store-assigned identity and tree position)
//! - [`SchemaStore`]: the gateway trait — the core never builds storage
//!   queries itself
//! - [`MemoryStore`]: reference backend used by tests and single-process
//!   embeddings, with fault injection for failure-path coverage

#![allow(missing_docs)]

mod error;
mod memory;
mod schema;
mod store;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use schema::{ParentRef, PersistedSchema, SchemaId};
pub use store::SchemaStore;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
