//! Modelsync Reconciler
//!
//! Compares declared content models against their persisted schemas and
//! applies the minimal set of changes through the store gateway.
//!
//! # Core Concepts
//!
//! - [`diff`]: field-by-field comparison plus non-destructive property
//!   group merge — administration-added groups are never touched
//! - [`ReconcileOutcome`]: per-model result (`Created`, `Updated`,
//!   `Unchanged`, `Failed`)
//! - [`PassReport`]: ordered outcomes of one full pass over the registry
//! - [`WriterElection`]: the seam deciding whether this process instance
//!   may write at all
//!
//! Failures are contained per model: a bad descriptor, a duplicate
//! alias or a storage error never aborts the rest of the pass. The one
//! exception is losing the writer election mid-pass, which abandons all
//! remaining writes.

#![allow(missing_docs)]

mod diff;
mod election;
mod error;
mod outcome;
mod reconciler;

pub use diff::{diff, SchemaDiff};
pub use election::{AlwaysWriter, WriterElection};
pub use error::ReconcileError;
pub use outcome::{ModelOutcome, PassReport, ReconcileOutcome, SchemaField};
pub use reconciler::Reconciler;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
