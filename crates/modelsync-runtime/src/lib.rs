//! Modelsync Runtime
//!
//! Wires reconciliation into application lifecycle events.
//!
//! # Core Concepts
//!
//! - [`SyncSettings`]: mode gate and placement/extraction defaults,
//!   loadable from TOML
//! - [`Notification`]: the three lifecycle events that drive syncing
//! - [`SyncHandler`]: the Idle/Dirty/Running trigger — decides *when* a
//!   reconciliation pass runs and enforces single-writer semantics
//! - [`ErrorLedger`]: latest-failure health indicator for operators
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use modelsync_runtime::{Notification, SyncHandler, SyncSettings};
//!
//! let handler = SyncHandler::new(SyncSettings::code_first(), registry, store, election);
//! handler.handle(Notification::ApplicationStarting).await;
//! // later, on content-type cache invalidation:
//! handler.handle(Notification::SchemaDefinitionChanged).await;
//! // and at the end of the unit of work:
//! handler.handle(Notification::UnitOfWorkEnded).await;
//! ```

#![allow(missing_docs)]

mod error;
mod ledger;
mod notification;
mod settings;
mod trigger;

pub use error::SettingsError;
pub use ledger::{ErrorLedger, LedgerEntry};
pub use notification::Notification;
pub use settings::{SyncMode, SyncSettings};
pub use trigger::{SyncHandler, SyncState};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
