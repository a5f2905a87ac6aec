//! Lifecycle notifications
//!
//! The three events that drive synchronization. They carry no payload;
//! their occurrence is the whole message.

use serde::{Deserialize, Serialize};

/// An application lifecycle event the handler reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notification {
    /// The application is starting; reconcile everything unconditionally
    ApplicationStarting,

    /// A unit of work (request, processing cycle) just ended; run a
    /// pass now if one was requested
    UnitOfWorkEnded,

    /// A content-type or data-type definition changed somewhere;
    /// request a pass for the next opportunity
    SchemaDefinitionChanged,
}
