//! Reconciliation error ledger
//!
//! Process-wide, latest-failure-only health indicator. Not an audit
//! log: `report` overwrites, `clear` runs only after a fully clean
//! pass, and reads may happen at any time (health checks, tests,
//! operator tooling).

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::fmt;

/// The most recent reconciliation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    /// What failed, in operator terms
    pub summary: String,
    /// Rendered underlying cause
    pub cause: String,
    /// When the failure was recorded
    pub at: DateTime<Utc>,
}

/// Holds the most recent reconciliation failure, if any
#[derive(Debug, Default)]
pub struct ErrorLedger {
    inner: Mutex<Option<LedgerEntry>>,
}

impl ErrorLedger {
    /// Create an empty ledger
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure, overwriting any earlier one
    pub fn report(&self, summary: impl Into<String>, cause: &dyn fmt::Display) {
        let entry = LedgerEntry {
            summary: summary.into(),
            cause: cause.to_string(),
            at: Utc::now(),
        };
        *self.inner.lock() = Some(entry);
    }

    /// Empty the ledger; called only after a fully clean pass
    pub fn clear(&self) {
        *self.inner.lock() = None;
    }

    /// The current failure, if any
    #[must_use]
    pub fn current(&self) -> Option<LedgerEntry> {
        self.inner.lock().clone()
    }

    /// True when no failure is recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_none()
    }
}
