//! Per-model outcomes and the pass report
//!
//! One [`ReconcileOutcome`] is produced per declared model per pass.
//! The [`PassReport`] collects them in enumeration order and is the
//! observability output of a pass: the trigger logs it and feeds its
//! failures to the error ledger.

use crate::error::ReconcileError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// The schema fields the reconciler is authorized to own
///
/// Structural elements outside this set (administration-added groups
/// and properties) are preserved untouched.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SchemaField {
    Alias,
    DisplayName,
    Description,
    Icon,
    Thumbnail,
    AllowedAsRoot,
    PropertyGroups,
}

impl SchemaField {
    /// Stable field name used in logs and change sets
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alias => "alias",
            Self::DisplayName => "display_name",
            Self::Description => "description",
            Self::Icon => "icon",
            Self::Thumbnail => "thumbnail",
            Self::AllowedAsRoot => "allowed_as_root",
            Self::PropertyGroups => "property_groups",
        }
    }
}

impl fmt::Display for SchemaField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of reconciling one declared model
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// No schema carried the alias; a new one was persisted
    Created,
    /// The persisted schema diverged; the named fields were updated
    Updated(BTreeSet<SchemaField>),
    /// Descriptor and persisted schema already agree; nothing written
    Unchanged,
    /// This model's reconciliation failed; the pass continued
    Failed(ReconcileError),
}

impl ReconcileOutcome {
    /// True for `Failed`
    #[inline]
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// True when the outcome wrote to the store
    #[inline]
    #[must_use]
    pub fn wrote(&self) -> bool {
        matches!(self, Self::Created | Self::Updated(_))
    }

    /// Short label for logging
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated(_) => "updated",
            Self::Unchanged => "unchanged",
            Self::Failed(_) => "failed",
        }
    }
}

/// One registry entry's outcome within a pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelOutcome {
    /// Fully qualified type name of the declared model
    pub type_name: String,
    /// Resolved alias, when extraction got that far
    pub alias: Option<String>,
    /// What happened
    pub outcome: ReconcileOutcome,
}

/// Ordered outcomes of one full reconciliation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassReport {
    outcomes: Vec<ModelOutcome>,
}

impl PassReport {
    /// Create an empty report
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one model's outcome
    pub fn push(
        &mut self,
        type_name: impl Into<String>,
        alias: Option<String>,
        outcome: ReconcileOutcome,
    ) {
        self.outcomes.push(ModelOutcome {
            type_name: type_name.into(),
            alias,
            outcome,
        });
    }

    /// Outcomes in enumeration order
    #[must_use]
    pub fn outcomes(&self) -> &[ModelOutcome] {
        &self.outcomes
    }

    /// True when no model failed
    #[must_use]
    pub fn is_clean(&self) -> bool {
        !self.outcomes.iter().any(|o| o.outcome.is_failed())
    }

    /// Iterate the failed outcomes
    pub fn failures(&self) -> impl Iterator<Item = (&ModelOutcome, &ReconcileError)> {
        self.outcomes.iter().filter_map(|o| match &o.outcome {
            ReconcileOutcome::Failed(err) => Some((o, err)),
            _ => None,
        })
    }

    /// The last failure of the pass, if any
    #[must_use]
    pub fn last_failure(&self) -> Option<(&ModelOutcome, &ReconcileError)> {
        self.failures().last()
    }

    /// Number of models processed
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// True when nothing was processed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    fn count(&self, label: &str) -> usize {
        self.outcomes.iter().filter(|o| o.outcome.label() == label).count()
    }

    /// One-line summary for pass-level logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} created, {} updated, {} unchanged, {} failed",
            self.count("created"),
            self.count("updated"),
            self.count("unchanged"),
            self.count("failed"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn schema_field_names_are_stable() {
        assert_eq!(SchemaField::DisplayName.to_string(), "display_name");
        assert_eq!(SchemaField::AllowedAsRoot.as_str(), "allowed_as_root");
    }

    #[test]
    fn outcome_classification() {
        assert!(ReconcileOutcome::Created.wrote());
        assert!(ReconcileOutcome::Updated(BTreeSet::new()).wrote());
        assert!(!ReconcileOutcome::Unchanged.wrote());
        assert!(ReconcileOutcome::Failed(ReconcileError::ElectionLost).is_failed());
    }

    #[test]
    fn report_clean_and_summary() {
        let mut report = PassReport::new();
        report.push("a::One", Some("one".into()), ReconcileOutcome::Created);
        report.push("b::Two", Some("two".into()), ReconcileOutcome::Unchanged);
        assert!(report.is_clean());
        assert_eq!(report.summary(), "1 created, 0 updated, 1 unchanged, 0 failed");

        report.push(
            "c::Three",
            Some("three".into()),
            ReconcileOutcome::Failed(ReconcileError::ElectionLost),
        );
        assert!(!report.is_clean());
        assert_eq!(report.failures().count(), 1);
        assert_eq!(report.last_failure().unwrap().0.type_name, "c::Three");
    }
}
