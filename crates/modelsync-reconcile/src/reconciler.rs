//! Pass execution
//!
//! One [`Reconciler::run_pass`] call walks the registry in its
//! deterministic order and reconciles every declared model
//! independently. Models are processed even after earlier ones fail;
//! only a lost writer election abandons the remainder of a pass.

use crate::diff::diff;
use crate::election::WriterElection;
use crate::error::ReconcileError;
use crate::outcome::{PassReport, ReconcileOutcome};
use modelsync_model::{ExtractDefaults, ModelDescriptor, ModelRegistry};
use modelsync_store::{ParentRef, PersistedSchema, SchemaStore};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Reconciles declared models against the persisted schema store
pub struct Reconciler<S> {
    store: Arc<S>,
    election: Arc<dyn WriterElection>,
    defaults: ExtractDefaults,
    default_parent: ParentRef,
}

impl<S: SchemaStore> Reconciler<S> {
    /// Create a reconciler with system extraction defaults and root as
    /// the default parent
    pub fn new(store: Arc<S>, election: Arc<dyn WriterElection>) -> Self {
        Self {
            store,
            election,
            defaults: ExtractDefaults::default(),
            default_parent: ParentRef::Root,
        }
    }

    /// Override the extraction defaults (icon/thumbnail fallbacks)
    #[must_use]
    pub fn with_defaults(mut self, defaults: ExtractDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Override where newly created schemas are attached
    #[must_use]
    pub fn with_default_parent(mut self, parent: ParentRef) -> Self {
        self.default_parent = parent;
        self
    }

    /// Reconcile every registered model, in registry order
    ///
    /// Per-model failures are recorded and the pass continues, except
    /// for a lost election which abandons the remaining models.
    pub async fn run_pass(&self, registry: &ModelRegistry) -> PassReport {
        let mut report = PassReport::new();
        // alias -> first claiming type name, for the duplicate tie-break
        let mut claimed: HashMap<String, String> = HashMap::new();

        for model in registry.models() {
            let descriptor = match model.descriptor(&self.defaults) {
                Ok(descriptor) => descriptor,
                Err(err) => {
                    warn!(type_name = %model.type_name, %err, "skipping model");
                    report.push(&model.type_name, None, ReconcileOutcome::Failed(err.into()));
                    continue;
                }
            };

            if let Some(first_type) = claimed.get(&descriptor.alias) {
                let err = ReconcileError::duplicate_alias(&descriptor.alias, first_type);
                warn!(type_name = %model.type_name, %err, "skipping model");
                report.push(
                    &model.type_name,
                    Some(descriptor.alias),
                    ReconcileOutcome::Failed(err),
                );
                continue;
            }
            claimed.insert(descriptor.alias.clone(), model.type_name.clone());

            let outcome = self.reconcile_one(&descriptor).await;
            debug!(
                type_name = %model.type_name,
                alias = %descriptor.alias,
                outcome = outcome.label(),
                "model reconciled"
            );

            let lost_election =
                matches!(outcome, ReconcileOutcome::Failed(ReconcileError::ElectionLost));
            report.push(&model.type_name, Some(descriptor.alias), outcome);

            if lost_election {
                warn!("writer election lost, abandoning remaining models this pass");
                break;
            }
        }

        report
    }

    /// Reconcile a single descriptor against the store
    async fn reconcile_one(&self, descriptor: &ModelDescriptor) -> ReconcileOutcome {
        let existing = match self.store.fetch_by_alias(&descriptor.alias).await {
            Ok(existing) => existing,
            Err(err) => return ReconcileOutcome::Failed(err.into()),
        };

        match existing {
            None => {
                if !self.election.is_writer() {
                    return ReconcileOutcome::Failed(ReconcileError::ElectionLost);
                }
                let parent = if descriptor.allowed_as_root {
                    ParentRef::Root
                } else {
                    self.default_parent
                };
                let schema = PersistedSchema::from_descriptor(descriptor, parent);
                match self.store.save(schema).await {
                    Ok(_) => ReconcileOutcome::Created,
                    Err(err) => ReconcileOutcome::Failed(err.into()),
                }
            }
            Some(persisted) => {
                let result = diff(descriptor, &persisted);
                if result.is_unchanged() {
                    return ReconcileOutcome::Unchanged;
                }
                if !self.election.is_writer() {
                    return ReconcileOutcome::Failed(ReconcileError::ElectionLost);
                }
                match self.store.save(result.merged).await {
                    Ok(_) => ReconcileOutcome::Updated(result.changed),
                    Err(err) => ReconcileOutcome::Failed(err.into()),
                }
            }
        }
    }
}
