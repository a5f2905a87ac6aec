//! Synchronization trigger
//!
//! Decides when a reconciliation pass runs. The trigger is a small
//! atomic state machine over `Idle`/`Dirty`/`Running`:
//!
//! - startup runs a pass unconditionally (writer permitting);
//! - a schema-definition change marks the trigger dirty, coalesced —
//!   repeated requests while dirty are no-ops;
//! - the end of a unit of work runs a pass if dirty and this instance
//!   is the elected writer; non-writers stay dirty and defer.
//!
//! Passes never interleave. A request arriving while a pass is running
//! is captured in a fourth internal state (`RUNNING_DIRTY`) and honored
//! by the next pass. A failed pass still returns to `Idle`; nothing
//! retries automatically.

use crate::ledger::ErrorLedger;
use crate::notification::Notification;
use crate::settings::SyncSettings;
use modelsync_model::ModelRegistry;
use modelsync_reconcile::{PassReport, Reconciler, WriterElection};
use modelsync_store::SchemaStore;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

const IDLE: u8 = 0;
const DIRTY: u8 = 1;
const RUNNING: u8 = 2;
// A pass is running and a request arrived mid-pass; becomes DIRTY when
// the pass finishes.
const RUNNING_DIRTY: u8 = 3;

/// Externally visible trigger state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    /// Nothing requested
    Idle,
    /// A pass is requested and waiting for the next opportunity
    Dirty,
    /// A pass is executing right now
    Running,
}

/// Wires reconciliation into lifecycle notifications
pub struct SyncHandler<S> {
    settings: SyncSettings,
    registry: ModelRegistry,
    reconciler: Reconciler<S>,
    election: Arc<dyn WriterElection>,
    ledger: Arc<ErrorLedger>,
    state: AtomicU8,
}

impl<S: SchemaStore> SyncHandler<S> {
    /// Create a handler over a registry and store
    pub fn new(
        settings: SyncSettings,
        registry: ModelRegistry,
        store: Arc<S>,
        election: Arc<dyn WriterElection>,
    ) -> Self {
        let reconciler = Reconciler::new(store, Arc::clone(&election))
            .with_defaults(settings.extract_defaults())
            .with_default_parent(settings.default_parent);
        Self {
            settings,
            registry,
            reconciler,
            election,
            ledger: Arc::new(ErrorLedger::new()),
            state: AtomicU8::new(IDLE),
        }
    }

    /// The operator-visible error ledger
    #[must_use]
    pub fn ledger(&self) -> Arc<ErrorLedger> {
        Arc::clone(&self.ledger)
    }

    /// Current trigger state
    #[must_use]
    pub fn state(&self) -> SyncState {
        match self.state.load(Ordering::SeqCst) {
            DIRTY => SyncState::Dirty,
            RUNNING | RUNNING_DIRTY => SyncState::Running,
            _ => SyncState::Idle,
        }
    }

    /// React to one lifecycle notification
    ///
    /// Returns the pass report when the notification caused a pass to
    /// run, for logging/observability sinks.
    pub async fn handle(&self, notification: Notification) -> Option<PassReport> {
        match notification {
            Notification::ApplicationStarting => self.process().await,
            Notification::UnitOfWorkEnded => self.process_if_requested().await,
            Notification::SchemaDefinitionChanged => {
                self.request();
                None
            }
        }
    }

    /// Request a pass for the next opportunity (coalesced)
    pub fn request(&self) {
        if !self.settings.is_enabled() {
            return;
        }
        let marked = self.state.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |s| match s {
            IDLE => Some(DIRTY),
            RUNNING => Some(RUNNING_DIRTY),
            // already dirty (or captured mid-pass): coalesced no-op
            _ => None,
        });
        if marked.is_ok() {
            debug!("schema sync requested");
        }
    }

    /// Run a pass unconditionally (the startup path)
    pub async fn process(&self) -> Option<PassReport> {
        if !self.settings.is_enabled() {
            return None;
        }
        if !self.election.is_writer() {
            debug!("not the elected writer, skipping startup sync");
            return None;
        }
        // Startup absorbs any pending request; only an in-flight pass
        // blocks it.
        let claimed = self.state.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |s| match s {
            IDLE | DIRTY => Some(RUNNING),
            _ => None,
        });
        if claimed.is_err() {
            return None;
        }
        Some(self.run().await)
    }

    /// Run a pass if one was requested and this instance may write
    pub async fn process_if_requested(&self) -> Option<PassReport> {
        if !self.settings.is_enabled() {
            return None;
        }
        if self.state.load(Ordering::SeqCst) != DIRTY {
            return None;
        }
        if !self.election.is_writer() {
            // The request persists until a writer-elected instance
            // processes it.
            warn!("schema sync requested but this instance is not the elected writer, deferring");
            return None;
        }
        if self
            .state
            .compare_exchange(DIRTY, RUNNING, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return None;
        }
        Some(self.run().await)
    }

    async fn run(&self) -> PassReport {
        info!(models = self.registry.len(), "processing code-first models");
        let report = self.reconciler.run_pass(&self.registry).await;

        if report.is_clean() {
            self.ledger.clear();
            info!(summary = %report.summary(), "code-first models processed");
        } else {
            if let Some((outcome, err)) = report.last_failure() {
                self.ledger.report(
                    format!("failed to process code-first model `{}`", outcome.type_name),
                    err,
                );
            }
            error!(summary = %report.summary(), "code-first model processing failed");
        }

        self.finish();
        report
    }

    fn finish(&self) {
        // RUNNING -> IDLE; RUNNING_DIRTY -> DIRTY so a mid-pass request
        // is honored by the next pass.
        let _ = self.state.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |s| match s {
            RUNNING => Some(IDLE),
            RUNNING_DIRTY => Some(DIRTY),
            _ => None,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modelsync_reconcile::AlwaysWriter;
    use modelsync_store::MemoryStore;
    use pretty_assertions::assert_eq;

    fn handler(settings: SyncSettings) -> SyncHandler<MemoryStore> {
        SyncHandler::new(
            settings,
            ModelRegistry::new(),
            Arc::new(MemoryStore::new()),
            Arc::new(AlwaysWriter),
        )
    }

    #[test]
    fn request_marks_dirty_once() {
        let sut = handler(SyncSettings::code_first());
        assert_eq!(sut.state(), SyncState::Idle);

        sut.request();
        assert_eq!(sut.state(), SyncState::Dirty);

        // Coalesced: a second request changes nothing
        sut.request();
        assert_eq!(sut.state(), SyncState::Dirty);
    }

    #[test]
    fn request_is_ignored_when_disabled() {
        let sut = handler(SyncSettings::default());
        sut.request();
        assert_eq!(sut.state(), SyncState::Idle);
    }

    #[test]
    fn mid_pass_request_is_captured_for_next_pass() {
        let sut = handler(SyncSettings::code_first());
        sut.state.store(RUNNING, Ordering::SeqCst);

        sut.request();
        assert_eq!(sut.state.load(Ordering::SeqCst), RUNNING_DIRTY);

        sut.finish();
        assert_eq!(sut.state(), SyncState::Dirty);
    }

    #[test]
    fn finish_returns_running_to_idle() {
        let sut = handler(SyncSettings::code_first());
        sut.state.store(RUNNING, Ordering::SeqCst);
        sut.finish();
        assert_eq!(sut.state(), SyncState::Idle);
    }

    #[tokio::test]
    async fn unit_of_work_without_request_is_a_no_op() {
        let sut = handler(SyncSettings::code_first());
        assert!(sut.handle(Notification::UnitOfWorkEnded).await.is_none());
        assert_eq!(sut.state(), SyncState::Idle);
    }

    #[tokio::test]
    async fn startup_runs_even_without_request() {
        let sut = handler(SyncSettings::code_first());
        let report = sut.handle(Notification::ApplicationStarting).await.unwrap();
        assert!(report.is_empty()); // empty registry, but the pass ran
        assert_eq!(sut.state(), SyncState::Idle);
    }

    #[tokio::test]
    async fn disabled_mode_never_runs() {
        let sut = handler(SyncSettings::default());
        assert!(sut.handle(Notification::ApplicationStarting).await.is_none());
        sut.handle(Notification::SchemaDefinitionChanged).await;
        assert!(sut.handle(Notification::UnitOfWorkEnded).await.is_none());
    }
}
