//! Trigger semantics: coalescing, deferral and single-writer enforcement

use modelsync_runtime::{Notification, SyncHandler, SyncState, SyncSettings};
use modelsync_store::MemoryStore;
use modelsync_test_utils::{site_registry, ToggleElection};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn handler_with_election(
    store: Arc<MemoryStore>,
    election: Arc<ToggleElection>,
) -> SyncHandler<MemoryStore> {
    let _ = tracing_subscriber::fmt().with_env_filter("modelsync=debug").try_init();
    SyncHandler::new(SyncSettings::code_first(), site_registry(), store, election)
}

#[tokio::test]
async fn two_requests_coalesce_into_one_pass() {
    let store = Arc::new(MemoryStore::new());
    let election = Arc::new(ToggleElection::new(true));
    let sut = handler_with_election(Arc::clone(&store), election);

    sut.handle(Notification::SchemaDefinitionChanged).await;
    sut.handle(Notification::SchemaDefinitionChanged).await;
    assert_eq!(sut.state(), SyncState::Dirty);

    // Exactly one pass runs at the end of the unit of work
    assert!(sut.handle(Notification::UnitOfWorkEnded).await.is_some());
    assert_eq!(sut.state(), SyncState::Idle);
    assert!(sut.handle(Notification::UnitOfWorkEnded).await.is_none());
    assert_eq!(store.save_count(), 2); // one save per declared model
}

#[tokio::test]
async fn non_writer_never_saves_and_stays_dirty() {
    let store = Arc::new(MemoryStore::new());
    let election = Arc::new(ToggleElection::new(false));
    let sut = handler_with_election(Arc::clone(&store), Arc::clone(&election));

    // Startup is skipped outright on a non-writer
    assert!(sut.handle(Notification::ApplicationStarting).await.is_none());

    sut.handle(Notification::SchemaDefinitionChanged).await;
    assert!(sut.handle(Notification::UnitOfWorkEnded).await.is_none());

    assert_eq!(store.save_count(), 0);
    assert_eq!(sut.state(), SyncState::Dirty);
}

#[tokio::test]
async fn deferred_request_runs_once_election_is_won() {
    let store = Arc::new(MemoryStore::new());
    let election = Arc::new(ToggleElection::new(false));
    let sut = handler_with_election(Arc::clone(&store), Arc::clone(&election));

    sut.handle(Notification::SchemaDefinitionChanged).await;
    assert!(sut.handle(Notification::UnitOfWorkEnded).await.is_none());

    // This instance becomes the writer; the persisted request fires on
    // the next opportunity
    election.set_writer(true);
    let report = sut.handle(Notification::UnitOfWorkEnded).await.unwrap();
    assert!(report.is_clean());
    assert_eq!(sut.state(), SyncState::Idle);
}

#[tokio::test]
async fn election_lost_mid_pass_is_reported_not_fatal() {
    use modelsync_reconcile::{ReconcileError, ReconcileOutcome, WriterElection};
    use std::sync::atomic::{AtomicU64, Ordering};

    // Answers true for a fixed number of checks, then the election is gone
    struct ExpiringElection {
        remaining: AtomicU64,
    }
    impl WriterElection for ExpiringElection {
        fn is_writer(&self) -> bool {
            self.remaining
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
                .is_ok()
        }
    }

    let store = Arc::new(MemoryStore::new());
    // One check for the trigger gate, one for the first model's write;
    // the second model sees the election revoked.
    let election = Arc::new(ExpiringElection { remaining: AtomicU64::new(2) });
    let sut = SyncHandler::new(
        SyncSettings::code_first(),
        site_registry(),
        Arc::clone(&store),
        election,
    );

    sut.handle(Notification::SchemaDefinitionChanged).await;
    let report = sut.handle(Notification::UnitOfWorkEnded).await.unwrap();

    assert!(!report.is_clean());
    assert_eq!(report.outcomes()[0].outcome, ReconcileOutcome::Created);
    assert_eq!(
        report.outcomes()[1].outcome,
        ReconcileOutcome::Failed(ReconcileError::ElectionLost)
    );
    assert_eq!(store.save_count(), 1);

    // Reported to the ledger, state back to Idle, process still alive
    assert!(sut.ledger().current().unwrap().cause.contains("election lost"));
    assert_eq!(sut.state(), SyncState::Idle);
}
