//! In-memory schema store
//!
//! Reference [`SchemaStore`] backend for tests and single-process
//! embeddings. Keyed by assigned id with alias uniqueness enforced on
//! save. Carries fault-injection toggles so failure paths can be
//! exercised without a real backend.

use crate::error::StoreError;
use crate::schema::{PersistedSchema, SchemaId};
use crate::store::SchemaStore;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// In-memory [`SchemaStore`] implementation
#[derive(Debug, Default)]
pub struct MemoryStore {
    schemas: DashMap<u64, PersistedSchema>,
    next_id: AtomicU64,
    save_count: AtomicU64,
    fail_saves: AtomicBool,
    fail_fetches: AtomicBool,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of saves performed (successful only)
    #[must_use]
    pub fn save_count(&self) -> u64 {
        self.save_count.load(Ordering::SeqCst)
    }

    /// Number of schemas currently held
    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// True when the store holds no schemas
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Toggle save failure injection
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Toggle fetch failure injection
    pub fn fail_fetches(&self, fail: bool) {
        self.fail_fetches.store(fail, Ordering::SeqCst);
    }

    /// Insert a schema directly, bypassing the gateway contract
    ///
    /// Test seam for seeding state that arrived outside reconciliation
    /// (e.g. an administration edit). Assigns an id when missing.
    pub fn seed(&self, mut schema: PersistedSchema) -> SchemaId {
        let id = schema
            .id
            .unwrap_or_else(|| SchemaId(self.next_id.fetch_add(1, Ordering::SeqCst) + 1));
        self.next_id.fetch_max(id.0, Ordering::SeqCst);
        schema.id = Some(id);
        self.schemas.insert(id.0, schema);
        id
    }

    fn alias_taken_by_other(&self, alias: &str, id: Option<SchemaId>) -> bool {
        self.schemas
            .iter()
            .any(|entry| entry.value().alias == alias && entry.value().id != id)
    }
}

#[async_trait]
impl SchemaStore for MemoryStore {
    async fn fetch_all(&self) -> Result<Vec<PersistedSchema>, StoreError> {
        if self.fail_fetches.load(Ordering::SeqCst) {
            return Err(StoreError::Connection("injected fetch failure".into()));
        }
        let mut all: Vec<PersistedSchema> =
            self.schemas.iter().map(|entry| entry.value().clone()).collect();
        all.sort_by_key(|s| s.id);
        Ok(all)
    }

    async fn fetch_by_alias(&self, alias: &str) -> Result<Option<PersistedSchema>, StoreError> {
        if self.fail_fetches.load(Ordering::SeqCst) {
            return Err(StoreError::Connection("injected fetch failure".into()));
        }
        Ok(self
            .schemas
            .iter()
            .find(|entry| entry.value().alias == alias)
            .map(|entry| entry.value().clone()))
    }

    async fn save(&self, mut schema: PersistedSchema) -> Result<PersistedSchema, StoreError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("injected save failure".into()));
        }
        if self.alias_taken_by_other(&schema.alias, schema.id) {
            return Err(StoreError::conflict(format!(
                "alias `{}` already persisted under a different id",
                schema.alias
            )));
        }

        let id = schema
            .id
            .unwrap_or_else(|| SchemaId(self.next_id.fetch_add(1, Ordering::SeqCst) + 1));
        schema.id = Some(id);
        self.schemas.insert(id.0, schema.clone());
        self.save_count.fetch_add(1, Ordering::SeqCst);
        Ok(schema)
    }
}
