//! Schema repository gateway
//!
//! The single seam between reconciliation and whatever holds the
//! persisted schemas. Implementations own query construction entirely;
//! callers only see records keyed by alias.

use crate::error::StoreError;
use crate::schema::PersistedSchema;
use async_trait::async_trait;

/// Read/write access to persisted content-type schemas
#[async_trait]
pub trait SchemaStore: Send + Sync {
    /// Fetch every persisted schema
    async fn fetch_all(&self) -> Result<Vec<PersistedSchema>, StoreError>;

    /// Fetch one schema by alias, `None` when no schema carries it
    async fn fetch_by_alias(&self, alias: &str) -> Result<Option<PersistedSchema>, StoreError>;

    /// Persist a schema, assigning an identity on first save
    ///
    /// Returns the stored record (with `id` populated).
    async fn save(&self, schema: PersistedSchema) -> Result<PersistedSchema, StoreError>;
}
