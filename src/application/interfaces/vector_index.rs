use async_trait::async_trait;

use crate::domain::{ComponentDocument, ComponentMatch, ComponentQuery, DomainError};

/// Outcome of [`VectorIndex::ensure_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexState {
    Created,
    Existing,
}

/// One document the index rejected during an upsert batch.
#[derive(Debug, Clone)]
pub struct UpsertFailure {
    pub key: String,
    pub message: String,
}

/// Per-document outcome of a bulk upsert.
#[derive(Debug, Clone, Default)]
pub struct UpsertReport {
    pub succeeded: usize,
    pub failures: Vec<UpsertFailure>,
}

impl UpsertReport {
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Managed vector index storing component documents and supporting
/// nearest-neighbor search with conjunctive equality filters. The index
/// name is fixed at adapter construction.
#[async_trait]
pub trait VectorIndex: Send + Sync {
    /// Create the index with the component schema if it does not exist.
    async fn ensure_index(&self) -> Result<IndexState, DomainError>;

    /// Coarse emptiness check: true when the index holds at least one
    /// document.
    async fn has_documents(&self) -> Result<bool, DomainError>;

    /// Insert-or-replace documents by id. Per-document failures are
    /// reported, not raised.
    async fn upsert(&self, documents: &[ComponentDocument]) -> Result<UpsertReport, DomainError>;

    /// Nearest-neighbor search over the stored vectors, narrowed by the
    /// query's filters, ordered by relevance score descending. Returns
    /// up to `query.fetch_limit()` results.
    async fn vector_search(
        &self,
        vector: &[f32],
        query: &ComponentQuery,
    ) -> Result<Vec<ComponentMatch>, DomainError>;

    async fn count(&self) -> Result<u64, DomainError>;
}
