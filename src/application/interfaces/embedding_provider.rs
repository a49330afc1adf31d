use async_trait::async_trait;

use crate::domain::DomainError;

/// Generates vector embeddings from component summaries and queries.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a single text into a fixed-dimension vector.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, DomainError>;

    fn dimensions(&self) -> usize;
}
