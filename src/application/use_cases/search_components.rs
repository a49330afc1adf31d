use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};

use crate::application::{EmbeddingProvider, VectorIndex};
use crate::domain::{Category, ComponentMatch, ComponentQuery, DomainError};

/// Candidates fetched per requested result. The extra candidates allow
/// downstream truncation after optional re-ranking; no re-ranking is
/// applied, so they are simply discarded.
const OVERFETCH_FACTOR: usize = 2;

/// Results returned by the recommendation helper.
const RECOMMEND_TOP_K: usize = 3;

/// Embeds a free-text query and matches it against stored component
/// vectors, optionally narrowed by structured filters.
pub struct SearchComponentsUseCase {
    vector_index: Arc<dyn VectorIndex>,
    embedding_provider: Arc<dyn EmbeddingProvider>,
}

impl SearchComponentsUseCase {
    pub fn new(
        vector_index: Arc<dyn VectorIndex>,
        embedding_provider: Arc<dyn EmbeddingProvider>,
    ) -> Self {
        Self {
            vector_index,
            embedding_provider,
        }
    }

    /// Run one retrieval. An embedding failure aborts only this call and
    /// yields an empty result list, never an error.
    pub async fn execute(&self, query: ComponentQuery) -> Result<Vec<ComponentMatch>, DomainError> {
        info!(
            "Searching components: \"{}\" (top_k={})",
            query.query(),
            query.top_k()
        );
        let start_time = Instant::now();

        let query_vector = match self.embedding_provider.embed(query.query()).await {
            Ok(vector) => vector,
            Err(e) => {
                warn!("Query embedding failed, returning no results: {}", e);
                return Ok(Vec::new());
            }
        };

        let fetch_query = query
            .clone()
            .with_fetch_limit(query.top_k() * OVERFETCH_FACTOR);

        let mut results = self
            .vector_index
            .vector_search(&query_vector, &fetch_query)
            .await?;
        results.truncate(query.top_k());

        info!(
            "Found {} results in {:.2}s",
            results.len(),
            start_time.elapsed().as_secs_f64()
        );

        Ok(results)
    }

    /// Recommend components for a content description. An image-count
    /// hint narrows the category, and an optional layout preference is
    /// folded into the query text.
    pub async fn recommend(
        &self,
        content_description: &str,
        image_count: Option<u32>,
        layout_preference: Option<&str>,
    ) -> Result<Vec<ComponentMatch>, DomainError> {
        let mut query_text = format!("{} layout design component", content_description);
        if let Some(layout) = layout_preference {
            query_text.push(' ');
            query_text.push_str(layout);
        }

        let mut query = ComponentQuery::new(query_text).with_top_k(RECOMMEND_TOP_K);

        if let Some(count) = image_count {
            query = query
                .with_category(category_for_image_count(count))
                .with_image_count(count);
        }

        self.execute(query).await
    }
}

/// Category hint for a content plan: no images reads as text-focused,
/// one or two as mixed, more as image-focused.
pub fn category_for_image_count(count: u32) -> Category {
    match count {
        0 => Category::TextFocused,
        1..=2 => Category::Mixed,
        _ => Category::ImageFocused,
    }
}
