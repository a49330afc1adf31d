use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::{IndexState, UpsertReport, VectorIndex};
use crate::domain::{ComponentDocument, ComponentMatch, ComponentQuery, DomainError};

/// In-process [`VectorIndex`] used by tests and the `--memory-index`
/// flag. Documents are keyed by id, so repeated ingestion of the same
/// component overwrites rather than duplicates.
pub struct InMemoryVectorIndex {
    documents: Arc<Mutex<HashMap<String, ComponentDocument>>>,
    created: AtomicBool,
}

impl InMemoryVectorIndex {
    pub fn new() -> Self {
        Self {
            documents: Arc::new(Mutex::new(HashMap::new())),
            created: AtomicBool::new(false),
        }
    }
}

impl Default for InMemoryVectorIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VectorIndex for InMemoryVectorIndex {
    async fn ensure_index(&self) -> Result<IndexState, DomainError> {
        if self.created.swap(true, Ordering::SeqCst) {
            Ok(IndexState::Existing)
        } else {
            Ok(IndexState::Created)
        }
    }

    async fn has_documents(&self) -> Result<bool, DomainError> {
        let documents = self.documents.lock().await;
        Ok(!documents.is_empty())
    }

    async fn upsert(&self, batch: &[ComponentDocument]) -> Result<UpsertReport, DomainError> {
        let mut documents = self.documents.lock().await;
        for document in batch {
            documents.insert(document.id.clone(), document.clone());
        }

        debug!("Upserted {} documents into memory", batch.len());
        Ok(UpsertReport {
            succeeded: batch.len(),
            failures: Vec::new(),
        })
    }

    async fn vector_search(
        &self,
        vector: &[f32],
        query: &ComponentQuery,
    ) -> Result<Vec<ComponentMatch>, DomainError> {
        let documents = self.documents.lock().await;

        let mut scored: Vec<(&ComponentDocument, f32)> = documents
            .values()
            .filter(|doc| matches_filters(doc, query))
            .map(|doc| (doc, cosine_similarity(vector, &doc.component_vector)))
            .collect();

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(query.fetch_limit());

        Ok(scored
            .into_iter()
            .map(|(doc, score)| ComponentMatch {
                id: doc.id.clone(),
                component_name: doc.component_name.clone(),
                category: doc.component_category.clone(),
                layout_method: doc.layout_method.clone(),
                image_count: doc.image_count,
                image_arrangement: doc.image_arrangement.clone(),
                complexity: doc.complexity_level.clone(),
                source_code: doc.source_code.clone(),
                keywords: doc.search_keywords.clone(),
                score,
            })
            .collect())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let documents = self.documents.lock().await;
        Ok(documents.len() as u64)
    }
}

fn matches_filters(doc: &ComponentDocument, query: &ComponentQuery) -> bool {
    if let Some(category) = query.category() {
        if doc.component_category != category.as_str() {
            return false;
        }
    }
    if let Some(count) = query.image_count() {
        if doc.image_count != count {
            return false;
        }
    }
    if let Some(complexity) = query.complexity() {
        if doc.complexity_level != complexity.as_str() {
            return false;
        }
    }
    true
}

fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot_product / (norm_a * norm_b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis;
    use crate::domain::{ComplexityLevel, ComponentSource};

    fn document(name: &str, text: &str, vector: Vec<f32>) -> ComponentDocument {
        let source = ComponentSource::new(name, text);
        let profile = analysis::profile(&source);
        let embedding_text = analysis::compose_embedding_text(&profile);
        ComponentDocument::assemble(&source, &profile, embedding_text, vector).unwrap()
    }

    #[tokio::test]
    async fn upsert_overwrites_by_id() {
        let index = InMemoryVectorIndex::new();

        let first = document("Hero", "<img/>", vec![1.0, 0.0]);
        let second = document("Hero", "<img/><img/>", vec![0.0, 1.0]);

        index.upsert(&[first]).await.unwrap();
        index.upsert(&[second]).await.unwrap();

        assert_eq!(index.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn ensure_index_reports_created_then_existing() {
        let index = InMemoryVectorIndex::new();
        assert_eq!(index.ensure_index().await.unwrap(), IndexState::Created);
        assert_eq!(index.ensure_index().await.unwrap(), IndexState::Existing);
    }

    #[tokio::test]
    async fn search_ranks_by_cosine_and_respects_fetch_limit() {
        let index = InMemoryVectorIndex::new();
        index
            .upsert(&[
                document("A", "<img/>", vec![1.0, 0.0]),
                document("B", "<img/>", vec![0.9, 0.1]),
                document("C", "<img/>", vec![0.0, 1.0]),
            ])
            .await
            .unwrap();

        let query = ComponentQuery::new("q").with_top_k(1).with_fetch_limit(2);
        let results = index.vector_search(&[1.0, 0.0], &query).await.unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].component_name, "A");
        assert_eq!(results[1].component_name, "B");
    }

    #[tokio::test]
    async fn filters_apply_conjunctively() {
        let index = InMemoryVectorIndex::new();
        index
            .upsert(&[
                document("ImageOne", "<img/>", vec![1.0, 0.0]),
                document("ImagePair", "<img/><img/>", vec![1.0, 0.0]),
                document("TextOnly", "<p>hi</p>", vec![1.0, 0.0]),
            ])
            .await
            .unwrap();

        let query = ComponentQuery::new("q")
            .with_image_count(1)
            .with_complexity(ComplexityLevel::Simple);
        let results = index.vector_search(&[1.0, 0.0], &query).await.unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].component_name, "ImageOne");
    }

    #[tokio::test]
    async fn zero_vector_scores_zero() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
        assert_eq!(cosine_similarity(&[1.0], &[1.0, 0.0]), 0.0);
    }
}
