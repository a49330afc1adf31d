use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use async_trait::async_trait;
use rand::Rng;
use rand::SeedableRng;
use tracing::debug;

use crate::application::EmbeddingProvider;
use crate::domain::{DomainError, VECTOR_DIMENSIONS};

/// Deterministic embedding provider: seeds an RNG from a hash of the
/// input text and emits a unit vector. Identical texts always produce
/// identical vectors, which is what the composer's stability contract is
/// tested against.
pub struct MockEmbedding {
    dimensions: usize,
}

impl MockEmbedding {
    pub fn new() -> Self {
        Self {
            dimensions: VECTOR_DIMENSIONS,
        }
    }

    pub fn with_dimensions(dimensions: usize) -> Self {
        Self { dimensions }
    }

    fn generate(&self, text: &str) -> Vec<f32> {
        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        let seed = hasher.finish();

        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let mut vector: Vec<f32> = (0..self.dimensions)
            .map(|_| rng.gen_range(-1.0..1.0))
            .collect();

        let magnitude: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if magnitude > 0.0 {
            for x in &mut vector {
                *x /= magnitude;
            }
        }

        vector
    }
}

impl Default for MockEmbedding {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmbeddingProvider for MockEmbedding {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, DomainError> {
        let vector = self.generate(text);
        debug!("Generated mock embedding with {} dimensions", vector.len());
        Ok(vector)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_embedding_is_deterministic() {
        let provider = MockEmbedding::new();

        let a = provider.embed("hero with images").await.unwrap();
        let b = provider.embed("hero with images").await.unwrap();

        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn mock_embedding_dimensions() {
        let provider = MockEmbedding::new();
        assert_eq!(provider.embed("x").await.unwrap().len(), VECTOR_DIMENSIONS);

        let small = MockEmbedding::with_dimensions(8);
        assert_eq!(small.embed("x").await.unwrap().len(), 8);
    }

    #[tokio::test]
    async fn mock_embedding_is_normalized() {
        let provider = MockEmbedding::new();
        let vector = provider.embed("test").await.unwrap();
        let magnitude: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((magnitude - 1.0).abs() < 0.001);
    }

    #[tokio::test]
    async fn different_texts_differ() {
        let provider = MockEmbedding::new();
        let a = provider.embed("one").await.unwrap();
        let b = provider.embed("two").await.unwrap();
        assert_ne!(a, b);
    }
}
