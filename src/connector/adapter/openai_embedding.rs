use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::application::EmbeddingProvider;
use crate::config::ServiceConfig;
use crate::domain::{DomainError, VECTOR_DIMENSIONS};

const EMBEDDINGS_PATH: &str = "/embeddings";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Deserialize)]
struct ApiResponse {
    data: Vec<EmbeddingItem>,
}

#[derive(Deserialize)]
struct EmbeddingItem {
    embedding: Vec<f32>,
}

/// HTTP client for an OpenAI-compatible embeddings endpoint.
///
/// Implements [`EmbeddingProvider`] so the use cases stay decoupled from
/// transport and serialization details. Works against both OpenAI-style
/// services (bearer token) and Azure-style deployments (`api-key`
/// header); the configured key is sent both ways.
pub struct OpenAiEmbedding {
    client: reqwest::Client,
    api_key: String,
    model: String,
    /// Full endpoint URL (base + EMBEDDINGS_PATH).
    url: String,
}

impl OpenAiEmbedding {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), EMBEDDINGS_PATH);
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            model: model.into(),
            url,
        }
    }

    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(
            config.embed_endpoint.clone(),
            config.embed_api_key.clone(),
            config.embed_model.clone(),
        )
    }
}

#[async_trait]
impl EmbeddingProvider for OpenAiEmbedding {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, DomainError> {
        let request = ApiRequest {
            model: &self.model,
            input: text,
        };

        let mut builder = self.client.post(&self.url).json(&request);
        if !self.api_key.is_empty() {
            builder = builder
                .bearer_auth(&self.api_key)
                .header("api-key", &self.api_key);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| DomainError::embedding(format!("Embedding request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::embedding(format!(
                "Embedding endpoint returned {}: {}",
                status, body
            )));
        }

        let parsed: ApiResponse = response
            .json()
            .await
            .map_err(|e| DomainError::embedding(format!("Invalid embedding response: {}", e)))?;

        let vector = parsed
            .data
            .into_iter()
            .next()
            .map(|item| item.embedding)
            .ok_or_else(|| DomainError::embedding("Empty embedding response"))?;

        if vector.len() != VECTOR_DIMENSIONS {
            return Err(DomainError::embedding(format!(
                "Expected {} dimensions, got {}",
                VECTOR_DIMENSIONS,
                vector.len()
            )));
        }

        debug!("Embedded {} chars via {}", text.len(), self.model);
        Ok(vector)
    }

    fn dimensions(&self) -> usize {
        VECTOR_DIMENSIONS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_is_joined_without_double_slash() {
        let provider = OpenAiEmbedding::new("http://localhost:1234/v1/", "", "m");
        assert_eq!(provider.url, "http://localhost:1234/v1/embeddings");
    }
}
