//! Process-level configuration for the external collaborators.
//!
//! Built once in `main` from environment variables (flags may override
//! individual fields) and passed by reference into the adapters; no
//! component reads the environment after startup.

/// Default index name used when none is configured.
pub const DEFAULT_INDEX_NAME: &str = "component-vector-index";

const DEFAULT_SEARCH_ENDPOINT: &str = "http://localhost:8080";
const DEFAULT_EMBED_ENDPOINT: &str = "http://localhost:1234/v1";
const DEFAULT_EMBED_MODEL: &str = "text-embedding-3-small";

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Base URL of the vector search service.
    pub search_endpoint: String,
    pub search_api_key: String,
    /// Base URL of the embeddings API.
    pub embed_endpoint: String,
    pub embed_api_key: String,
    pub embed_model: String,
    pub index_name: String,
}

impl ServiceConfig {
    /// Local-first defaults, overridable via environment:
    ///
    /// | Variable                  | Default                   |
    /// |---------------------------|---------------------------|
    /// | `UISEARCH_ENDPOINT`       | `http://localhost:8080`   |
    /// | `UISEARCH_API_KEY`        | `""` (empty)              |
    /// | `UISEARCH_EMBED_ENDPOINT` | `http://localhost:1234/v1`|
    /// | `UISEARCH_EMBED_API_KEY`  | `""` (empty)              |
    /// | `UISEARCH_EMBED_MODEL`    | `text-embedding-3-small`  |
    /// | `UISEARCH_INDEX`          | `component-vector-index`  |
    pub fn from_env() -> Self {
        Self {
            search_endpoint: env_or("UISEARCH_ENDPOINT", DEFAULT_SEARCH_ENDPOINT),
            search_api_key: env_or("UISEARCH_API_KEY", ""),
            embed_endpoint: env_or("UISEARCH_EMBED_ENDPOINT", DEFAULT_EMBED_ENDPOINT),
            embed_api_key: env_or("UISEARCH_EMBED_API_KEY", ""),
            embed_model: env_or("UISEARCH_EMBED_MODEL", DEFAULT_EMBED_MODEL),
            index_name: env_or("UISEARCH_INDEX", DEFAULT_INDEX_NAME),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_or_falls_back_to_default() {
        assert_eq!(env_or("UISEARCH_TEST_UNSET_VAR", "fallback"), "fallback");
    }
}
