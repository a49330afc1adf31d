use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::application::{IndexState, UpsertFailure, UpsertReport, VectorIndex};
use crate::config::ServiceConfig;
use crate::domain::{
    ComponentDocument, ComponentMatch, ComponentQuery, DomainError, HNSW_EF_CONSTRUCTION,
    HNSW_EF_SEARCH, HNSW_M, VECTOR_DIMENSIONS, VECTOR_FIELD,
};

const API_VERSION: &str = "2023-11-01";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const VECTOR_PROFILE: &str = "component-profile";
const VECTOR_ALGORITHM: &str = "component-hnsw";

/// Fields projected back on search hits.
const SELECT_FIELDS: &str = "id,component_name,component_category,layout_method,\
                             image_count,image_arrangement,complexity_level,\
                             source_code,search_keywords";

#[derive(Deserialize)]
struct SearchResponse {
    value: Vec<SearchHit>,
}

#[derive(Deserialize)]
struct SearchHit {
    #[serde(rename = "@search.score", default)]
    score: f32,
    id: String,
    component_name: String,
    component_category: String,
    layout_method: String,
    image_count: u32,
    image_arrangement: String,
    complexity_level: String,
    #[serde(default)]
    source_code: String,
    #[serde(default)]
    search_keywords: String,
}

#[derive(Deserialize)]
struct IndexBatchResponse {
    value: Vec<IndexActionResult>,
}

#[derive(Deserialize)]
struct IndexActionResult {
    key: String,
    status: bool,
    #[serde(rename = "errorMessage")]
    error_message: Option<String>,
}

/// REST adapter for an Azure AI Search-style vector index service.
///
/// The index name is fixed at construction; [`ensure_index`] creates it
/// with the component schema (HNSW, cosine metric) when missing.
///
/// [`ensure_index`]: VectorIndex::ensure_index
pub struct AzureSearchVectorIndex {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    index_name: String,
}

impl AzureSearchVectorIndex {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        index_name: impl Into<String>,
    ) -> Self {
        let endpoint: String = endpoint.into();
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            base_url: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            index_name: index_name.into(),
        }
    }

    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(
            config.search_endpoint.clone(),
            config.search_api_key.clone(),
            config.index_name.clone(),
        )
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}{}?api-version={}",
            self.base_url, path, API_VERSION
        )
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self.client.request(method, self.url(path));
        if !self.api_key.is_empty() {
            builder = builder.header("api-key", &self.api_key);
        }
        builder
    }

    fn index_schema(&self) -> serde_json::Value {
        let simple = |name: &str, ty: &str, filterable: bool, searchable: bool| {
            json!({
                "name": name,
                "type": ty,
                "filterable": filterable,
                "searchable": searchable,
            })
        };

        let mut fields = vec![json!({
            "name": "id",
            "type": "Edm.String",
            "key": true,
            "filterable": true,
        })];
        fields.extend([
            simple("component_name", "Edm.String", true, true),
            simple("component_category", "Edm.String", true, false),
            simple("source_type", "Edm.String", true, false),
            simple("component_structure", "Edm.String", false, true),
            simple("layout_method", "Edm.String", true, false),
            simple("responsive_strategy", "Edm.String", true, false),
            simple("image_count", "Edm.Int32", true, false),
            simple("image_arrangement", "Edm.String", true, false),
            simple("image_sizing", "Edm.String", true, false),
            simple("text_hierarchy", "Edm.String", false, true),
            simple("typography_classes", "Edm.String", false, true),
            simple("text_alignment", "Edm.String", true, false),
            simple("color_palette", "Edm.String", false, true),
            simple("spacing_scale", "Edm.String", false, true),
            simple("responsive_classes", "Edm.String", false, true),
            simple("complexity_level", "Edm.String", true, false),
            simple("reusability_score", "Edm.Double", true, false),
            simple("mobile_optimized", "Edm.Boolean", true, false),
            simple("source_code", "Edm.String", false, true),
            simple("import_statements", "Edm.String", false, true),
            simple("export_pattern", "Edm.String", false, true),
            simple("search_keywords", "Edm.String", false, true),
            simple("embedding_text", "Edm.String", false, true),
            json!({
                "name": VECTOR_FIELD,
                "type": "Collection(Edm.Single)",
                "searchable": true,
                "dimensions": VECTOR_DIMENSIONS,
                "vectorSearchProfile": VECTOR_PROFILE,
            }),
        ]);

        json!({
            "name": self.index_name,
            "fields": fields,
            "vectorSearch": {
                "profiles": [{
                    "name": VECTOR_PROFILE,
                    "algorithm": VECTOR_ALGORITHM,
                }],
                "algorithms": [{
                    "name": VECTOR_ALGORITHM,
                    "kind": "hnsw",
                    "hnswParameters": {
                        "m": HNSW_M,
                        "efConstruction": HNSW_EF_CONSTRUCTION,
                        "efSearch": HNSW_EF_SEARCH,
                        "metric": "cosine",
                    },
                }],
            },
        })
    }
}

#[async_trait]
impl VectorIndex for AzureSearchVectorIndex {
    async fn ensure_index(&self) -> Result<IndexState, DomainError> {
        let path = format!("/indexes/{}", self.index_name);

        let existing = self
            .request(reqwest::Method::GET, &path)
            .send()
            .await
            .map_err(|e| DomainError::storage(format!("Index lookup failed: {}", e)))?;

        if existing.status().is_success() {
            debug!("Index {} already exists", self.index_name);
            return Ok(IndexState::Existing);
        }
        if existing.status() != reqwest::StatusCode::NOT_FOUND {
            return Err(DomainError::storage(format!(
                "Index lookup returned {}",
                existing.status()
            )));
        }

        let created = self
            .request(reqwest::Method::PUT, &path)
            .json(&self.index_schema())
            .send()
            .await
            .map_err(|e| DomainError::storage(format!("Index creation failed: {}", e)))?;

        if !created.status().is_success() {
            let status = created.status();
            let body = created.text().await.unwrap_or_default();
            return Err(DomainError::storage(format!(
                "Index creation returned {}: {}",
                status, body
            )));
        }

        debug!("Created index {}", self.index_name);
        Ok(IndexState::Created)
    }

    async fn has_documents(&self) -> Result<bool, DomainError> {
        Ok(self.count().await? > 0)
    }

    async fn upsert(&self, documents: &[ComponentDocument]) -> Result<UpsertReport, DomainError> {
        let path = format!("/indexes/{}/docs/index", self.index_name);

        let actions: Vec<serde_json::Value> = documents
            .iter()
            .map(|doc| {
                let mut value = serde_json::to_value(doc).unwrap_or_default();
                if let Some(map) = value.as_object_mut() {
                    map.insert(
                        "@search.action".to_string(),
                        json!("mergeOrUpload"),
                    );
                }
                value
            })
            .collect();

        let response = self
            .request(reqwest::Method::POST, &path)
            .json(&json!({ "value": actions }))
            .send()
            .await
            .map_err(|e| DomainError::storage(format!("Upload failed: {}", e)))?;

        // 207 carries per-document outcomes; treat it like success and
        // report the failed keys individually.
        let status = response.status();
        if !status.is_success() && status != reqwest::StatusCode::MULTI_STATUS {
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::storage(format!(
                "Upload returned {}: {}",
                status, body
            )));
        }

        let parsed: IndexBatchResponse = response
            .json()
            .await
            .map_err(|e| DomainError::storage(format!("Invalid upload response: {}", e)))?;

        let mut report = UpsertReport::default();
        for result in parsed.value {
            if result.status {
                report.succeeded += 1;
            } else {
                report.failures.push(UpsertFailure {
                    key: result.key,
                    message: result.error_message.unwrap_or_else(|| "unknown".to_string()),
                });
            }
        }

        Ok(report)
    }

    async fn vector_search(
        &self,
        vector: &[f32],
        query: &ComponentQuery,
    ) -> Result<Vec<ComponentMatch>, DomainError> {
        let path = format!("/indexes/{}/docs/search", self.index_name);

        let mut body = json!({
            "top": query.fetch_limit(),
            "select": SELECT_FIELDS,
            "vectorQueries": [{
                "kind": "vector",
                "vector": vector,
                "k": query.fetch_limit(),
                "fields": VECTOR_FIELD,
            }],
        });

        if let Some(filter) = build_filter(query) {
            body["filter"] = json!(filter);
        }

        let response = self
            .request(reqwest::Method::POST, &path)
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::storage(format!("Search request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(DomainError::storage(format!(
                "Search returned {}: {}",
                status, text
            )));
        }

        let parsed: SearchResponse = response
            .json()
            .await
            .map_err(|e| DomainError::storage(format!("Invalid search response: {}", e)))?;

        Ok(parsed
            .value
            .into_iter()
            .map(|hit| ComponentMatch {
                id: hit.id,
                component_name: hit.component_name,
                category: hit.component_category,
                layout_method: hit.layout_method,
                image_count: hit.image_count,
                image_arrangement: hit.image_arrangement,
                complexity: hit.complexity_level,
                source_code: hit.source_code,
                keywords: hit.search_keywords,
                score: hit.score,
            })
            .collect())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let path = format!("/indexes/{}/docs/$count", self.index_name);

        let response = self
            .request(reqwest::Method::GET, &path)
            .send()
            .await
            .map_err(|e| DomainError::storage(format!("Count request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(DomainError::storage(format!(
                "Count returned {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DomainError::storage(format!("Invalid count response: {}", e)))?;

        body.trim()
            .parse::<u64>()
            .map_err(|e| DomainError::storage(format!("Unparseable count '{}': {}", body.trim(), e)))
    }
}

/// Render the query's equality filters into one conjunctive expression,
/// e.g. `component_category eq 'mixed' and image_count eq 2`.
fn build_filter(query: &ComponentQuery) -> Option<String> {
    let mut clauses = Vec::new();

    if let Some(category) = query.category() {
        clauses.push(format!("component_category eq '{}'", category));
    }
    if let Some(count) = query.image_count() {
        clauses.push(format!("image_count eq {}", count));
    }
    if let Some(complexity) = query.complexity() {
        clauses.push(format!("complexity_level eq '{}'", complexity));
    }

    if clauses.is_empty() {
        None
    } else {
        Some(clauses.join(" and "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, ComplexityLevel};

    #[test]
    fn filter_joins_clauses_conjunctively() {
        let query = ComponentQuery::new("q")
            .with_category(Category::ImageFocused)
            .with_image_count(2)
            .with_complexity(ComplexityLevel::Simple);

        assert_eq!(
            build_filter(&query).unwrap(),
            "component_category eq 'image_focused' and image_count eq 2 \
             and complexity_level eq 'simple'"
        );
    }

    #[test]
    fn no_filters_means_no_filter_expression() {
        assert_eq!(build_filter(&ComponentQuery::new("q")), None);
    }

    #[test]
    fn schema_declares_vector_field() {
        let index = AzureSearchVectorIndex::new("http://localhost:8080", "", "idx");
        let schema = index.index_schema();

        let fields = schema["fields"].as_array().unwrap();
        let vector = fields
            .iter()
            .find(|f| f["name"] == VECTOR_FIELD)
            .expect("vector field present");
        assert_eq!(vector["dimensions"], VECTOR_DIMENSIONS);

        let hnsw = &schema["vectorSearch"]["algorithms"][0]["hnswParameters"];
        assert_eq!(hnsw["m"], HNSW_M);
        assert_eq!(hnsw["efConstruction"], HNSW_EF_CONSTRUCTION);
        assert_eq!(hnsw["efSearch"], HNSW_EF_SEARCH);
        assert_eq!(hnsw["metric"], "cosine");
    }
}
