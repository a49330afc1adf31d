use serde::{Deserialize, Serialize};

use super::{Category, ComplexityLevel};

/// Default number of results returned by a component search.
pub const DEFAULT_TOP_K: usize = 5;

/// A component-retrieval query: free text plus optional structured
/// equality filters, applied conjunctively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentQuery {
    query: String,
    top_k: usize,
    fetch_limit: Option<usize>,
    category: Option<Category>,
    image_count: Option<u32>,
    complexity: Option<ComplexityLevel>,
}

impl ComponentQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            top_k: DEFAULT_TOP_K,
            fetch_limit: None,
            category: None,
            image_count: None,
            complexity: None,
        }
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k.max(1);
        self
    }

    /// Number of candidates to request from the index, when larger than
    /// `top_k` (over-fetch for downstream truncation).
    pub fn with_fetch_limit(mut self, limit: usize) -> Self {
        self.fetch_limit = Some(limit.max(1));
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_image_count(mut self, count: u32) -> Self {
        self.image_count = Some(count);
        self
    }

    pub fn with_complexity(mut self, complexity: ComplexityLevel) -> Self {
        self.complexity = Some(complexity);
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    pub fn fetch_limit(&self) -> usize {
        self.fetch_limit.unwrap_or(self.top_k)
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn image_count(&self) -> Option<u32> {
        self.image_count
    }

    pub fn complexity(&self) -> Option<ComplexityLevel> {
        self.complexity
    }

    pub fn has_filters(&self) -> bool {
        self.category.is_some() || self.image_count.is_some() || self.complexity.is_some()
    }
}

/// One retrieved component, projected to the fields callers display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentMatch {
    pub id: String,
    pub component_name: String,
    pub category: String,
    pub layout_method: String,
    pub image_count: u32,
    pub image_arrangement: String,
    pub complexity: String,
    pub source_code: String,
    pub keywords: String,
    pub score: f32,
}

impl ComponentMatch {
    pub fn display_line(&self) -> String {
        format!("{} (score: {:.3})", self.component_name, self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_builder_defaults() {
        let query = ComponentQuery::new("hero with images");
        assert_eq!(query.top_k(), DEFAULT_TOP_K);
        assert_eq!(query.fetch_limit(), DEFAULT_TOP_K);
        assert!(!query.has_filters());
    }

    #[test]
    fn query_builder_filters() {
        let query = ComponentQuery::new("gallery")
            .with_top_k(3)
            .with_fetch_limit(6)
            .with_category(Category::ImageFocused)
            .with_image_count(2);

        assert_eq!(query.top_k(), 3);
        assert_eq!(query.fetch_limit(), 6);
        assert_eq!(query.category(), Some(Category::ImageFocused));
        assert_eq!(query.image_count(), Some(2));
        assert!(query.has_filters());
    }

    #[test]
    fn top_k_is_at_least_one() {
        let query = ComponentQuery::new("x").with_top_k(0);
        assert_eq!(query.top_k(), 1);
    }
}
