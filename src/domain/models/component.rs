use serde::{Deserialize, Serialize};

/// A single UI component's source text, the unit of ingestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentSource {
    pub name: String,
    pub raw_text: String,
}

impl ComponentSource {
    pub fn new(name: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_text: raw_text.into(),
        }
    }

    /// Component name derived from a file name by stripping the extension.
    pub fn name_from_file(file_name: &str) -> &str {
        file_name
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .unwrap_or(file_name)
    }
}
