use serde::{Deserialize, Serialize};

use super::{ComponentProfile, ComponentSource};
use crate::domain::error::DomainError;

/// Dimensionality of the stored component vectors.
pub const VECTOR_DIMENSIONS: usize = 1536;

/// HNSW parameters for the vector field, cosine metric.
pub const HNSW_M: u32 = 4;
pub const HNSW_EF_CONSTRUCTION: u32 = 400;
pub const HNSW_EF_SEARCH: u32 = 500;

/// Name of the vector field in the stored schema.
pub const VECTOR_FIELD: &str = "component_vector";

/// Constant `source_type` value stamped on every document.
pub const SOURCE_TYPE: &str = "component_library";

/// Maximum length of a document key.
const MAX_ID_LEN: usize = 100;

/// The unit persisted in the external vector index. Nested profile
/// structures are JSON-serialized into flat string fields per the stored
/// schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDocument {
    pub id: String,
    pub component_name: String,
    pub component_category: String,
    pub source_type: String,

    pub component_structure: String,
    pub layout_method: String,
    pub responsive_strategy: String,

    pub image_count: u32,
    pub image_arrangement: String,
    pub image_sizing: String,

    pub text_hierarchy: String,
    pub typography_classes: String,
    pub text_alignment: String,

    pub color_palette: String,
    pub spacing_scale: String,
    pub responsive_classes: String,

    pub complexity_level: String,
    pub reusability_score: f64,
    pub mobile_optimized: bool,

    pub source_code: String,
    pub import_statements: String,
    pub export_pattern: String,

    pub search_keywords: String,
    pub embedding_text: String,
    pub component_vector: Vec<f32>,
}

impl ComponentDocument {
    /// Merge the extracted profile, the original source, the composed
    /// embedding text and the externally obtained vector into one record.
    pub fn assemble(
        source: &ComponentSource,
        profile: &ComponentProfile,
        embedding_text: String,
        vector: Vec<f32>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id: sanitize_id(&source.name),
            component_name: source.name.clone(),
            component_category: profile.category.to_string(),
            source_type: SOURCE_TYPE.to_string(),

            component_structure: json_field(&profile.structure)?,
            layout_method: profile.layout.method.to_string(),
            responsive_strategy: profile.layout.responsive.to_string(),

            image_count: profile.images.count,
            image_arrangement: profile.images.arrangement.to_string(),
            image_sizing: profile.images.sizing.to_string(),

            text_hierarchy: json_field(&profile.text.hierarchy)?,
            typography_classes: json_field(&profile.text.typography)?,
            text_alignment: profile.text.alignment.to_string(),

            color_palette: json_field(&profile.styling.colors)?,
            spacing_scale: json_field(&profile.styling.spacing)?,
            responsive_classes: json_field(&profile.styling.responsive_classes)?,

            complexity_level: profile.metadata.complexity_level.to_string(),
            reusability_score: profile.metadata.reusability_score,
            mobile_optimized: profile.metadata.mobile_optimized,

            source_code: source.raw_text.clone(),
            import_statements: json_field(&profile.code.imports)?,
            export_pattern: profile.code.export_pattern.to_string(),

            search_keywords: profile.search_keywords.clone(),
            embedding_text,
            component_vector: vector,
        })
    }
}

fn json_field<T: Serialize>(value: &T) -> Result<String, DomainError> {
    serde_json::to_string(value)
        .map_err(|e| DomainError::internal(format!("Failed to serialize document field: {}", e)))
}

/// Derive a collision-safe document key from a component name.
///
/// Any character outside `[A-Za-z0-9_\-=]` becomes `_`, runs of `_` are
/// collapsed, leading/trailing `_` are trimmed and the result is capped
/// at 100 characters. Pure function of the name, so re-processing the
/// same component overwrites rather than duplicates.
pub fn sanitize_id(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_was_underscore = false;

    for ch in name.chars() {
        let mapped = if ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-' | '=') {
            ch
        } else {
            '_'
        };

        if mapped == '_' {
            if last_was_underscore {
                continue;
            }
            last_was_underscore = true;
        } else {
            last_was_underscore = false;
        }
        out.push(mapped);
    }

    let trimmed = out.trim_matches('_');
    trimmed.chars().take(MAX_ID_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_replaces_disallowed_characters() {
        assert_eq!(sanitize_id("My Component!!2"), "My_Component_2");
    }

    #[test]
    fn sanitize_keeps_allowed_characters() {
        assert_eq!(sanitize_id("Hero-Image=v2_final"), "Hero-Image=v2_final");
    }

    #[test]
    fn sanitize_collapses_and_trims_underscores() {
        assert_eq!(sanitize_id("__a///b__"), "a_b");
        assert_eq!(sanitize_id("!!!"), "");
    }

    #[test]
    fn sanitize_truncates_to_max_length() {
        let long = "x".repeat(250);
        assert_eq!(sanitize_id(&long).len(), 100);
    }

    #[test]
    fn sanitize_output_alphabet_is_closed() {
        let id = sanitize_id("weird $$ name ~~ with % stuff");
        assert!(id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '=')));
        assert!(!id.contains("__"));
        assert!(!id.starts_with('_') && !id.ends_with('_'));
    }
}
