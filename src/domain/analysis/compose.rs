use crate::domain::models::{
    Category, ComponentProfile, ImagePatterns, LayoutPatterns, TextPatterns,
};

/// Build the space-joined keyword string used for plain-text matching:
/// category, image count, arrangement, layout method, alignment, then
/// the hierarchy tags.
pub fn search_keywords(
    category: Category,
    images: &ImagePatterns,
    text: &TextPatterns,
    layout: &LayoutPatterns,
) -> String {
    let mut keywords = vec![
        category.to_string(),
        format!("images_{}", images.count),
        images.arrangement.to_string(),
        layout.method.to_string(),
        text.alignment.to_string(),
    ];

    keywords.extend(text.hierarchy.iter().map(|tag| tag.to_string()));

    keywords.join(" ")
}

/// Render the profile into the canonical text blob handed to the
/// embedding provider. Fixed fragment order, single-space joined;
/// identical profiles always produce identical output so embeddings are
/// reproducible.
pub fn compose_embedding_text(profile: &ComponentProfile) -> String {
    let hierarchy = profile
        .text
        .hierarchy
        .iter()
        .map(|tag| tag.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    [
        format!("Component category: {}", profile.category),
        format!("Layout method: {}", profile.layout.method),
        format!(
            "Images: {} {}",
            profile.images.count, profile.images.arrangement
        ),
        format!("Text hierarchy: {}", hierarchy),
        format!("Responsive: {}", profile.layout.responsive),
        format!("Complexity: {}", profile.metadata.complexity_level),
        format!("Alignment: {}", profile.text.alignment),
        format!("Keywords: {}", profile.search_keywords),
    ]
    .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::profile;
    use crate::domain::models::ComponentSource;

    fn sample_profile() -> ComponentProfile {
        profile(&ComponentSource::new(
            "TextBlock",
            "<h1>Title</h1><p>Body</p> textAlign: 'center'",
        ))
    }

    #[test]
    fn keywords_order_is_fixed() {
        let p = sample_profile();
        assert_eq!(
            p.search_keywords,
            "text_focused images_0 multiple block center h1 p"
        );
    }

    #[test]
    fn embedding_text_is_deterministic() {
        let p = sample_profile();
        assert_eq!(compose_embedding_text(&p), compose_embedding_text(&p));
    }

    #[test]
    fn embedding_text_fragments_in_fixed_order() {
        let p = sample_profile();
        let text = compose_embedding_text(&p);
        assert_eq!(
            text,
            "Component category: text_focused Layout method: block \
             Images: 0 multiple Text hierarchy: h1 p Responsive: fixed \
             Complexity: simple Alignment: center \
             Keywords: text_focused images_0 multiple block center h1 p"
        );
    }

    #[test]
    fn distinct_profiles_render_distinct_text() {
        let a = sample_profile();
        let b = profile(&ComponentSource::new("ImageGrid", "<img/> grid"));
        assert_ne!(compose_embedding_text(&a), compose_embedding_text(&b));
    }
}
