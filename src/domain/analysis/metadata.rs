use super::count_occurrences;
use crate::domain::models::{Category, ComplexityLevel, ComponentMetadata};

/// Complexity score weights per source marker.
const CONTAINER_WEIGHT: f64 = 0.5;
const IMAGE_WEIGHT: f64 = 1.0;
const INLINE_STYLE_WEIGHT: f64 = 0.3;
const CLASS_ATTR_WEIGHT: f64 = 0.2;

/// Complexity level thresholds.
const SIMPLE_BELOW: f64 = 5.0;
const MODERATE_BELOW: f64 = 15.0;

/// Reusability scores by category focus.
const FOCUSED_REUSABILITY: f64 = 0.8;
const DEFAULT_REUSABILITY: f64 = 0.6;

/// Compute derived scores and flags from raw source markers.
pub fn synthesize_metadata(raw_text: &str, category: Category) -> ComponentMetadata {
    let complexity_score = count_occurrences(raw_text, "<div") as f64 * CONTAINER_WEIGHT
        + count_occurrences(raw_text, "<img") as f64 * IMAGE_WEIGHT
        + count_occurrences(raw_text, "style=") as f64 * INLINE_STYLE_WEIGHT
        + count_occurrences(raw_text, "className=") as f64 * CLASS_ATTR_WEIGHT;

    let complexity_level = if complexity_score < SIMPLE_BELOW {
        ComplexityLevel::Simple
    } else if complexity_score < MODERATE_BELOW {
        ComplexityLevel::Moderate
    } else {
        ComplexityLevel::Complex
    };

    let reusability_score = match category {
        Category::ImageFocused | Category::TextFocused => FOCUSED_REUSABILITY,
        _ => DEFAULT_REUSABILITY,
    };

    let lower = raw_text.to_lowercase();
    let mobile_optimized = lower.contains("responsive") || lower.contains("mobile");

    ComponentMetadata {
        complexity_score,
        complexity_level,
        reusability_score,
        mobile_optimized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_weights_sum_per_marker() {
        // 2 divs, 1 img, 2 style=, 2 className= -> 1.0 + 1.0 + 0.6 + 0.4
        let text = "<div className=\"a\"><img style={{}} style=\"\"/><div className=\"b\"/></div>";
        let meta = synthesize_metadata(text, Category::Mixed);
        assert!((meta.complexity_score - 3.0).abs() < 1e-9);
    }

    #[test]
    fn level_thresholds() {
        let simple = synthesize_metadata("<div/>", Category::Mixed);
        assert_eq!(simple.complexity_level, ComplexityLevel::Simple);

        let moderate = synthesize_metadata(&"<img/>".repeat(10), Category::Mixed);
        assert_eq!(moderate.complexity_level, ComplexityLevel::Moderate);

        let complex = synthesize_metadata(&"<img/>".repeat(15), Category::Mixed);
        assert_eq!(complex.complexity_level, ComplexityLevel::Complex);
    }

    #[test]
    fn four_containers_score_two_and_stay_simple() {
        let meta = synthesize_metadata(&"<div>".repeat(4), Category::Mixed);
        assert_eq!(meta.complexity_score, 2.0);
        assert_eq!(meta.complexity_level, ComplexityLevel::Simple);
    }

    #[test]
    fn reusability_by_category() {
        assert_eq!(
            synthesize_metadata("", Category::ImageFocused).reusability_score,
            0.8
        );
        assert_eq!(
            synthesize_metadata("", Category::TextFocused).reusability_score,
            0.8
        );
        assert_eq!(
            synthesize_metadata("", Category::CardBased).reusability_score,
            0.6
        );
    }

    #[test]
    fn mobile_flag_is_case_insensitive() {
        assert!(synthesize_metadata("Mobile-first", Category::Mixed).mobile_optimized);
        assert!(synthesize_metadata("RESPONSIVE", Category::Mixed).mobile_optimized);
        assert!(!synthesize_metadata("<div/>", Category::Mixed).mobile_optimized);
    }
}
