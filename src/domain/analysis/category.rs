use super::count_occurrences;
use crate::domain::models::Category;

/// Name keywords checked in fixed order; the first match wins and always
/// beats the content heuristic.
const NAME_KEYWORDS: &[(&str, Category)] = &[
    ("image", Category::ImageFocused),
    ("text", Category::TextFocused),
    ("mixed", Category::Mixed),
    ("card", Category::CardBased),
    ("list", Category::ListBased),
    ("dashboard", Category::Dashboard),
];

/// Derive a coarse category from the component's declared name, falling
/// back to a count-based heuristic over the source text when no keyword
/// matches. Deterministic; there is no error path — absence of any
/// signal yields [`Category::Mixed`].
pub fn classify(name: &str, raw_text: &str) -> Category {
    let name_lower = name.to_lowercase();

    for (keyword, category) in NAME_KEYWORDS {
        if name_lower.contains(keyword) {
            return *category;
        }
    }

    let img_count = count_occurrences(raw_text, "<img");
    let text_elements = count_occurrences(raw_text, "<h1")
        + count_occurrences(raw_text, "<h2")
        + count_occurrences(raw_text, "<p");

    if img_count > text_elements {
        Category::ImageFocused
    } else if text_elements > img_count * 2 {
        Category::TextFocused
    } else {
        Category::Mixed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_keyword_beats_content_heuristic() {
        // Content says text-heavy, name says image.
        let text = "<h1/><h2/><p/><p/>";
        assert_eq!(classify("ImageBanner", text), Category::ImageFocused);
    }

    #[test]
    fn name_keywords_checked_in_order() {
        // "image" is checked before "card".
        assert_eq!(classify("CardImage", ""), Category::ImageFocused);
        assert_eq!(classify("ProductCard", ""), Category::CardBased);
        assert_eq!(classify("TodoList", ""), Category::ListBased);
        assert_eq!(classify("SalesDashboard", ""), Category::Dashboard);
    }

    #[test]
    fn heuristic_prefers_images_when_they_dominate() {
        assert_eq!(classify("Widget", "<img/><img/><h1/>"), Category::ImageFocused);
    }

    #[test]
    fn heuristic_requires_double_text_majority() {
        // 3 text elements vs 1 image: 3 > 2*1 -> text focused.
        assert_eq!(classify("Widget", "<img/><h1/><h2/><p/>"), Category::TextFocused);
        // 2 text elements vs 1 image: 2 > 2 is false -> mixed.
        assert_eq!(classify("Widget", "<img/><h1/><p/>"), Category::Mixed);
    }

    #[test]
    fn empty_signal_defaults_to_mixed() {
        assert_eq!(classify("Widget", ""), Category::Mixed);
    }

    #[test]
    fn classify_is_pure() {
        let text = "<img/><p/>";
        assert_eq!(classify("Widget", text), classify("Widget", text));
    }
}
