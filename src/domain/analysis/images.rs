use super::count_occurrences;
use crate::domain::models::{Arrangement, ImagePatterns, Sizing};

/// Image count above which a component counts as a gallery.
const GALLERY_THRESHOLD: u32 = 3;

/// Extract image usage patterns: how many images, how they are arranged
/// and how they are sized.
///
/// Arrangement precedence: a "grid" keyword anywhere beats "flex" with
/// multiple images, which beats a single image, which beats the gallery
/// threshold; everything else is "multiple".
pub fn analyze_images(raw_text: &str) -> ImagePatterns {
    let count = count_occurrences(raw_text, "<img");
    let lower = raw_text.to_lowercase();

    let arrangement = if lower.contains("grid") {
        Arrangement::Grid
    } else if lower.contains("flex") && count > 1 {
        Arrangement::Flex
    } else if count == 1 {
        Arrangement::Single
    } else if count > GALLERY_THRESHOLD {
        Arrangement::Gallery
    } else {
        Arrangement::Multiple
    };

    let sizing = if raw_text.contains("width: '100%'") {
        Sizing::Responsive
    } else if raw_text.contains("aspect-") {
        Sizing::AspectRatio
    } else {
        Sizing::Fixed
    };

    ImagePatterns {
        count,
        arrangement,
        sizing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_keyword_beats_flex_with_multiple_images() {
        let patterns = analyze_images("<img/><img/> display GRID and flex");
        assert_eq!(patterns.arrangement, Arrangement::Grid);
    }

    #[test]
    fn flex_with_multiple_images_beats_count_rules() {
        let patterns = analyze_images("<img/><img/><img/><img/> flex row");
        assert_eq!(patterns.count, 4);
        assert_eq!(patterns.arrangement, Arrangement::Flex);
    }

    #[test]
    fn flex_with_one_image_is_single() {
        let patterns = analyze_images("<img/> flex");
        assert_eq!(patterns.arrangement, Arrangement::Single);
    }

    #[test]
    fn more_than_three_images_is_gallery() {
        let patterns = analyze_images("<img/><img/><img/><img/>");
        assert_eq!(patterns.arrangement, Arrangement::Gallery);
    }

    #[test]
    fn zero_images_never_single_or_gallery() {
        let patterns = analyze_images("<div>no pictures</div>");
        assert_eq!(patterns.count, 0);
        assert_eq!(patterns.arrangement, Arrangement::Multiple);
    }

    #[test]
    fn sizing_precedence() {
        assert_eq!(
            analyze_images("style={{ width: '100%' }} aspect-video").sizing,
            Sizing::Responsive
        );
        assert_eq!(analyze_images("class=\"aspect-square\"").sizing, Sizing::AspectRatio);
        assert_eq!(analyze_images("<img width={200}/>").sizing, Sizing::Fixed);
    }
}
