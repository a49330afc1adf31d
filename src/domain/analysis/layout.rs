use crate::domain::models::{LayoutMethod, LayoutPatterns, ResponsiveStrategy};

/// Detect the layout method from inline style declarations and whether
/// the component follows a responsive strategy.
pub fn analyze_layout(raw_text: &str) -> LayoutPatterns {
    let method = if raw_text.contains("display: 'grid'") {
        LayoutMethod::Grid
    } else if raw_text.contains("display: 'flex'") {
        LayoutMethod::Flexbox
    } else if raw_text.contains("position: 'absolute'") {
        LayoutMethod::Absolute
    } else {
        LayoutMethod::Block
    };

    let responsive = if raw_text.contains("@media") || raw_text.to_lowercase().contains("responsive")
    {
        ResponsiveStrategy::Responsive
    } else {
        ResponsiveStrategy::Fixed
    };

    LayoutPatterns { method, responsive }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_precedence_grid_first() {
        let patterns = analyze_layout("display: 'grid' display: 'flex'");
        assert_eq!(patterns.method, LayoutMethod::Grid);
    }

    #[test]
    fn flex_then_absolute_then_block() {
        assert_eq!(analyze_layout("display: 'flex'").method, LayoutMethod::Flexbox);
        assert_eq!(
            analyze_layout("position: 'absolute'").method,
            LayoutMethod::Absolute
        );
        assert_eq!(analyze_layout("<div/>").method, LayoutMethod::Block);
    }

    #[test]
    fn responsive_markers() {
        assert_eq!(
            analyze_layout("@media (max-width: 600px)").responsive,
            ResponsiveStrategy::Responsive
        );
        assert_eq!(
            analyze_layout("a Responsive layout").responsive,
            ResponsiveStrategy::Responsive
        );
        assert_eq!(analyze_layout("<div/>").responsive, ResponsiveStrategy::Fixed);
    }
}
