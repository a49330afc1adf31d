use std::sync::OnceLock;

use regex::Regex;

use crate::domain::models::StylingPatterns;

fn color_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"color: ['"]([^'"]+)['"]"#).expect("valid color regex"))
}

fn background_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"backgroundColor: ['"]([^'"]+)['"]"#).expect("valid background regex")
    })
}

fn spacing_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?:padding|margin): ['"]([^'"]+)['"]"#).expect("valid spacing regex")
    })
}

/// Extract color and spacing tokens from inline style declarations.
///
/// `responsive_classes` is intentionally left empty: inline-style
/// sources carry no responsive utility classes to extract.
pub fn analyze_styling(raw_text: &str) -> StylingPatterns {
    let mut colors: Vec<String> = Vec::new();
    for capture in color_re()
        .captures_iter(raw_text)
        .chain(background_re().captures_iter(raw_text))
    {
        let token = capture[1].to_string();
        if !colors.contains(&token) {
            colors.push(token);
        }
    }

    let mut spacing: Vec<String> = Vec::new();
    for capture in spacing_re().captures_iter(raw_text) {
        let token = capture[1].to_string();
        if !spacing.contains(&token) {
            spacing.push(token);
        }
    }

    StylingPatterns {
        colors,
        spacing,
        responsive_classes: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_color_and_background_tokens() {
        let text = "color: '#333' backgroundColor: \"white\"";
        let patterns = analyze_styling(text);
        // The color pattern also matches the tail of backgroundColor;
        // dedup keeps one entry per token.
        assert_eq!(patterns.colors, vec!["#333", "white"]);
    }

    #[test]
    fn collects_padding_and_margin_tokens() {
        let text = "padding: '1rem' margin: '0 auto' padding: '1rem'";
        let patterns = analyze_styling(text);
        assert_eq!(patterns.spacing, vec!["1rem", "0 auto"]);
    }

    #[test]
    fn responsive_classes_always_empty() {
        let patterns = analyze_styling("class=\"md:flex lg:grid\"");
        assert!(patterns.responsive_classes.is_empty());
    }
}
