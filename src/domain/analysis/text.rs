use std::sync::OnceLock;

use regex::Regex;

use crate::domain::models::{Alignment, HeadingTag, TextPatterns};

fn font_size_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"fontSize: ['"]([^'"]+)['"]"#).expect("valid font-size regex"))
}

/// Extract the text hierarchy (which heading/paragraph tags appear, in
/// scan order, without duplicates), font-size tokens and the dominant
/// text alignment.
pub fn analyze_text(raw_text: &str) -> TextPatterns {
    let mut hierarchy = Vec::new();
    for (marker, tag) in [
        ("<h1", HeadingTag::H1),
        ("<h2", HeadingTag::H2),
        ("<h3", HeadingTag::H3),
        ("<p", HeadingTag::P),
    ] {
        if raw_text.contains(marker) {
            hierarchy.push(tag);
        }
    }

    let mut typography: Vec<String> = Vec::new();
    for capture in font_size_re().captures_iter(raw_text) {
        let token = capture[1].to_string();
        if !typography.contains(&token) {
            typography.push(token);
        }
    }

    let alignment = if raw_text.contains("textAlign: 'center'") {
        Alignment::Center
    } else if raw_text.contains("textAlign: 'right'") {
        Alignment::Right
    } else {
        Alignment::Left
    };

    TextPatterns {
        hierarchy,
        typography,
        alignment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hierarchy_in_scan_order_without_duplicates() {
        let patterns = analyze_text("<p>one</p><h1>t</h1><h1>again</h1><h3>s</h3>");
        assert_eq!(
            patterns.hierarchy,
            vec![HeadingTag::H1, HeadingTag::H3, HeadingTag::P]
        );
    }

    #[test]
    fn typography_tokens_deduped_first_seen_order() {
        let text = "fontSize: '2rem' fontSize: \"14px\" fontSize: '2rem'";
        let patterns = analyze_text(text);
        assert_eq!(patterns.typography, vec!["2rem", "14px"]);
    }

    #[test]
    fn alignment_defaults_to_left() {
        assert_eq!(analyze_text("<p>hi</p>").alignment, Alignment::Left);
        assert_eq!(
            analyze_text("textAlign: 'center'").alignment,
            Alignment::Center
        );
        assert_eq!(
            analyze_text("textAlign: 'right'").alignment,
            Alignment::Right
        );
    }

    #[test]
    fn center_beats_right_when_both_present() {
        let patterns = analyze_text("textAlign: 'center' textAlign: 'right'");
        assert_eq!(patterns.alignment, Alignment::Center);
    }
}
