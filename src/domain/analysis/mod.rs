//! # Analysis Core
//!
//! Pure pattern extractors over raw component source text. All matching
//! is substring/regex based; no structural parse of the markup is
//! attempted. This keeps the extractors tolerant of any templating
//! dialect at the cost of precision on nested or computed attribute
//! values.
//!
//! Each extractor is an independent pure function of the raw text; the
//! classifier additionally takes the component name. [`profile`] runs
//! them all and assembles a [`ComponentProfile`].

mod category;
mod code;
mod compose;
mod images;
mod layout;
mod metadata;
mod structure;
mod styling;
mod text;

pub use category::classify;
pub use code::analyze_code;
pub use compose::{compose_embedding_text, search_keywords};
pub use images::analyze_images;
pub use layout::analyze_layout;
pub use metadata::synthesize_metadata;
pub use structure::analyze_structure;
pub use styling::analyze_styling;
pub use text::analyze_text;

use crate::domain::models::{ComponentProfile, ComponentSource};

/// Run every extractor over a component source and assemble the profile.
pub fn profile(source: &ComponentSource) -> ComponentProfile {
    let category = classify(&source.name, &source.raw_text);
    let images = analyze_images(&source.raw_text);
    let text = analyze_text(&source.raw_text);
    let layout = analyze_layout(&source.raw_text);
    let styling = analyze_styling(&source.raw_text);
    let structure = analyze_structure(&source.raw_text);
    let code = analyze_code(&source.raw_text);
    let metadata = synthesize_metadata(&source.raw_text, category);
    let search_keywords = search_keywords(category, &images, &text, &layout);

    ComponentProfile {
        category,
        images,
        text,
        layout,
        styling,
        structure,
        code,
        metadata,
        search_keywords,
    }
}

/// Count non-overlapping occurrences of a literal pattern.
pub(crate) fn count_occurrences(text: &str, pattern: &str) -> u32 {
    text.matches(pattern).count() as u32
}
