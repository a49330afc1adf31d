use super::count_occurrences;
use crate::domain::models::{ChildrenShape, Hook, StructurePatterns};

/// Container-element count above which children count as nested.
const NESTED_CONTAINER_THRESHOLD: u32 = 3;

/// All sources are treated as functional components.
const COMPONENT_TYPE: &str = "functional";

/// Hooks recognized by substring presence, checked in this order.
const KNOWN_HOOKS: &[(&str, Hook)] = &[
    ("useState", Hook::UseState),
    ("useEffect", Hook::UseEffect),
    ("memo", Hook::Memo),
];

/// Extract structural shape: which hooks appear and how children are
/// organized. "Nested" (container count above the threshold) is checked
/// before "conditional" (ternary markers present); the first true branch
/// wins and the default is "single".
pub fn analyze_structure(raw_text: &str) -> StructurePatterns {
    let hooks_used = KNOWN_HOOKS
        .iter()
        .filter(|(marker, _)| raw_text.contains(marker))
        .map(|(_, hook)| *hook)
        .collect();

    let children_shape = if count_occurrences(raw_text, "<div") > NESTED_CONTAINER_THRESHOLD {
        ChildrenShape::Nested
    } else if raw_text.contains('?') && raw_text.contains(':') {
        ChildrenShape::Conditional
    } else {
        ChildrenShape::Single
    };

    StructurePatterns {
        component_type: COMPONENT_TYPE.to_string(),
        hooks_used,
        children_shape,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hooks_detected_in_fixed_order() {
        let text = "import { memo, useState } from 'react';";
        let patterns = analyze_structure(text);
        assert_eq!(patterns.hooks_used, vec![Hook::UseState, Hook::Memo]);
    }

    #[test]
    fn nested_wins_over_conditional() {
        let text = "<div><div><div><div>{ok ? a : b}</div></div></div></div>";
        let patterns = analyze_structure(text);
        assert_eq!(patterns.children_shape, ChildrenShape::Nested);
    }

    #[test]
    fn conditional_needs_both_ternary_markers() {
        assert_eq!(
            analyze_structure("{ok ? a : b}").children_shape,
            ChildrenShape::Conditional
        );
        assert_eq!(
            analyze_structure("what?").children_shape,
            ChildrenShape::Single
        );
    }

    #[test]
    fn default_shape_is_single() {
        let patterns = analyze_structure("<div>hello</div>");
        assert_eq!(patterns.children_shape, ChildrenShape::Single);
        assert_eq!(patterns.component_type, "functional");
        assert!(patterns.hooks_used.is_empty());
    }
}
