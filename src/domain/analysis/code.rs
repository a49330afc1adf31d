use std::sync::OnceLock;

use regex::Regex;

use crate::domain::models::{CodePatterns, ExportPattern};

fn import_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"import[^;]+;").expect("valid import regex"))
}

/// Extract code-level conventions: raw import statements (verbatim) and
/// the export pattern.
pub fn analyze_code(raw_text: &str) -> CodePatterns {
    let imports = import_re()
        .find_iter(raw_text)
        .map(|m| m.as_str().to_string())
        .collect();

    let export_pattern = if raw_text.contains("export default") {
        ExportPattern::DefaultExport
    } else {
        ExportPattern::NamedExport
    };

    CodePatterns {
        imports,
        export_pattern,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn imports_matched_verbatim_in_order() {
        let text = "import React from 'react';\nimport { memo } from 'react';\nconst x = 1;";
        let patterns = analyze_code(text);
        assert_eq!(
            patterns.imports,
            vec!["import React from 'react';", "import { memo } from 'react';"]
        );
    }

    #[test]
    fn export_pattern_detection() {
        assert_eq!(
            analyze_code("export default function A() {}").export_pattern,
            ExportPattern::DefaultExport
        );
        assert_eq!(
            analyze_code("export const A = () => {};").export_pattern,
            ExportPattern::NamedExport
        );
    }

    #[test]
    fn no_imports_yields_empty_list() {
        assert!(analyze_code("const x = 1;").imports.is_empty());
    }
}
