use serde::{Deserialize, Serialize};

/// Coarse structural classification of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum Category {
    ImageFocused,
    TextFocused,
    Mixed,
    CardBased,
    ListBased,
    Dashboard,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::ImageFocused => "image_focused",
            Category::TextFocused => "text_focused",
            Category::Mixed => "mixed",
            Category::CardBased => "card_based",
            Category::ListBased => "list_based",
            Category::Dashboard => "dashboard",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How images are laid out within the component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Arrangement {
    Grid,
    Flex,
    Single,
    Gallery,
    Multiple,
}

impl Arrangement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Arrangement::Grid => "grid",
            Arrangement::Flex => "flex",
            Arrangement::Single => "single",
            Arrangement::Gallery => "gallery",
            Arrangement::Multiple => "multiple",
        }
    }
}

impl std::fmt::Display for Arrangement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sizing {
    Responsive,
    AspectRatio,
    Fixed,
}

impl Sizing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sizing::Responsive => "responsive",
            Sizing::AspectRatio => "aspect_ratio",
            Sizing::Fixed => "fixed",
        }
    }
}

impl std::fmt::Display for Sizing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Center,
    Right,
    Left,
}

impl Alignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Left => "left",
        }
    }
}

impl std::fmt::Display for Alignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMethod {
    Grid,
    Flexbox,
    Absolute,
    Block,
}

impl LayoutMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutMethod::Grid => "grid",
            LayoutMethod::Flexbox => "flexbox",
            LayoutMethod::Absolute => "absolute",
            LayoutMethod::Block => "block",
        }
    }
}

impl std::fmt::Display for LayoutMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponsiveStrategy {
    Responsive,
    Fixed,
}

impl ResponsiveStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponsiveStrategy::Responsive => "responsive",
            ResponsiveStrategy::Fixed => "fixed",
        }
    }
}

impl std::fmt::Display for ResponsiveStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChildrenShape {
    Single,
    Nested,
    Conditional,
}

impl ChildrenShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChildrenShape::Single => "single",
            ChildrenShape::Nested => "nested",
            ChildrenShape::Conditional => "conditional",
        }
    }
}

impl std::fmt::Display for ChildrenShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportPattern {
    DefaultExport,
    NamedExport,
}

impl ExportPattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportPattern::DefaultExport => "default_export",
            ExportPattern::NamedExport => "named_export",
        }
    }
}

impl std::fmt::Display for ExportPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum ComplexityLevel {
    Simple,
    Moderate,
    Complex,
}

impl ComplexityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplexityLevel::Simple => "simple",
            ComplexityLevel::Moderate => "moderate",
            ComplexityLevel::Complex => "complex",
        }
    }
}

impl std::fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Recognized framework hooks, serialized with their source spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hook {
    #[serde(rename = "useState")]
    UseState,
    #[serde(rename = "useEffect")]
    UseEffect,
    #[serde(rename = "memo")]
    Memo,
}

impl Hook {
    pub fn as_str(&self) -> &'static str {
        match self {
            Hook::UseState => "useState",
            Hook::UseEffect => "useEffect",
            Hook::Memo => "memo",
        }
    }
}

impl std::fmt::Display for Hook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Heading/paragraph tags tracked for the text hierarchy, in scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingTag {
    H1,
    H2,
    H3,
    P,
}

impl HeadingTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeadingTag::H1 => "h1",
            HeadingTag::H2 => "h2",
            HeadingTag::H3 => "h3",
            HeadingTag::P => "p",
        }
    }
}

impl std::fmt::Display for HeadingTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImagePatterns {
    pub count: u32,
    pub arrangement: Arrangement,
    pub sizing: Sizing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPatterns {
    /// Tags present, in scan order, duplicates excluded.
    pub hierarchy: Vec<HeadingTag>,
    /// Font-size tokens found, first-seen order, deduped.
    pub typography: Vec<String>,
    pub alignment: Alignment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutPatterns {
    pub method: LayoutMethod,
    pub responsive: ResponsiveStrategy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StylingPatterns {
    pub colors: Vec<String>,
    pub spacing: Vec<String>,
    /// No extraction produces values for inline-style sources; kept empty.
    pub responsive_classes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructurePatterns {
    pub component_type: String,
    pub hooks_used: Vec<Hook>,
    pub children_shape: ChildrenShape,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodePatterns {
    /// Raw import statements, matched verbatim.
    pub imports: Vec<String>,
    pub export_pattern: ExportPattern,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentMetadata {
    pub complexity_score: f64,
    pub complexity_level: ComplexityLevel,
    pub reusability_score: f64,
    pub mobile_optimized: bool,
}

/// Everything the analysis core extracts from a single component source.
/// Immutable once computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentProfile {
    pub category: Category,
    pub images: ImagePatterns,
    pub text: TextPatterns,
    pub layout: LayoutPatterns,
    pub styling: StylingPatterns,
    pub structure: StructurePatterns,
    pub code: CodePatterns,
    pub metadata: ComponentMetadata,
    pub search_keywords: String,
}
