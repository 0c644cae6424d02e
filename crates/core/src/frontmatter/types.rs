//! Frontmatter types and data structures.

use serde_yaml::Mapping;

/// Parsed YAML frontmatter from a markdown document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frontmatter {
    /// Fields in the order they appear in the document.
    pub fields: Mapping,
}

/// Result of splitting frontmatter from markdown.
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    /// Parsed frontmatter (if present).
    pub frontmatter: Option<Frontmatter>,
    /// The markdown body (everything after frontmatter).
    pub body: String,
}
