//! Frontmatter parsing from markdown documents.

use serde_yaml::{Mapping, Value};
use thiserror::Error;

use super::types::{Frontmatter, ParsedDocument};
use crate::properties::parser::{extract_header, strip_header};

/// Errors that can occur during frontmatter parsing.
#[derive(Debug, Error)]
pub enum FrontmatterParseError {
    #[error("invalid YAML frontmatter: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    #[error("frontmatter is not a key/value mapping")]
    NotAMapping,
}

/// Parse frontmatter from markdown content.
///
/// Frontmatter is delimited by `---` lines at the start of the document:
/// ```markdown
/// ---
/// key: value
/// ---
/// # Document content
/// ```
/// A document without a complete header has no frontmatter and keeps its whole
/// text as the body.
pub fn parse(content: &str) -> Result<ParsedDocument, FrontmatterParseError> {
    let Some(yaml_content) = extract_header(content) else {
        return Ok(ParsedDocument { frontmatter: None, body: content.to_string() });
    };

    let body = strip_header(content).to_string();

    let fields = if yaml_content.trim().is_empty() {
        Mapping::new()
    } else {
        match serde_yaml::from_str::<Value>(yaml_content)? {
            Value::Mapping(m) => m,
            Value::Null => Mapping::new(),
            _ => return Err(FrontmatterParseError::NotAMapping),
        }
    };

    Ok(ParsedDocument { frontmatter: Some(Frontmatter { fields }), body })
}
