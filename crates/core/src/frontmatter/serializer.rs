//! Frontmatter serialization back to markdown.

use serde_yaml::Mapping;

use super::types::ParsedDocument;

/// Serialize a parsed document back to a markdown string.
///
/// Fields keep their mapping order. A document with no fields is written
/// without a header.
pub fn serialize(doc: &ParsedDocument) -> String {
    if let Some(fm) = &doc.frontmatter
        && !fm.fields.is_empty()
    {
        return format!("---\n{}---\n{}", mapping_to_yaml(&fm.fields), doc.body);
    }
    doc.body.clone()
}

fn mapping_to_yaml(fields: &Mapping) -> String {
    serde_yaml::to_string(fields).unwrap_or_default()
}
