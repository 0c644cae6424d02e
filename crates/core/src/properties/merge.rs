//! Merge edited fields into existing note metadata.

use serde_yaml::{Mapping, Value};
use tracing::debug;

use super::builder::{build_header, format_field};
use super::codec::{to_typed, to_yaml};
use super::parser::extract_header;
use super::types::{Field, SemanticType, is_valid_key};
use crate::frontmatter;

/// Merge coerced field values into `mapping`.
///
/// Existing keys keep their position, new keys are appended and keys not
/// mentioned in `fields` are left alone. Empty text, date and datetime values
/// are skipped, as the header builder would skip them.
pub fn merge_fields(mapping: &mut Mapping, fields: &[Field]) {
    for field in fields {
        let key = field.key.trim();
        if !is_valid_key(key) || is_suppressed(field) {
            continue;
        }
        let typed = to_typed(&field.value, field.field_type);
        mapping.insert(Value::String(key.to_string()), to_yaml(&typed));
    }
}

/// Apply `fields` to a whole note and return the new note text.
///
/// A header that parses as YAML is merged structurally. Otherwise only the
/// entries for the edited keys are rewritten in the header text and every
/// other line is kept byte for byte. The body is kept as-is in both cases.
pub fn apply_fields(content: &str, fields: &[Field]) -> String {
    match frontmatter::parse(content) {
        Ok(mut doc) => {
            let fm = doc.frontmatter.get_or_insert_with(Default::default);
            merge_fields(&mut fm.fields, fields);
            frontmatter::serialize(&doc)
        }
        Err(e) => {
            debug!("header is not valid YAML, splicing edited keys: {e}");
            splice_fields(content, fields)
        }
    }
}

/// One top-level header entry: a `key: ...` line and the indented or list
/// lines that follow it. Lines before the first key have no key.
struct Entry {
    key: Option<String>,
    text: String,
}

fn splice_fields(content: &str, fields: &[Field]) -> String {
    let Some(header) = extract_header(content) else {
        let header = build_header(fields);
        return format!("{header}{content}");
    };
    let start = content.find('\n').map_or(0, |i| i + 1);
    let (prefix, rest) = content.split_at(start);
    let suffix = &rest[header.len()..];
    let eol = if prefix.ends_with("\r\n") { "\r\n" } else { "\n" };

    let mut entries = header_entries(header);
    for field in fields {
        let key = field.key.trim();
        if is_suppressed(field) {
            continue;
        }
        let Some(line) = format_field(field) else {
            continue;
        };
        let text = format!("{}{eol}", line.replace('\n', eol));
        match entries.iter_mut().find(|e| e.key.as_deref() == Some(key)) {
            Some(entry) => entry.text = text,
            None => entries.push(Entry { key: Some(key.to_string()), text }),
        }
    }

    let mut out = String::from(prefix);
    entries.iter().for_each(|e| out.push_str(&e.text));
    out.push_str(suffix);
    out
}

fn header_entries(header: &str) -> Vec<Entry> {
    let mut entries: Vec<Entry> = Vec::new();
    for line in header.split_inclusive('\n') {
        let key = line
            .split_once(':')
            .map(|(left, _)| left.trim_end())
            .filter(|left| !left.starts_with(char::is_whitespace) && is_valid_key(left));
        if key.is_none()
            && let Some(last) = entries.last_mut()
        {
            last.text.push_str(line);
            continue;
        }
        entries.push(Entry { key: key.map(str::to_string), text: line.to_string() });
    }
    entries
}

/// Replace same-key fields in `existing` and append the rest.
pub fn overlay(existing: &mut Vec<Field>, fields: &[Field]) {
    for field in fields {
        match existing.iter_mut().find(|f| f.key == field.key) {
            Some(slot) => *slot = field.clone(),
            None => existing.push(field.clone()),
        }
    }
}

fn is_suppressed(field: &Field) -> bool {
    field.value.is_empty()
        && matches!(
            field.field_type,
            SemanticType::Text | SemanticType::Date | SemanticType::Datetime
        )
}
