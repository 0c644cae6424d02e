//! Header parsing into typed fields.
//!
//! Two strategies: a structured frontmatter mapping when one is available, and
//! a line-by-line scan of the raw header text otherwise. The line scan reads
//! each physical line on its own, so block lists (`key:` followed by indented
//! `- item` lines) come back as a single field with an empty value.

use regex::Regex;
use serde_yaml::{Mapping, Number, Value};
use std::sync::LazyLock;
use tracing::debug;

use super::inference::{AssignedTypes, infer_type};
use super::types::{Field, is_valid_key, stringify_raw};

/// Keys the host adds to structured metadata that are not user properties.
pub const RESERVED_KEYS: &[&str] = &["position"];

static DECIMAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-+]?(\d+\.?\d*|\.\d+)([eE][-+]?\d+)?$").expect("valid number regex")
});

/// Parse the fields of a note, preferring the structured mapping when given.
pub fn parse_fields(
    text: &str,
    index: Option<&Mapping>,
    schema: &dyn AssignedTypes,
) -> Vec<Field> {
    match index {
        Some(mapping) => {
            debug!("parsing properties from structured frontmatter");
            fields_from_index(mapping, schema)
        }
        None => {
            debug!("parsing properties from raw header text");
            fields_from_text(text, schema)
        }
    }
}

/// Build fields from a pre-parsed frontmatter mapping, in mapping order.
pub fn fields_from_index(mapping: &Mapping, schema: &dyn AssignedTypes) -> Vec<Field> {
    mapping
        .iter()
        .filter_map(|(key, value)| {
            let key = stringify_raw(key);
            if RESERVED_KEYS.contains(&key.as_str()) {
                return None;
            }
            let field_type = infer_type(&key, value, schema);
            Some(Field { value: stringify_raw(value), key, field_type })
        })
        .collect()
}

/// Scan the header block of `text` line by line.
pub fn fields_from_text(text: &str, schema: &dyn AssignedTypes) -> Vec<Field> {
    let Some(header) = extract_header(text) else {
        return Vec::new();
    };

    let mut fields = Vec::new();
    for line in header.lines() {
        let Some((left, right)) = line.split_once(':') else {
            continue;
        };
        let key = left.trim();
        if !is_valid_key(key) {
            continue;
        }

        fields.push(field_from_pair(key, right.trim(), schema));
    }
    fields
}

/// Build a field from a key and its raw text value, as written after the
/// colon of a header line.
///
/// Quoted values are unquoted and always read as strings; unquoted numbers,
/// booleans and flow lists keep their shape for type inference.
pub fn field_from_pair(key: &str, raw: &str, schema: &dyn AssignedTypes) -> Field {
    let (value, resolved) = match unquote(raw) {
        Some(inner) => (inner.clone(), Value::String(inner)),
        None => {
            let resolved = resolve_plain(raw);
            let value = match &resolved {
                Value::Sequence(_) => stringify_raw(&resolved),
                _ => raw.to_string(),
            };
            (value, resolved)
        }
    };

    let field_type = infer_type(key, &resolved, schema);
    Field { key: key.to_string(), value, field_type }
}

/// Text strictly between an opening `---` line at the very start of the note
/// and the next `---` line. LF and CRLF endings are both accepted.
pub fn extract_header(text: &str) -> Option<&str> {
    let mut lines = text.split_inclusive('\n');
    let first = lines.next()?;
    if !is_delimiter(first) {
        return None;
    }

    let start = first.len();
    let mut offset = start;
    for line in lines {
        if is_delimiter(line) {
            return Some(&text[start..offset]);
        }
        offset += line.len();
    }
    None
}

/// Text after the header block, or the whole text when there is none.
pub fn strip_header(text: &str) -> &str {
    let Some(header) = extract_header(text) else {
        return text;
    };
    let header_end = text.find('\n').map_or(0, |i| i + 1) + header.len();
    let rest = &text[header_end..];
    match rest.find('\n') {
        Some(i) => &rest[i + 1..],
        None => "",
    }
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end_matches(['\n', '\r']) == "---"
}

/// Strip a matching pair of single or double quotes and resolve backslash
/// escapes. Returns `None` when the value is not fully quoted.
pub fn unquote(raw: &str) -> Option<String> {
    let quote = raw.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    if raw.len() < 2 || !raw.ends_with(quote) {
        return None;
    }

    let inner = &raw[1..raw.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            out.push(chars.next().unwrap_or('\\'));
        } else {
            out.push(c);
        }
    }
    Some(out)
}

/// Read an unquoted scalar: numbers, `true`/`false` and flow lists keep their
/// shape for inference, anything else is a string.
fn resolve_plain(raw: &str) -> Value {
    if let Some(inner) = raw.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        let items = inner
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(|item| Value::String(unquote(item).unwrap_or_else(|| item.to_string())))
            .collect();
        return Value::Sequence(items);
    }

    match raw {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }

    if DECIMAL_RE.is_match(raw) {
        if let Ok(i) = raw.parse::<i64>() {
            return Value::Number(Number::from(i));
        }
        if let Ok(f) = raw.parse::<f64>()
            && f.is_finite()
        {
            return Value::Number(Number::from(f));
        }
    }

    Value::String(raw.to_string())
}
