//! Header block text generation from typed fields.

use super::codec::{format_number, parse_bool, parse_number, split_list};
use super::types::{Field, SemanticType, is_valid_key};

/// Build the `---` delimited header block for `fields`, in order.
///
/// Returns an empty string when there are no fields. Otherwise the block ends
/// with the closing delimiter and a blank line.
pub fn build_header(fields: &[Field]) -> String {
    if fields.is_empty() {
        return String::new();
    }

    let mut out = String::from("---\n");
    for line in fields.iter().filter_map(format_field) {
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str("---\n\n");
    out
}

/// Format one field as header text, which may span several lines.
///
/// Returns `None` for fields that produce no output: empty text, date and
/// datetime values, and keys that are not valid property names.
pub fn format_field(field: &Field) -> Option<String> {
    let key = field.key.trim();
    if !is_valid_key(key) {
        return None;
    }
    let value = field.value.as_str();

    match field.field_type {
        SemanticType::Number => {
            Some(format!("{key}: {}", format_number(parse_number(value))))
        }
        SemanticType::Checkbox => Some(format!("{key}: {}", parse_bool(value))),
        SemanticType::Multitext | SemanticType::Aliases => {
            Some(format_list(key, &split_list(value), quote))
        }
        SemanticType::Tags => Some(format_list(key, &split_list(value), escape_scalar)),
        SemanticType::Date | SemanticType::Datetime => {
            (!value.is_empty()).then(|| format!("{key}: {value}"))
        }
        SemanticType::Text => {
            (!value.is_empty()).then(|| format!("{key}: {}", escape_scalar(value)))
        }
    }
}

fn format_list(key: &str, items: &[String], item_fmt: fn(&str) -> String) -> String {
    if items.is_empty() {
        return format!("{key}: []");
    }
    let mut out = format!("{key}:");
    for item in items {
        out.push_str("\n  - ");
        out.push_str(&item_fmt(item));
    }
    out
}

/// Quote a scalar only when it contains characters that would change how the
/// line reads: `:`, `#`, quotes or a newline.
pub fn escape_scalar(value: &str) -> String {
    if value.contains([':', '#', '\'', '"', '\n']) { quote(value) } else { value.to_string() }
}

/// Wrap in double quotes, escaping backslashes and double quotes.
pub fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}
