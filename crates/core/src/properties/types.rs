//! Property types shared by inference, parsing, coercion and building.

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::sync::LazyLock;

static KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w[\w\s-]*$").expect("valid key regex"));

/// Semantic type of a frontmatter property.
///
/// Decides both how a value is coerced and how its header line is shaped.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SemanticType {
    /// Plain string scalar.
    #[default]
    Text,
    /// List of strings.
    Multitext,
    /// Integer or decimal number.
    Number,
    /// Boolean.
    Checkbox,
    /// Date in YYYY-MM-DD format.
    Date,
    /// Date with time, ISO 8601.
    Datetime,
    /// Alternative note names (a list).
    Aliases,
    /// Note tags (a list).
    Tags,
}

impl SemanticType {
    pub const ALL: [SemanticType; 8] = [
        Self::Text,
        Self::Multitext,
        Self::Number,
        Self::Checkbox,
        Self::Date,
        Self::Datetime,
        Self::Aliases,
        Self::Tags,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Multitext => "multitext",
            Self::Number => "number",
            Self::Checkbox => "checkbox",
            Self::Date => "date",
            Self::Datetime => "datetime",
            Self::Aliases => "aliases",
            Self::Tags => "tags",
        }
    }

    /// Whether values of this type are stored as a list.
    pub fn is_list(&self) -> bool {
        matches!(self, Self::Multitext | Self::Aliases | Self::Tags)
    }
}

impl std::fmt::Display for SemanticType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SemanticType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == lower)
            .ok_or_else(|| format!("unknown property type: {}", s))
    }
}

/// One key/value/type triple being edited or emitted.
///
/// `value` always holds the string rendering of the underlying value (lists are
/// comma-joined) so an editor can treat every field the same way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub key: String,
    pub value: String,
    #[serde(rename = "type")]
    pub field_type: SemanticType,
}

impl Field {
    pub fn new(
        key: impl Into<String>,
        value: impl Into<String>,
        field_type: SemanticType,
    ) -> Self {
        Self { key: key.into(), value: value.into(), field_type }
    }
}

/// Check a property key: a word character followed by word characters,
/// whitespace or hyphens.
pub fn is_valid_key(key: &str) -> bool {
    KEY_RE.is_match(key)
}

/// Value after coercion to its semantic type.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    Text(String),
    List(Vec<String>),
    Number(f64),
    Bool(bool),
}

/// Render a raw structured value as the canonical field string.
pub fn stringify_raw(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Sequence(items) => {
            items.iter().map(stringify_raw).collect::<Vec<_>>().join(", ")
        }
        Value::Mapping(_) => serde_json::to_string(value).unwrap_or_default(),
        Value::Tagged(tagged) => stringify_raw(&tagged.value),
    }
}
