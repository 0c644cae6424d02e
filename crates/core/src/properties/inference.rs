//! Semantic type inference for property keys.

use regex::Regex;
use serde_yaml::Value;
use std::sync::LazyLock;

use super::types::SemanticType;

static DATETIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}").expect("valid datetime regex")
});
static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"));

/// Source of explicitly declared property types.
pub trait AssignedTypes {
    /// The declared type for `key`, if any.
    fn assigned_type(&self, key: &str) -> Option<SemanticType>;
}

/// Schema with no declared types.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAssignedTypes;

impl AssignedTypes for NoAssignedTypes {
    fn assigned_type(&self, _key: &str) -> Option<SemanticType> {
        None
    }
}

/// Infer the semantic type for a key and its sample value.
///
/// Priority: the `tags`/`aliases` key names, then a declared type, then the
/// shape of the value.
pub fn infer_type(key: &str, value: &Value, schema: &dyn AssignedTypes) -> SemanticType {
    match key.to_lowercase().as_str() {
        "tags" => return SemanticType::Tags,
        "aliases" => return SemanticType::Aliases,
        _ => {}
    }

    if let Some(declared) = schema.assigned_type(key) {
        return declared;
    }

    infer_from_value(value)
}

/// Shape-based inference, used when nothing else is known about the key.
pub fn infer_from_value(value: &Value) -> SemanticType {
    match value {
        Value::Sequence(_) => SemanticType::Multitext,
        Value::Bool(_) => SemanticType::Checkbox,
        Value::Number(_) => SemanticType::Number,
        Value::String(s) if DATETIME_RE.is_match(s) => SemanticType::Datetime,
        Value::String(s) if DATE_RE.is_match(s) => SemanticType::Date,
        Value::Tagged(tagged) => infer_from_value(&tagged.value),
        _ => SemanticType::Text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    struct Declared(HashMap<&'static str, SemanticType>);

    impl AssignedTypes for Declared {
        fn assigned_type(&self, key: &str) -> Option<SemanticType> {
            self.0.get(key).copied()
        }
    }

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[rstest]
    #[case("[a, b]", SemanticType::Multitext)]
    #[case("[]", SemanticType::Multitext)]
    #[case("true", SemanticType::Checkbox)]
    #[case("42", SemanticType::Number)]
    #[case("-1.5", SemanticType::Number)]
    #[case("'2024-01-15T10:30:00'", SemanticType::Datetime)]
    #[case("'2024-01-15T10:30'", SemanticType::Datetime)]
    #[case("'2024-01-15'", SemanticType::Date)]
    #[case("'2024-01-15 extra'", SemanticType::Text)]
    #[case("hello", SemanticType::Text)]
    #[case("~", SemanticType::Text)]
    fn infers_from_shape(#[case] raw: &str, #[case] expected: SemanticType) {
        assert_eq!(infer_type("field", &yaml(raw), &NoAssignedTypes), expected);
    }

    #[test]
    fn key_name_overrides_value_shape() {
        assert_eq!(
            infer_type("tags", &Value::String("x".into()), &NoAssignedTypes),
            SemanticType::Tags
        );
        assert_eq!(infer_type("Aliases", &yaml("3"), &NoAssignedTypes), SemanticType::Aliases);
    }

    #[test]
    fn key_name_overrides_declared_type() {
        let schema = Declared(HashMap::from([("tags", SemanticType::Text)]));
        assert_eq!(infer_type("tags", &yaml("[a]"), &schema), SemanticType::Tags);
    }

    #[test]
    fn declared_type_beats_value_shape() {
        let schema = Declared(HashMap::from([("rating", SemanticType::Text)]));
        assert_eq!(infer_type("rating", &yaml("5"), &schema), SemanticType::Text);
        assert_eq!(infer_type("other", &yaml("5"), &schema), SemanticType::Number);
    }

    #[test]
    fn inference_is_repeatable() {
        let value = yaml("'2024-03-01'");
        let first = infer_type("due", &value, &NoAssignedTypes);
        let second = infer_type("due", &value, &NoAssignedTypes);
        assert_eq!(first, second);
    }
}
