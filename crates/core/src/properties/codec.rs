//! Conversion between a field's string form and its typed value.
//!
//! Coercion never fails: a number that does not parse becomes `0`, anything
//! other than `true`/`1` is `false`, and lists drop empty items.

use serde_yaml::{Number, Value};

use super::types::{SemanticType, TypedValue};

/// Expand a field string into the value shape its type requires.
pub fn to_typed(value: &str, field_type: SemanticType) -> TypedValue {
    match field_type {
        SemanticType::Number => TypedValue::Number(parse_number(value)),
        SemanticType::Checkbox => TypedValue::Bool(parse_bool(value)),
        SemanticType::Multitext | SemanticType::Aliases | SemanticType::Tags => {
            TypedValue::List(split_list(value))
        }
        SemanticType::Date | SemanticType::Datetime | SemanticType::Text => {
            TypedValue::Text(value.to_string())
        }
    }
}

/// Collapse a typed value back into its field string.
///
/// A text value held under a number or checkbox type is normalised through
/// the same coercion as [`to_typed`].
pub fn to_string(value: &TypedValue, field_type: SemanticType) -> String {
    match (value, field_type) {
        (TypedValue::Number(n), _) => format_number(*n),
        (TypedValue::Bool(b), _) => b.to_string(),
        (TypedValue::List(items), _) => items.join(", "),
        (TypedValue::Text(s), SemanticType::Number) => format_number(parse_number(s)),
        (TypedValue::Text(s), SemanticType::Checkbox) => parse_bool(s).to_string(),
        (TypedValue::Text(s), _) => s.clone(),
    }
}

/// Convert a typed value into the YAML value merged into structured frontmatter.
pub fn to_yaml(value: &TypedValue) -> Value {
    match value {
        TypedValue::Text(s) => Value::String(s.clone()),
        TypedValue::Bool(b) => Value::Bool(*b),
        TypedValue::List(items) => {
            Value::Sequence(items.iter().cloned().map(Value::String).collect())
        }
        TypedValue::Number(n) => match as_integer(*n) {
            Some(i) => Value::Number(Number::from(i)),
            None => Value::Number(Number::from(*n)),
        },
    }
}

/// Parse a decimal number, falling back to zero.
pub fn parse_number(value: &str) -> f64 {
    match value.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

/// `"true"` and `"1"` are true; everything else is false.
pub fn parse_bool(value: &str) -> bool {
    matches!(value.trim(), "true" | "1")
}

/// Split on commas, trimming items and dropping empty ones.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Render a number as a literal, without a trailing `.0` for whole values.
pub fn format_number(n: f64) -> String {
    match as_integer(n) {
        Some(i) => i.to_string(),
        None => n.to_string(),
    }
}

fn as_integer(n: f64) -> Option<i64> {
    if n.fract() == 0.0 && n.abs() < 9.0e15 { Some(n as i64) } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("3", 3.0)]
    #[case(" 2.5 ", 2.5)]
    #[case("-7", -7.0)]
    #[case("", 0.0)]
    #[case("abc", 0.0)]
    #[case("NaN", 0.0)]
    #[case("inf", 0.0)]
    fn number_coercion(#[case] input: &str, #[case] expected: f64) {
        assert_eq!(to_typed(input, SemanticType::Number), TypedValue::Number(expected));
    }

    #[rstest]
    #[case("true", true)]
    #[case("1", true)]
    #[case("false", false)]
    #[case("yes", false)]
    #[case("TRUE", false)]
    #[case("", false)]
    fn checkbox_coercion(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(to_typed(input, SemanticType::Checkbox), TypedValue::Bool(expected));
    }

    #[test]
    fn list_coercion_trims_and_drops_empty_items() {
        let typed = to_typed("alpha, beta ,, gamma, alpha", SemanticType::Multitext);
        assert_eq!(
            typed,
            TypedValue::List(vec![
                "alpha".into(),
                "beta".into(),
                "gamma".into(),
                "alpha".into()
            ])
        );
        assert_eq!(to_typed("", SemanticType::Tags), TypedValue::List(vec![]));
    }

    #[test]
    fn text_like_types_pass_through() {
        for t in [SemanticType::Text, SemanticType::Date, SemanticType::Datetime] {
            assert_eq!(to_typed(" as is ", t), TypedValue::Text(" as is ".into()));
        }
    }

    #[test]
    fn to_string_inverts_well_formed_values() {
        let cases = [
            ("42", SemanticType::Number),
            ("1.25", SemanticType::Number),
            ("true", SemanticType::Checkbox),
            ("false", SemanticType::Checkbox),
            ("a, b, c", SemanticType::Aliases),
            ("2024-01-15", SemanticType::Date),
            ("anything: goes", SemanticType::Text),
        ];
        for (input, t) in cases {
            assert_eq!(to_string(&to_typed(input, t), t), input, "type {t}");
        }
    }

    #[test]
    fn text_under_number_type_is_normalised() {
        let value = TypedValue::Text("7.0".into());
        assert_eq!(to_string(&value, SemanticType::Number), "7");
        assert_eq!(to_string(&value, SemanticType::Checkbox), "false");
    }

    #[test]
    fn yaml_numbers_keep_integers_integral() {
        assert_eq!(to_yaml(&TypedValue::Number(3.0)).as_i64(), Some(3));
        assert_eq!(to_yaml(&TypedValue::Number(0.5)).as_f64(), Some(0.5));
    }
}
