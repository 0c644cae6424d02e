//! Helpers shared by the note commands.

use notefields_core::config::loader::{ConfigLoader, default_config_path};
use notefields_core::config::types::ResolvedConfig;
use notefields_core::properties::{AssignedTypes, Field, SemanticType, field_from_pair};
use notefields_core::vault::TypeRegistry;
use std::path::Path;
use tracing::warn;

use crate::logging;

/// Load config and start logging, or print a failure and exit.
pub fn load_config(config: Option<&Path>, profile: Option<&str>, cmd: &str) -> ResolvedConfig {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => {
            logging::init(&rc.logging);
            rc
        }
        Err(e) => {
            println!("FAIL nf {cmd}");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}

/// Declared property types; an unreadable types file is logged and ignored.
pub fn load_types(cfg: &ResolvedConfig) -> TypeRegistry {
    TypeRegistry::load(&cfg.types_file).unwrap_or_else(|e| {
        warn!("{e}");
        TypeRegistry::default()
    })
}

/// Print a failure line and the error, then exit.
pub fn fail(cmd: &str, err: impl std::fmt::Display) -> ! {
    println!("FAIL nf {cmd}");
    println!("{err}");
    std::process::exit(1);
}

/// Turn command-line values and type overrides into fields.
///
/// A value's type comes from, in order: an explicit override, the type of the
/// same key in `base`, then inference. A type override without a value
/// re-types the value found in `base`.
pub fn resolve_fields(
    pairs: &[(String, String)],
    types: &[(String, SemanticType)],
    base: &[Field],
    schema: &dyn AssignedTypes,
) -> Vec<Field> {
    let override_for =
        |key: &str| types.iter().rev().find(|(k, _)| k == key).map(|(_, t)| *t);

    let mut fields: Vec<Field> = Vec::new();
    for (key, value) in pairs {
        let mut field = field_from_pair(key, value.trim(), schema);
        if let Some(t) = override_for(key) {
            field.field_type = t;
        } else if let Some(existing) = base.iter().find(|f| &f.key == key) {
            field.field_type = existing.field_type;
        }
        match fields.iter_mut().find(|f| f.key == field.key) {
            Some(slot) => *slot = field,
            None => fields.push(field),
        }
    }

    for (key, t) in types {
        if fields.iter().any(|f| &f.key == key) {
            continue;
        }
        if let Some(existing) = base.iter().find(|f| &f.key == key) {
            fields.push(Field::new(key.clone(), existing.value.clone(), *t));
        }
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use notefields_core::properties::NoAssignedTypes;

    fn pair(k: &str, v: &str) -> (String, String) {
        (k.to_string(), v.to_string())
    }

    #[test]
    fn infers_types_of_new_values() {
        let fields = resolve_fields(
            &[pair("count", "3"), pair("done", "true"), pair("title", "\"A: B\"")],
            &[],
            &[],
            &NoAssignedTypes,
        );
        assert_eq!(
            fields,
            vec![
                Field::new("count", "3", SemanticType::Number),
                Field::new("done", "true", SemanticType::Checkbox),
                Field::new("title", "A: B", SemanticType::Text),
            ]
        );
    }

    #[test]
    fn base_type_and_overrides_take_precedence() {
        let base = [
            Field::new("related", "x", SemanticType::Multitext),
            Field::new("rating", "4", SemanticType::Number),
        ];
        let fields = resolve_fields(
            &[pair("related", "a, b"), pair("code", "007")],
            &[("code".to_string(), SemanticType::Text), ("rating".to_string(), SemanticType::Text)],
            &base,
            &NoAssignedTypes,
        );
        assert_eq!(
            fields,
            vec![
                Field::new("related", "a, b", SemanticType::Multitext),
                Field::new("code", "007", SemanticType::Text),
                Field::new("rating", "4", SemanticType::Text),
            ]
        );
    }

    #[test]
    fn repeated_keys_keep_the_last_value() {
        let fields =
            resolve_fields(&[pair("a", "1"), pair("a", "2")], &[], &[], &NoAssignedTypes);
        assert_eq!(fields, vec![Field::new("a", "2", SemanticType::Number)]);
    }
}
