//! Suggestion data for folder and value pickers.

use std::collections::BTreeSet;
use std::path::PathBuf;

use super::store::{NoteStore, VaultError, structured_index};
use super::walker::VaultWalker;
use crate::properties::codec::split_list;
use crate::properties::{NoAssignedTypes, fields_from_text, stringify_raw};
use serde_yaml::Value;

/// Vault-relative folders, hidden and excluded folders skipped.
pub fn folders(walker: &VaultWalker) -> Result<Vec<PathBuf>, VaultError> {
    Ok(walker.folders()?)
}

/// Distinct values previously used for `key` across the vault, sorted.
///
/// List values contribute each item separately.
pub fn known_values(
    walker: &VaultWalker,
    store: &NoteStore,
    key: &str,
) -> Result<Vec<String>, VaultError> {
    let mut values = BTreeSet::new();

    for note in walker.notes()? {
        let note = note.to_string_lossy();
        let Ok(text) = store.read_text(&note) else {
            continue;
        };

        match structured_index(&text) {
            Some(mapping) => match mapping.get(key) {
                Some(Value::Sequence(items)) => {
                    values.extend(items.iter().map(stringify_raw));
                }
                Some(value) => {
                    values.insert(stringify_raw(value));
                }
                None => {}
            },
            None => {
                let fields = fields_from_text(&text, &NoAssignedTypes);
                for field in fields.into_iter().filter(|f| f.key == key) {
                    if field.field_type.is_list() {
                        values.extend(split_list(&field.value));
                    } else {
                        values.insert(field.value);
                    }
                }
            }
        }
    }

    values.remove("");
    Ok(values.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn collects_scalar_and_list_values() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        fs::write(root.join("a.md"), "---\nstatus: draft\ntags: [x, y]\n---\n").unwrap();
        fs::create_dir(root.join("sub")).unwrap();
        fs::write(root.join("sub/b.md"), "---\nstatus: done\ntags:\n  - y\n  - z\n---\n")
            .unwrap();
        fs::write(root.join("c.md"), "---\nstatus: A: B\ntags: [w]\n---\n").unwrap();
        fs::write(root.join("d.md"), "no header").unwrap();

        let walker = VaultWalker::new(root).unwrap();
        let store = NoteStore::new(walker.root());

        assert_eq!(
            known_values(&walker, &store, "status").unwrap(),
            vec!["A: B", "done", "draft"]
        );
        assert_eq!(known_values(&walker, &store, "tags").unwrap(), vec!["w", "x", "y", "z"]);
        assert!(known_values(&walker, &store, "missing").unwrap().is_empty());
    }
}
