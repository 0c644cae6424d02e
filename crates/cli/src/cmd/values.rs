use notefields_core::vault::{NoteStore, VaultWalker, known_values};
use std::path::Path;

use super::common::{fail, load_config};
use crate::ValuesArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &ValuesArgs) {
    let cfg = load_config(config, profile, "values");

    let walker = VaultWalker::with_exclusions(&cfg.vault_root, vec![cfg.templates_dir.clone()])
        .unwrap_or_else(|e| fail("values", e));
    let store = NoteStore::new(walker.root());

    match known_values(&walker, &store, &args.key) {
        Ok(values) if values.is_empty() => println!("(no values for '{}')", args.key),
        Ok(values) => {
            for value in values {
                println!("{value}");
            }
        }
        Err(e) => fail("values", e),
    }
}
