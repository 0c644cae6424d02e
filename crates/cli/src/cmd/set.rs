use notefields_core::vault::NoteStore;
use std::path::Path;

use super::common::{fail, load_config, load_types, resolve_fields};
use crate::SetArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &SetArgs) {
    let cfg = load_config(config, profile, "set");
    let types = load_types(&cfg);
    let store = NoteStore::new(&cfg.vault_root);

    let existing = store.note_fields(&args.note, &types);
    if let Some(err) = &existing.error {
        fail("set", err);
    }
    if !existing.found {
        fail("set", format!("note not found: {}", args.note));
    }

    let fields = resolve_fields(&args.fields, &args.types, &existing.fields, &types);
    if fields.is_empty() {
        println!("(nothing to set)");
        return;
    }

    match store.update_note(&args.note, &fields) {
        Ok(path) => {
            println!("OK   nf set");
            println!("updated: {}", path.display());
        }
        Err(e) => fail("set", e),
    }
}
