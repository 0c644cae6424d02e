use notefields_core::properties::{build_header, overlay};
use notefields_core::templates::TemplateRepository;
use notefields_core::vault::{NewNote, NoteStore};
use std::path::Path;
use tracing::debug;

use super::common::{fail, load_config, load_types, resolve_fields};
use crate::NewArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &NewArgs) {
    let cfg = load_config(config, profile, "new");
    let types = load_types(&cfg);

    let (mut fields, body) = match &args.template {
        Some(name) => {
            let repo = TemplateRepository::new(&cfg.templates_dir)
                .unwrap_or_else(|e| fail("new", e));
            let loaded = repo.get_by_name(name, &types).unwrap_or_else(|e| fail("new", e));
            debug!("template '{}' provides {} fields", name, loaded.fields.len());
            (loaded.fields, loaded.body)
        }
        None => (Vec::new(), String::new()),
    };

    let edited = resolve_fields(&args.fields, &args.types, &fields, &types);
    overlay(&mut fields, &edited);

    if args.dry_run {
        print!("{}{}", build_header(&fields), body);
        return;
    }

    let folder = args.folder.as_deref().unwrap_or(&cfg.default_folder);
    let store = NoteStore::new(&cfg.vault_root);
    let new = NewNote { folder, name: &args.name, fields: &fields, body: &body };

    match store.create_note(&new) {
        Ok(path) => {
            println!("OK   nf new");
            println!("created: {}", path.display());
        }
        Err(e) => fail("new", e),
    }
}
