use notefields_core::properties::Field;
use notefields_core::vault::NoteStore;
use std::path::Path;
use tabled::{Table, Tabled, settings::Style};

use super::common::{fail, load_config, load_types};
use crate::FieldsArgs;

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Type")]
    field_type: String,
    #[tabled(rename = "Value")]
    value: String,
}

impl From<&Field> for FieldRow {
    fn from(field: &Field) -> Self {
        Self {
            key: field.key.clone(),
            field_type: field.field_type.to_string(),
            value: field.value.clone(),
        }
    }
}

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &FieldsArgs) {
    let cfg = load_config(config, profile, "fields");
    let types = load_types(&cfg);
    let store = NoteStore::new(&cfg.vault_root);

    let result = store.note_fields(&args.note, &types);
    if let Some(err) = &result.error {
        fail("fields", err);
    }
    if !result.found {
        fail("fields", format!("note not found: {}", args.note));
    }

    if args.json {
        match serde_json::to_string_pretty(&result.fields) {
            Ok(json) => println!("{json}"),
            Err(e) => fail("fields", e),
        }
        return;
    }

    if result.fields.is_empty() {
        println!("(no properties)");
        return;
    }

    let rows: Vec<FieldRow> = result.fields.iter().map(FieldRow::from).collect();
    let table = Table::new(&rows).with(Style::rounded()).to_string();
    println!("{}", table);
}
