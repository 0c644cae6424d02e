use notefields_core::vault::{VaultWalker, folders};
use std::path::Path;

use super::common::{fail, load_config};

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    let cfg = load_config(config, profile, "folders");

    let walker = VaultWalker::with_exclusions(&cfg.vault_root, vec![cfg.templates_dir.clone()])
        .unwrap_or_else(|e| fail("folders", e));

    match folders(&walker) {
        Ok(list) => {
            println!("/");
            for folder in list {
                println!("{}", folder.display());
            }
        }
        Err(e) => fail("folders", e),
    }
}
