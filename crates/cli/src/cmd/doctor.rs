use notefields_core::config::loader::{ConfigLoader, default_config_path};
use notefields_core::vault::TypeRegistry;
use std::path::Path;

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => {
            println!("OK   nf doctor");
            println!(
                "path: {}",
                config.map_or_else(
                    || default_config_path().display().to_string(),
                    |p| p.display().to_string()
                )
            );
            println!("profile: {}", rc.active_profile);
            println!("vault_root: {}", rc.vault_root.display());
            println!("templates_dir: {}", rc.templates_dir.display());
            println!("types_file: {}", rc.types_file.display());
            if rc.default_folder.as_os_str().is_empty() {
                println!("default_folder: (vault root)");
            } else {
                println!("default_folder: {}", rc.default_folder.display());
            }
            match TypeRegistry::load(&rc.types_file) {
                Ok(types) => println!("declared types: {}", types.len()),
                Err(e) => println!("declared types: unreadable ({e})"),
            }
        }
        Err(e) => {
            println!("FAIL nf doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
