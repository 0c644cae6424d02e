use notefields_core::templates::discovery::discover_templates;
use std::path::Path;

use super::common::{fail, load_config};

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    let rc = load_config(config, profile, "list-templates");

    match discover_templates(&rc.templates_dir) {
        Ok(list) => {
            if list.is_empty() {
                println!("(no templates found)");
                return;
            }
            for t in &list {
                println!("{}", t.logical_name);
            }
            println!("-- {} templates --", list.len());
        }
        Err(e) => fail("list-templates", e),
    }
}
