use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateInfo {
    pub logical_name: String,
    pub path: PathBuf,
}

#[derive(Debug, Error)]
pub enum TemplateDiscoveryError {
    #[error("templates directory does not exist: {0}")]
    MissingDir(String),

    #[error("failed to read templates directory {0}: {1}")]
    WalkError(String, #[source] walkdir::Error),
}

/// Find `.md` templates under `root`, sorted by logical name.
pub fn discover_templates(root: &Path) -> Result<Vec<TemplateInfo>, TemplateDiscoveryError> {
    if !root.is_dir() {
        return Err(TemplateDiscoveryError::MissingDir(root.display().to_string()));
    }

    let mut out = Vec::new();
    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry
            .map_err(|e| TemplateDiscoveryError::WalkError(root.display().to_string(), e))?;
        let path = entry.path();
        if !entry.file_type().is_file() || !is_template_file(path) {
            continue;
        }
        let rel = path.strip_prefix(root).unwrap_or(path);
        out.push(TemplateInfo {
            logical_name: logical_name_from_relative(rel),
            path: path.to_path_buf(),
        });
    }

    out.sort_by(|a, b| a.logical_name.cmp(&b.logical_name));
    Ok(out)
}

/// Plain `name.md` files only; `name.tpl.md` and other extensions are skipped.
fn is_template_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    name.ends_with(".md") && name.matches('.').count() == 1 && !name.starts_with('.')
}

fn logical_name_from_relative(rel: &Path) -> String {
    let without_ext = rel.with_extension("");
    without_ext
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
