use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::properties::parser::strip_header;
use crate::properties::{AssignedTypes, Field, parse_fields};
use crate::templates::discovery::{TemplateDiscoveryError, TemplateInfo, discover_templates};
use crate::vault::structured_index;

#[derive(Debug, Error)]
pub enum TemplateRepoError {
    #[error(transparent)]
    Discovery(#[from] TemplateDiscoveryError),

    #[error("template not found: {0}")]
    NotFound(String),

    #[error("failed to read template file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone)]
pub struct LoadedTemplate {
    pub logical_name: String,
    pub path: PathBuf,
    /// Header fields, used as the starting values of a new note.
    pub fields: Vec<Field>,
    /// Body content (excludes the header).
    pub body: String,
}

pub struct TemplateRepository {
    pub root: PathBuf,
    pub templates: Vec<TemplateInfo>,
}

impl TemplateRepository {
    pub fn new(root: &Path) -> Result<Self, TemplateDiscoveryError> {
        let templates = discover_templates(root)?;
        Ok(Self { root: root.to_path_buf(), templates })
    }

    pub fn list_all(&self) -> &[TemplateInfo] {
        &self.templates
    }

    pub fn get_by_name(
        &self,
        name: &str,
        types: &dyn AssignedTypes,
    ) -> Result<LoadedTemplate, TemplateRepoError> {
        let info = self
            .templates
            .iter()
            .find(|t| t.logical_name == name)
            .ok_or_else(|| TemplateRepoError::NotFound(name.to_string()))?;

        let content = fs::read_to_string(&info.path)
            .map_err(|e| TemplateRepoError::Io { path: info.path.clone(), source: e })?;

        // Template headers often hold placeholders that are not valid YAML;
        // those go through the line scanner.
        let index = structured_index(&content);
        let fields = parse_fields(&content, index.as_ref(), types);

        Ok(LoadedTemplate {
            logical_name: info.logical_name.clone(),
            path: info.path.clone(),
            fields,
            body: strip_header(&content).to_string(),
        })
    }
}
