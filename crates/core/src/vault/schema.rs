//! Declared property types, loaded from a vault's types file.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::properties::{AssignedTypes, SemanticType};

#[derive(Debug, Error)]
pub enum TypeRegistryError {
    #[error("failed to read types file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse types file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Default, Deserialize)]
struct TypesFile {
    #[serde(default)]
    types: HashMap<String, String>,
}

/// Explicit key-to-type assignments.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: HashMap<String, SemanticType>,
}

impl TypeRegistry {
    /// Load `{"types": {"key": "type"}}` from `path`.
    ///
    /// A missing file gives an empty registry. Entries naming an unknown type
    /// are ignored.
    pub fn load(path: &Path) -> Result<Self, TypeRegistryError> {
        if !path.exists() {
            debug!("no types file at {}", path.display());
            return Ok(Self::default());
        }

        let s = fs::read_to_string(path)
            .map_err(|e| TypeRegistryError::Io { path: path.to_path_buf(), source: e })?;
        Self::from_json(&s)
            .map_err(|e| TypeRegistryError::Parse { path: path.to_path_buf(), source: e })
    }

    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        let file: TypesFile = serde_json::from_str(s)?;
        let mut types = HashMap::new();
        for (key, name) in file.types {
            match name.parse::<SemanticType>() {
                Ok(t) => {
                    types.insert(key, t);
                }
                Err(e) => warn!("ignoring declared type for '{key}': {e}"),
            }
        }
        Ok(Self { types })
    }

    pub fn insert(&mut self, key: impl Into<String>, field_type: SemanticType) {
        self.types.insert(key.into(), field_type);
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl AssignedTypes for TypeRegistry {
    fn assigned_type(&self, key: &str) -> Option<SemanticType> {
        self.types.get(key).copied()
    }
}
