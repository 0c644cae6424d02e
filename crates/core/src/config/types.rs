use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    pub profile: Option<String>,
    pub profiles: HashMap<String, Profile>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct Profile {
    pub vault_root: String,
    pub templates_dir: String,
    /// JSON file declaring property types (defaults to `.obsidian/types.json` in the vault).
    pub types_file: Option<String>,
    /// Folder new notes go into when none is given (relative to vault_root).
    #[serde(default)]
    pub default_folder: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub active_profile: String,
    pub vault_root: PathBuf,
    pub templates_dir: PathBuf,
    pub types_file: PathBuf,
    /// Vault-relative folder for new notes; empty means the vault root.
    pub default_folder: PathBuf,
    pub logging: LoggingConfig,
}
