use crate::config::types::{ConfigFile, LoggingConfig, Profile, ResolvedConfig};
use std::path::{Path, PathBuf};
use std::{env, fs};

use dirs::home_dir;
use thiserror::Error;
use tracing::debug;

const VAULT_ROOT_VAR: &str = "{{vault_root}}";
const DEFAULT_PROFILE: &str = "default";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("profile '{0}' not found")]
    ProfileNotFound(String),

    #[error("no profiles defined in config")]
    NoProfiles,

    #[error("version {0} is unsupported (expected 1)")]
    BadVersion(u32),

    #[error("home directory not available to expand '~'")]
    NoHome,

    #[error("default_folder '{0}' must be relative to vault_root")]
    AbsoluteDefaultFolder(String),
}

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(
        config_path: Option<&Path>,
        profile_override: Option<&str>,
    ) -> Result<ResolvedConfig, ConfigError> {
        let path = config_path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
        let cf = read_config_file(&path)?;
        let (name, profile) = select_profile(&cf, profile_override)?;
        debug!("using profile '{name}' from {}", path.display());
        resolve(name, profile, &cf.logging)
    }
}

/// Location of the config file: `$XDG_CONFIG_HOME/notefields/config.toml`,
/// falling back to `~/.config`.
pub fn default_config_path() -> PathBuf {
    let base = env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| home_dir().unwrap_or_else(|| PathBuf::from("~")).join(".config"));
    base.join("notefields").join("config.toml")
}

fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let shown = || path.display().to_string();
    if !path.exists() {
        return Err(ConfigError::NotFound(shown()));
    }
    let s = fs::read_to_string(path).map_err(|e| ConfigError::ReadError(shown(), e))?;
    let cf: ConfigFile = toml::from_str(&s).map_err(|e| ConfigError::ParseError(shown(), e))?;

    if cf.version != 1 {
        return Err(ConfigError::BadVersion(cf.version));
    }
    if cf.profiles.is_empty() {
        return Err(ConfigError::NoProfiles);
    }
    Ok(cf)
}

/// The command-line profile wins over the file's `profile`, then `default`.
fn select_profile<'a>(
    cf: &'a ConfigFile,
    profile_override: Option<&'a str>,
) -> Result<(&'a str, &'a Profile), ConfigError> {
    let name = profile_override.or(cf.profile.as_deref()).unwrap_or(DEFAULT_PROFILE);
    cf.profiles
        .get(name)
        .map(|p| (name, p))
        .ok_or_else(|| ConfigError::ProfileNotFound(name.to_string()))
}

fn resolve(
    name: &str,
    prof: &Profile,
    log_cfg: &LoggingConfig,
) -> Result<ResolvedConfig, ConfigError> {
    let paths = VaultPaths { root: expand(&prof.vault_root)? };

    let types_file = match &prof.types_file {
        Some(file) => paths.resolve(file)?,
        None => paths.root.join(".obsidian").join("types.json"),
    };

    let default_folder = PathBuf::from(prof.default_folder.as_deref().unwrap_or_default());
    if default_folder.is_absolute() {
        return Err(ConfigError::AbsoluteDefaultFolder(default_folder.display().to_string()));
    }

    let log_file = log_cfg.file.as_ref().map(|f| paths.resolve(&f.to_string_lossy())).transpose()?;

    Ok(ResolvedConfig {
        active_profile: name.to_string(),
        templates_dir: paths.resolve(&prof.templates_dir)?,
        types_file,
        default_folder,
        logging: LoggingConfig { file: log_file, ..log_cfg.clone() },
        vault_root: paths.root,
    })
}

/// Resolves configured paths against a vault root.
struct VaultPaths {
    root: PathBuf,
}

impl VaultPaths {
    /// Substitute `{{vault_root}}`, expand `~` and env vars, then anchor
    /// relative results at the vault root.
    fn resolve(&self, raw: &str) -> Result<PathBuf, ConfigError> {
        let path = expand(&raw.replace(VAULT_ROOT_VAR, &self.root.to_string_lossy()))?;
        Ok(if path.is_relative() { self.root.join(path) } else { path })
    }
}

fn expand(input: &str) -> Result<PathBuf, ConfigError> {
    let expanded = shellexpand::full(input).map_err(|_| ConfigError::NoHome)?;
    Ok(PathBuf::from(expanded.into_owned()))
}
