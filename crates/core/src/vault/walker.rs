//! Recursive vault directory walker.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

#[derive(Debug, Error)]
pub enum VaultWalkerError {
    #[error("vault root does not exist: {0}")]
    MissingRoot(String),

    #[error("failed to walk vault directory {0}: {1}")]
    WalkError(String, #[source] walkdir::Error),
}

/// Walker for discovering notes and folders in a vault.
#[derive(Debug)]
pub struct VaultWalker {
    root: PathBuf,
    /// Folders to exclude from walking (relative paths from vault root).
    excluded_folders: Vec<PathBuf>,
}

impl VaultWalker {
    pub fn new(root: &Path) -> Result<Self, VaultWalkerError> {
        Self::with_exclusions(root, Vec::new())
    }

    /// Create a walker that skips the given folders.
    ///
    /// Absolute exclusions under the vault root are made relative to it.
    pub fn with_exclusions(
        root: &Path,
        excluded_folders: Vec<PathBuf>,
    ) -> Result<Self, VaultWalkerError> {
        let root = root
            .canonicalize()
            .map_err(|_| VaultWalkerError::MissingRoot(root.display().to_string()))?;

        let excluded_folders = excluded_folders
            .into_iter()
            .map(|p| {
                let p = p.canonicalize().unwrap_or(p);
                if p.is_absolute() {
                    p.strip_prefix(&root).unwrap_or(&p).to_path_buf()
                } else {
                    p
                }
            })
            .collect();

        Ok(Self { root, excluded_folders })
    }

    /// Vault-relative paths of all markdown notes, sorted.
    pub fn notes(&self) -> Result<Vec<PathBuf>, VaultWalkerError> {
        self.collect(|entry| entry.file_type().is_file() && is_markdown_file(entry.path()))
    }

    /// Vault-relative paths of all folders below the root, sorted.
    pub fn folders(&self) -> Result<Vec<PathBuf>, VaultWalkerError> {
        self.collect(|entry| entry.depth() > 0 && entry.file_type().is_dir())
    }

    fn collect(
        &self,
        keep: impl Fn(&DirEntry) -> bool,
    ) -> Result<Vec<PathBuf>, VaultWalkerError> {
        let mut out = Vec::new();

        for entry in WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| !self.is_excluded(e))
        {
            let entry = entry.map_err(|e| {
                VaultWalkerError::WalkError(self.root.display().to_string(), e)
            })?;
            if !keep(&entry) {
                continue;
            }
            let path = entry.path();
            out.push(path.strip_prefix(&self.root).unwrap_or(path).to_path_buf());
        }

        out.sort();
        Ok(out)
    }

    fn is_excluded(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return false;
        }

        if entry.file_name().to_string_lossy().starts_with('.') {
            return true;
        }

        entry.path().strip_prefix(&self.root).is_ok_and(|relative| {
            self.excluded_folders.iter().any(|excluded| relative.starts_with(excluded))
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn is_markdown_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()).is_some_and(|e| e == "md")
}
