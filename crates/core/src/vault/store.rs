//! Filesystem-backed note store.

use serde_yaml::Mapping;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::walker::VaultWalkerError;
use crate::frontmatter;
use crate::properties::{AssignedTypes, Field, apply_fields, build_header, parse_fields};

const FORBIDDEN_NAME_CHARS: &[char] = &['*', '"', '\\', '/', '<', '>', ':', '|', '?'];

#[derive(Debug, Error)]
pub enum VaultError {
    #[error("note not found: {0}")]
    NotFound(String),

    #[error("note already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("invalid note name '{0}': names must be non-empty and not contain {1}")]
    InvalidName(String, String),

    #[error("failed to read note {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write note {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Walk(#[from] VaultWalkerError),
}

/// Fields read from a note. `found` is false when the note does not exist or
/// could not be read; `error` holds the read failure in the latter case.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteFields {
    pub fields: Vec<Field>,
    pub found: bool,
    pub error: Option<String>,
}

/// A note to be created.
#[derive(Debug, Clone)]
pub struct NewNote<'a> {
    /// Destination folder relative to the vault root.
    pub folder: &'a Path,
    /// Note name without the `.md` extension.
    pub name: &'a str,
    pub fields: &'a [Field],
    /// Text written after the header.
    pub body: &'a str,
}

/// Notes addressed by vault-relative path.
#[derive(Debug, Clone)]
pub struct NoteStore {
    root: PathBuf,
}

impl NoteStore {
    pub fn new(root: &Path) -> Self {
        Self { root: root.to_path_buf() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of a note; `.md` is appended when missing.
    pub fn note_path(&self, note: &str) -> PathBuf {
        let path = self.root.join(note);
        if path.extension().is_some_and(|e| e == "md") {
            path
        } else {
            self.root.join(format!("{note}.md"))
        }
    }

    pub fn read_text(&self, note: &str) -> Result<String, VaultError> {
        let path = self.note_path(note);
        fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => VaultError::NotFound(note.to_string()),
            _ => VaultError::Read { path, source: e },
        })
    }

    /// Structured frontmatter of a note, when it has a header that parses
    /// as a YAML mapping.
    pub fn lookup(&self, note: &str) -> Option<Mapping> {
        let text = self.read_text(note).ok()?;
        structured_index(&text)
    }

    /// Parse a note's header into typed fields.
    ///
    /// A missing or unreadable note is logged and gives no fields.
    pub fn note_fields(&self, note: &str, types: &dyn AssignedTypes) -> NoteFields {
        let text = match self.read_text(note) {
            Ok(text) => text,
            Err(VaultError::NotFound(_)) => {
                warn!("note not found: {note}");
                return NoteFields::default();
            }
            Err(e) => {
                warn!("{e}");
                return NoteFields { error: Some(e.to_string()), ..Default::default() };
            }
        };

        let index = structured_index(&text);
        NoteFields { fields: parse_fields(&text, index.as_ref(), types), found: true, error: None }
    }

    /// Merge `fields` into an existing note's header and write it back.
    pub fn update_note(&self, note: &str, fields: &[Field]) -> Result<PathBuf, VaultError> {
        let text = self.read_text(note)?;
        let path = self.note_path(note);
        let updated = apply_fields(&text, fields);
        fs::write(&path, updated)
            .map_err(|e| VaultError::Write { path: path.clone(), source: e })?;
        info!("updated {}", path.display());
        Ok(path)
    }

    /// Write a new note made of the built header and `body`, creating
    /// intermediate folders. Existing notes are never overwritten.
    pub fn create_note(&self, new: &NewNote<'_>) -> Result<PathBuf, VaultError> {
        let name = new.name.trim();
        validate_name(name)?;

        let dir = self.root.join(new.folder);
        let path = dir.join(format!("{name}.md"));
        if path.exists() {
            return Err(VaultError::AlreadyExists(path));
        }

        fs::create_dir_all(&dir)
            .map_err(|e| VaultError::Write { path: dir.clone(), source: e })?;

        let content = format!("{}{}", build_header(new.fields), new.body);
        fs::write(&path, content)
            .map_err(|e| VaultError::Write { path: path.clone(), source: e })?;

        info!("created {}", path.display());
        Ok(path)
    }
}

/// Structured view of a note's header: `None` when there is no header or it
/// is not valid YAML.
pub fn structured_index(text: &str) -> Option<Mapping> {
    match frontmatter::parse(text) {
        Ok(doc) => doc.frontmatter.map(|fm| fm.fields),
        Err(e) => {
            debug!("no structured frontmatter: {e}");
            None
        }
    }
}

fn validate_name(name: &str) -> Result<(), VaultError> {
    if name.is_empty() || name.contains(FORBIDDEN_NAME_CHARS) {
        let forbidden: String = FORBIDDEN_NAME_CHARS.iter().collect();
        return Err(VaultError::InvalidName(name.to_string(), forbidden));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::{NoAssignedTypes, SemanticType};
    use tempfile::tempdir;

    #[test]
    fn note_path_appends_extension() {
        let store = NoteStore::new(Path::new("/v"));
        assert_eq!(store.note_path("a/b"), PathBuf::from("/v/a/b.md"));
        assert_eq!(store.note_path("a/b.md"), PathBuf::from("/v/a/b.md"));
        assert_eq!(store.note_path("v1.2"), PathBuf::from("/v/v1.2.md"));
    }

    #[test]
    fn missing_note_reports_not_found() {
        let tmp = tempdir().unwrap();
        let store = NoteStore::new(tmp.path());
        assert!(matches!(store.read_text("nope"), Err(VaultError::NotFound(_))));
        assert_eq!(store.note_fields("nope", &NoAssignedTypes), NoteFields::default());
        assert!(store.lookup("nope").is_none());
    }

    #[test]
    fn unreadable_note_carries_read_error() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("bin.md"), [0xff, 0xfe, 0x00]).unwrap();
        let store = NoteStore::new(tmp.path());

        let got = store.note_fields("bin", &NoAssignedTypes);
        assert!(!got.found);
        assert!(got.fields.is_empty());
        let err = got.error.expect("read error");
        assert!(err.starts_with("failed to read note"), "got {err}");
    }

    #[test]
    fn note_fields_uses_structured_header_when_valid() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("n.md"), "---\ntags:\n  - a\n  - b\n---\nbody").unwrap();
        let store = NoteStore::new(tmp.path());
        let got = store.note_fields("n", &NoAssignedTypes);
        assert!(got.found);
        assert_eq!(got.fields, vec![Field::new("tags", "a, b", SemanticType::Tags)]);
    }

    #[test]
    fn note_fields_falls_back_to_text_scan() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("n.md"), "---\ntitle: A: B\ncount: 2\n---\n").unwrap();
        let store = NoteStore::new(tmp.path());
        assert!(store.lookup("n").is_none());
        let got = store.note_fields("n", &NoAssignedTypes);
        assert_eq!(
            got.fields,
            vec![
                Field::new("title", "A: B", SemanticType::Text),
                Field::new("count", "2", SemanticType::Number),
            ]
        );
    }

    #[test]
    fn create_note_makes_folders_and_refuses_overwrite() {
        let tmp = tempdir().unwrap();
        let store = NoteStore::new(tmp.path());
        let fields = [Field::new("status", "draft", SemanticType::Text)];
        let new = NewNote {
            folder: Path::new("projects/2024"),
            name: "Plan",
            fields: &fields,
            body: "# Plan\n",
        };

        let path = store.create_note(&new).unwrap();
        assert_eq!(path, tmp.path().join("projects/2024/Plan.md"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "---\nstatus: draft\n---\n\n# Plan\n");
        assert!(matches!(store.create_note(&new), Err(VaultError::AlreadyExists(_))));
    }

    #[test]
    fn create_note_rejects_bad_names() {
        let tmp = tempdir().unwrap();
        let store = NoteStore::new(tmp.path());
        for name in ["", "  ", "a/b", "what?", "x:y"] {
            let new = NewNote { folder: Path::new(""), name, fields: &[], body: "" };
            assert!(matches!(store.create_note(&new), Err(VaultError::InvalidName(..))));
        }
    }

    #[test]
    fn update_note_merges_header() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("n.md"), "---\nstatus: draft\nkeep: 1\n---\nbody").unwrap();
        let store = NoteStore::new(tmp.path());
        store
            .update_note("n", &[Field::new("status", "done", SemanticType::Text)])
            .unwrap();
        let text = fs::read_to_string(tmp.path().join("n.md")).unwrap();
        assert_eq!(text, "---\nstatus: done\nkeep: 1\n---\nbody");
    }
}
