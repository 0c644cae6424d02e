//! Vault access: note reading and writing, declared types and suggestions.

pub mod schema;
pub mod store;
pub mod suggest;
pub mod walker;

pub use schema::{TypeRegistry, TypeRegistryError};
pub use store::{NewNote, NoteFields, NoteStore, VaultError, structured_index};
pub use suggest::{folders, known_values};
pub use walker::{VaultWalker, VaultWalkerError};
