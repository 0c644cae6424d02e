//! Typed frontmatter properties for markdown notes.
//!
//! [`properties`] holds the header codec: type inference, parsing, value
//! coercion and header building. The other modules connect it to a vault on
//! disk.

pub mod config;
pub mod frontmatter;
pub mod properties;
pub mod templates;
pub mod vault;
