//! Frontmatter parsing and serialization.
//!
//! This module provides functionality to:
//! - Split YAML frontmatter from markdown documents into an ordered mapping
//! - Serialize documents back to markdown with frontmatter

pub mod parser;
pub mod serializer;
pub mod types;

pub use parser::{FrontmatterParseError, parse};
pub use serializer::serialize;
pub use types::{Frontmatter, ParsedDocument};
