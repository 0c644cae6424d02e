//! Typed note properties.
//!
//! This module provides:
//! - Semantic type inference for property keys
//! - Header parsing into typed fields, from structured frontmatter or raw text
//! - Coercion between field strings and typed values
//! - Header block generation and merging into existing notes

pub mod builder;
pub mod codec;
pub mod inference;
pub mod merge;
pub mod parser;
pub mod types;

pub use builder::{build_header, escape_scalar, format_field};
pub use codec::{to_string, to_typed, to_yaml};
pub use inference::{AssignedTypes, NoAssignedTypes, infer_type};
pub use merge::{apply_fields, merge_fields, overlay};
pub use parser::{
    extract_header, field_from_pair, fields_from_index, fields_from_text, parse_fields,
};
pub use types::{Field, SemanticType, TypedValue, is_valid_key, stringify_raw};
