//! Note templates: discovery and loading.

pub mod discovery;
pub mod repository;

pub use discovery::{TemplateDiscoveryError, TemplateInfo, discover_templates};
pub use repository::{LoadedTemplate, TemplateRepoError, TemplateRepository};
