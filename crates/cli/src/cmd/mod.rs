pub mod common;
pub mod doctor;
pub mod fields;
pub mod folders;
pub mod list_templates;
pub mod new;
pub mod set;
pub mod values;
