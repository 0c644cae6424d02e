mod cmd;
mod logging;

use clap::{Args, Parser, Subcommand};
use notefields_core::properties::SemanticType;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "nf", version, about = "Typed frontmatter properties for markdown notes")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved paths
    Doctor,

    /// List logical template names discovered under templates_dir
    ListTemplates,

    /// Show the typed properties of a note
    Fields(FieldsArgs),

    /// Create a new note with properties
    New(NewArgs),

    /// Set properties on an existing note
    Set(SetArgs),

    /// List vault folders a note can be created in
    Folders,

    /// List values previously used for a property
    Values(ValuesArgs),
}

#[derive(Debug, Args)]
pub struct FieldsArgs {
    /// Note path relative to the vault root (".md" optional)
    pub note: String,

    /// Print fields as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Note name, without extension
    pub name: String,

    /// Destination folder relative to the vault root
    #[arg(long)]
    pub folder: Option<PathBuf>,

    /// Logical template name (e.g. "meeting" or "work/task")
    #[arg(long)]
    pub template: Option<String>,

    /// Property value (repeatable)
    #[arg(long = "field", value_name = "KEY=VALUE", value_parser = parse_key_val)]
    pub fields: Vec<(String, String)>,

    /// Property type override (repeatable)
    #[arg(long = "type", value_name = "KEY=TYPE", value_parser = parse_key_type)]
    pub types: Vec<(String, SemanticType)>,

    /// Print the note instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct SetArgs {
    /// Note path relative to the vault root (".md" optional)
    pub note: String,

    /// Property value (repeatable)
    #[arg(long = "field", value_name = "KEY=VALUE", value_parser = parse_key_val)]
    pub fields: Vec<(String, String)>,

    /// Property type override (repeatable)
    #[arg(long = "type", value_name = "KEY=TYPE", value_parser = parse_key_type)]
    pub types: Vec<(String, SemanticType)>,
}

#[derive(Debug, Args)]
pub struct ValuesArgs {
    /// Property key
    pub key: String,
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) =
        s.split_once('=').ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;
    let key = key.trim();
    if !notefields_core::properties::is_valid_key(key) {
        return Err(format!("invalid property key '{key}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

fn parse_key_type(s: &str) -> Result<(String, SemanticType), String> {
    let (key, value) = parse_key_val(s)?;
    Ok((key, value.parse()?))
}

fn main() {
    let cli = Cli::parse();
    let config = cli.config.as_deref();
    let profile = cli.profile.as_deref();

    match cli.command {
        Commands::Doctor => cmd::doctor::run(config, profile),
        Commands::ListTemplates => cmd::list_templates::run(config, profile),
        Commands::Fields(args) => cmd::fields::run(config, profile, &args),
        Commands::New(args) => cmd::new::run(config, profile, &args),
        Commands::Set(args) => cmd::set::run(config, profile, &args),
        Commands::Folders => cmd::folders::run(config, profile),
        Commands::Values(args) => cmd::values::run(config, profile, &args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_val_splits_at_first_equals() {
        assert_eq!(
            parse_key_val("query=a=b"),
            Ok(("query".to_string(), "a=b".to_string()))
        );
        assert!(parse_key_val("novalue").is_err());
        assert!(parse_key_val("bad:key=x").is_err());
    }

    #[test]
    fn key_type_parses_semantic_type() {
        assert_eq!(
            parse_key_type("due=date"),
            Ok(("due".to_string(), SemanticType::Date))
        );
        assert!(parse_key_type("due=calendar").is_err());
    }
}
