use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "entity-gen", author, version, about = "Generate an entity class from a table definition")]
pub struct Cli {
    /// Database URL (overrides ENTITY_GEN_DATABASE__URL and DATABASE_URL)
    #[arg(long, global = true)]
    pub database_url: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the code for an entity class for the specified table
    Generate(GenerateArgs),
    /// List the schemas (databases) visible to the connection
    Schemas,
    /// List the tables of a schema
    Tables(TablesArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct GenerateArgs {
    /// Schema (database) where the table exists
    #[arg(long)]
    pub schema_name: Option<String>,
    /// Generate an entity class for this table
    #[arg(long)]
    pub table_name: Option<String>,
    /// Name of the entity class to create, optionally namespaced
    #[arg(long)]
    pub entity_class_name: Option<String>,
    /// What to write to stdout
    #[arg(long, value_enum, default_value_t = Emit::Class)]
    pub emit: Emit,
    /// Disable interactive prompts
    #[arg(long)]
    pub non_interactive: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct TablesArgs {
    /// Schema to list (defaults to the configured or current schema)
    #[arg(long)]
    pub schema_name: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emit {
    /// Rendered entity class source
    Class,
    /// Mapped properties as JSON
    Properties,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Commands, Emit};

    #[test]
    fn parses_generate_flags() {
        let cli = Cli::try_parse_from([
            "entity-gen",
            "generate",
            "--schema-name",
            "shop",
            "--table-name",
            "user_account",
            "--entity-class-name",
            "App\\Entity\\UserAccount",
            "--database-url",
            "mysql://root@localhost/shop",
        ])
        .expect("flags should parse");

        assert_eq!(cli.database_url.as_deref(), Some("mysql://root@localhost/shop"));
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate command");
        };
        assert_eq!(args.schema_name.as_deref(), Some("shop"));
        assert_eq!(args.table_name.as_deref(), Some("user_account"));
        assert_eq!(args.entity_class_name.as_deref(), Some("App\\Entity\\UserAccount"));
        assert_eq!(args.emit, Emit::Class);
        assert!(!args.non_interactive);
    }

    #[test]
    fn parses_emit_properties() {
        let cli = Cli::try_parse_from(["entity-gen", "generate", "--emit", "properties", "--non-interactive"])
            .expect("flags should parse");

        let Commands::Generate(args) = cli.command else {
            panic!("expected generate command");
        };
        assert_eq!(args.emit, Emit::Properties);
        assert!(args.non_interactive);
    }

    #[test]
    fn requires_a_subcommand() {
        assert!(Cli::try_parse_from(["entity-gen"]).is_err());
    }
}
