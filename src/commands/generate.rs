use anyhow::{Context, Result, bail};

use super::default_schema;
use crate::{
    cli::{Emit, GenerateArgs},
    config::AppConfig,
    prompt::Prompter,
    services::EntityService,
};

/// Fully resolved generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateTarget {
    pub schema_name: String,
    pub table_name: String,
    pub entity_class_name: String,
}

pub async fn run<P: Prompter + ?Sized>(
    args: GenerateArgs,
    cfg: &AppConfig,
    service: &EntityService,
    prompt: Option<&mut P>,
) -> Result<String> {
    let emit = args.emit;
    let target = resolve_target(args, cfg, service, prompt).await?;

    match emit {
        Emit::Class => Ok(service
            .convert_table_to_entity_class(
                &target.schema_name,
                &target.table_name,
                &target.entity_class_name,
            )
            .await?),
        Emit::Properties => {
            let properties = service
                .entity_properties(&target.schema_name, &target.table_name)
                .await?;
            serde_json::to_string_pretty(&properties).context("failed to serialize properties")
        }
    }
}

/// Fills in missing flags, asking when a prompt is available.
pub async fn resolve_target<P: Prompter + ?Sized>(
    args: GenerateArgs,
    cfg: &AppConfig,
    service: &EntityService,
    mut prompt: Option<&mut P>,
) -> Result<GenerateTarget> {
    let schema_name = match (args.schema_name, prompt.as_deref_mut()) {
        (Some(schema), _) => schema,
        (None, Some(prompt)) => {
            let schemas = service.schema_names().await?;
            let default = default_schema(None, cfg, service).await?;
            let schema = prompt.ask_choice(
                "What is the schema (i.e. database) name where the table exists?",
                "schema-name",
                &schemas,
                default.as_deref(),
            )?;
            prompt.say(&format!("You chose: {schema}"))?;
            schema
        }
        (None, None) => match default_schema(None, cfg, service).await? {
            Some(schema) => schema,
            None => bail!("--schema-name is required in --non-interactive mode"),
        },
    };

    let table_name = match (args.table_name, prompt.as_deref_mut()) {
        (Some(table), _) => table,
        (None, Some(prompt)) => {
            let tables = service.table_names(&schema_name).await?;
            let table = prompt.ask_choice(
                "What is the name of the table to generate an entity for?",
                "table-name",
                &tables,
                None,
            )?;
            prompt.say(&format!("You selected table {table}"))?;
            table
        }
        (None, None) => bail!("--table-name is required in --non-interactive mode"),
    };

    let entity_class_name = match (args.entity_class_name, prompt.as_deref_mut()) {
        (Some(name), _) => name,
        (None, Some(prompt)) => prompt.ask_required(
            "What is the fully qualified name of the entity class to create?",
            "entity-class-name",
        )?,
        (None, None) => bail!("--entity-class-name is required in --non-interactive mode"),
    };

    Ok(GenerateTarget {
        schema_name,
        table_name,
        entity_class_name,
    })
}
