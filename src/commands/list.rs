use anyhow::{Result, bail};

use super::default_schema;
use crate::{cli::TablesArgs, config::AppConfig, services::EntityService};

pub async fn schemas(service: &EntityService) -> Result<String> {
    let names = service.schema_names().await?;
    let current = service.current_schema().await?;

    let lines: Vec<String> = names
        .into_iter()
        .map(|name| {
            if current.as_deref() == Some(name.as_str()) {
                format!("* {name}")
            } else {
                format!("  {name}")
            }
        })
        .collect();
    Ok(lines.join("\n"))
}

pub async fn tables(args: TablesArgs, cfg: &AppConfig, service: &EntityService) -> Result<String> {
    let Some(schema) = default_schema(args.schema_name, cfg, service).await? else {
        bail!("no schema selected; pass --schema-name");
    };
    let names = service.table_names(&schema).await?;
    Ok(names.join("\n"))
}
