use std::sync::Arc;

use tracing::{debug, info};

use super::generation::generate;
use crate::{
    db::SchemaIntrospector,
    error::GenResult,
    model::{ColumnDefinition, EntityProperty},
    render::{EntityRenderer, RenderRequest},
    type_mapping::matching_rule,
};

/// Turns one table into entity class source: fetch columns, map them, render.
#[derive(Clone)]
pub struct EntityService {
    introspector: Arc<dyn SchemaIntrospector>,
    renderer: Arc<dyn EntityRenderer>,
}

impl EntityService {
    pub fn new(
        introspector: Arc<dyn SchemaIntrospector>,
        renderer: Arc<dyn EntityRenderer>,
    ) -> Self {
        Self {
            introspector,
            renderer,
        }
    }

    pub async fn entity_properties(
        &self,
        schema: &str,
        table: &str,
    ) -> GenResult<Vec<EntityProperty>> {
        let columns = self.introspector.column_definitions(schema, table).await?;
        log_fallbacks(table, &columns);

        let properties = generate(&columns)?;
        for property in &properties {
            debug!(
                column = %property.column_name,
                property = %property.name,
                storage_type = %property.storage_type,
                "mapped column"
            );
        }
        Ok(properties)
    }

    pub async fn convert_table_to_entity_class(
        &self,
        schema: &str,
        table: &str,
        entity_class_name: &str,
    ) -> GenResult<String> {
        info!(schema, table, entity = entity_class_name, "generating entity class");
        let properties = self.entity_properties(schema, table).await?;

        let code = self.renderer.render(&RenderRequest {
            entity_class_name,
            table_name: table,
            properties: &properties,
        })?;
        info!(table, properties = properties.len(), "entity class generated");
        Ok(code)
    }

    pub async fn schema_names(&self) -> GenResult<Vec<String>> {
        self.introspector.schema_names().await
    }

    pub async fn current_schema(&self) -> GenResult<Option<String>> {
        self.introspector.current_schema().await
    }

    pub async fn table_names(&self, schema: &str) -> GenResult<Vec<String>> {
        self.introspector.table_names(schema).await
    }
}

fn log_fallbacks(table: &str, columns: &[ColumnDefinition]) {
    for column in columns {
        if matching_rule(&column.data_type).is_none() {
            debug!(
                table,
                column = %column.column_name,
                data_type = %column.data_type,
                "unrecognized column type, mapping to string"
            );
        }
    }
}
