use async_trait::async_trait;
use sea_orm::{DatabaseConnection, FromQueryResult, Statement, Value};

use super::providers::CatalogQueries;
use crate::{
    error::{GenResult, GenerationError},
    model::ColumnDefinition,
};

/// Source of table metadata for entity generation.
#[async_trait]
pub trait SchemaIntrospector: Send + Sync {
    /// Columns of `schema.table` in ordinal order. A table without columns is
    /// reported as [`GenerationError::TableNotFound`].
    async fn column_definitions(
        &self,
        schema: &str,
        table: &str,
    ) -> GenResult<Vec<ColumnDefinition>>;
    async fn schema_names(&self) -> GenResult<Vec<String>>;
    async fn current_schema(&self) -> GenResult<Option<String>>;
    async fn table_names(&self, schema: &str) -> GenResult<Vec<String>>;
}

/// Raw `information_schema` row, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromQueryResult)]
pub struct ColumnRecord {
    pub column_name: Option<String>,
    pub column_type: Option<String>,
    pub is_nullable: Option<String>,
    pub character_maximum_length: Option<i64>,
    pub numeric_precision: Option<i64>,
    pub numeric_scale: Option<i64>,
}

impl TryFrom<ColumnRecord> for ColumnDefinition {
    type Error = GenerationError;

    fn try_from(record: ColumnRecord) -> GenResult<Self> {
        let column_name = record
            .column_name
            .ok_or_else(|| GenerationError::invalid_column("column_name", "is missing"))?;
        let data_type = record.column_type.ok_or_else(|| {
            GenerationError::invalid_column(
                "data_type",
                format!("is missing (column '{column_name}')"),
            )
        })?;
        let is_nullable = record.is_nullable.ok_or_else(|| {
            GenerationError::invalid_column(
                "is_nullable",
                format!("is missing (column '{column_name}')"),
            )
        })?;

        let definition = ColumnDefinition::new(
            column_name,
            data_type,
            is_nullable.eq_ignore_ascii_case("YES"),
        )
        .with_max_length(size_value("character_maximum_length", record.character_maximum_length)?)
        .with_numeric(
            size_value("numeric_precision", record.numeric_precision)?,
            size_value("numeric_scale", record.numeric_scale)?,
        );
        definition.validate()?;
        Ok(definition)
    }
}

fn size_value(field: &'static str, value: Option<i64>) -> GenResult<Option<u32>> {
    value
        .map(|raw| {
            u32::try_from(raw)
                .map_err(|_| GenerationError::invalid_column(field, format!("{raw} is out of range")))
        })
        .transpose()
}

#[derive(Debug, FromQueryResult)]
struct NameRow {
    name: Option<String>,
}

/// Reads metadata through the `information_schema` views of the connected
/// backend.
#[derive(Clone)]
pub struct InformationSchemaIntrospector {
    db: DatabaseConnection,
    catalog: &'static CatalogQueries,
}

impl InformationSchemaIntrospector {
    pub fn new(db: DatabaseConnection, catalog: &'static CatalogQueries) -> Self {
        Self { db, catalog }
    }

    fn statement(&self, sql: &str, values: Vec<Value>) -> Statement {
        Statement::from_sql_and_values(self.catalog.backend, sql, values)
    }

    async fn names(&self, stmt: Statement) -> GenResult<Vec<String>> {
        let rows = NameRow::find_by_statement(stmt).all(&self.db).await?;
        Ok(rows.into_iter().filter_map(|row| row.name).collect())
    }
}

#[async_trait]
impl SchemaIntrospector for InformationSchemaIntrospector {
    async fn column_definitions(
        &self,
        schema: &str,
        table: &str,
    ) -> GenResult<Vec<ColumnDefinition>> {
        let stmt = self.statement(
            self.catalog.columns,
            vec![schema.into(), table.into()],
        );
        let records = ColumnRecord::find_by_statement(stmt).all(&self.db).await?;
        tracing::debug!(schema, table, columns = records.len(), "fetched column metadata");

        if records.is_empty() {
            return Err(GenerationError::table_not_found(schema, table));
        }
        records.into_iter().map(ColumnDefinition::try_from).collect()
    }

    async fn schema_names(&self) -> GenResult<Vec<String>> {
        self.names(self.statement(self.catalog.schemas, Vec::new()))
            .await
    }

    async fn current_schema(&self) -> GenResult<Option<String>> {
        let names = self
            .names(self.statement(self.catalog.current_schema, Vec::new()))
            .await?;
        Ok(names.into_iter().next())
    }

    async fn table_names(&self, schema: &str) -> GenResult<Vec<String>> {
        self.names(self.statement(self.catalog.tables, vec![schema.into()]))
            .await
    }
}
