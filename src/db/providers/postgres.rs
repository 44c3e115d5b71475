use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbBackend};

use super::registry::{CatalogQueries, DbProvider, DbProviderId};
use crate::config::DatabaseConfig;

static POSTGRES_CATALOG: CatalogQueries = CatalogQueries {
    backend: DbBackend::Postgres,
    columns: "SELECT column_name::text AS column_name, \
                     data_type::text AS column_type, \
                     is_nullable::text AS is_nullable, \
                     character_maximum_length::bigint AS character_maximum_length, \
                     numeric_precision::bigint AS numeric_precision, \
                     numeric_scale::bigint AS numeric_scale \
              FROM information_schema.columns \
              WHERE table_schema = $1 AND table_name = $2 \
              ORDER BY ordinal_position",
    schemas: "SELECT schema_name::text AS name FROM information_schema.schemata \
              WHERE schema_name NOT IN ('pg_catalog', 'information_schema') \
              AND schema_name !~ '^pg_toast' \
              AND schema_name !~ '^pg_temp' \
              ORDER BY schema_name",
    current_schema: "SELECT current_schema()::text AS name",
    tables: "SELECT table_name::text AS name FROM information_schema.tables \
             WHERE table_schema = $1 ORDER BY table_name",
};

pub struct PostgresDbProvider;

#[async_trait]
impl DbProvider for PostgresDbProvider {
    fn id(&self) -> DbProviderId {
        DbProviderId::Postgres
    }

    fn schemes(&self) -> &'static [&'static str] {
        &["postgres", "postgresql"]
    }

    fn catalog(&self) -> &'static CatalogQueries {
        &POSTGRES_CATALOG
    }

    async fn connect(&self, cfg: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut options = ConnectOptions::new(cfg.url.clone());
        options
            .max_connections(cfg.max_connections)
            .min_connections(cfg.min_idle)
            .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
            .sqlx_logging(false);

        let db = Database::connect(options).await?;
        Ok(db)
    }
}

#[cfg(test)]
mod tests {
    use super::PostgresDbProvider;
    use crate::db::providers::DbProvider;

    #[test]
    fn schema_listing_skips_system_schemas() {
        let catalog = PostgresDbProvider.catalog();
        assert!(catalog.schemas.contains("'pg_catalog', 'information_schema'"));
        assert!(catalog.columns.contains("$1") && catalog.columns.contains("$2"));
    }
}
