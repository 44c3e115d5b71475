use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbBackend};

use super::registry::{CatalogQueries, DbProvider, DbProviderId};
use crate::config::DatabaseConfig;

// Size columns are unsigned in MySQL; cast so they decode as i64.
static MYSQL_CATALOG: CatalogQueries = CatalogQueries {
    backend: DbBackend::MySql,
    columns: "SELECT COLUMN_NAME AS column_name, \
                     COLUMN_TYPE AS column_type, \
                     IS_NULLABLE AS is_nullable, \
                     CAST(CHARACTER_MAXIMUM_LENGTH AS SIGNED) AS character_maximum_length, \
                     CAST(NUMERIC_PRECISION AS SIGNED) AS numeric_precision, \
                     CAST(NUMERIC_SCALE AS SIGNED) AS numeric_scale \
              FROM INFORMATION_SCHEMA.COLUMNS \
              WHERE TABLE_SCHEMA = ? AND TABLE_NAME = ? \
              ORDER BY ORDINAL_POSITION",
    schemas: "SELECT SCHEMA_NAME AS name FROM INFORMATION_SCHEMA.SCHEMATA ORDER BY SCHEMA_NAME",
    current_schema: "SELECT DATABASE() AS name",
    tables: "SELECT TABLE_NAME AS name FROM INFORMATION_SCHEMA.TABLES \
             WHERE TABLE_SCHEMA = ? ORDER BY TABLE_NAME",
};

pub struct MySqlDbProvider;

#[async_trait]
impl DbProvider for MySqlDbProvider {
    fn id(&self) -> DbProviderId {
        DbProviderId::MySql
    }

    fn schemes(&self) -> &'static [&'static str] {
        &["mysql", "mariadb"]
    }

    fn catalog(&self) -> &'static CatalogQueries {
        &MYSQL_CATALOG
    }

    async fn connect(&self, cfg: &DatabaseConfig) -> Result<DatabaseConnection> {
        // sqlx only understands the mysql scheme
        let url = match cfg.url.trim().split_once("://") {
            Some((scheme, rest)) if scheme.eq_ignore_ascii_case("mariadb") => {
                format!("mysql://{rest}")
            }
            _ => cfg.url.clone(),
        };

        let mut options = ConnectOptions::new(url);
        options
            .max_connections(cfg.max_connections)
            .min_connections(cfg.min_idle)
            .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
            .sqlx_logging(false);

        let db = Database::connect(options).await?;
        Ok(db)
    }
}
