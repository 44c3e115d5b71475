mod mysql;
mod postgres;
mod registry;

use std::sync::Arc;

pub use registry::{CatalogQueries, DbProvider, DbProviderId, DbProviders};

use self::{mysql::MySqlDbProvider, postgres::PostgresDbProvider};

pub fn default_registry() -> anyhow::Result<DbProviders> {
    DbProviders::new()
        .with_provider(Arc::new(MySqlDbProvider))?
        .with_provider(Arc::new(PostgresDbProvider))
}
