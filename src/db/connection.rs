use anyhow::Context;
use tracing::info;

use super::{introspection::InformationSchemaIntrospector, providers::default_registry};
use crate::config::DatabaseConfig;

pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<InformationSchemaIntrospector> {
    let providers = default_registry()?;
    let provider = providers.provider_for_url(&cfg.url)?;

    let db = provider
        .connect(cfg)
        .await
        .with_context(|| format!("failed to connect to {} database", provider.id().as_str()))?;
    info!(backend = provider.id().as_str(), "connected to schema source");

    Ok(InformationSchemaIntrospector::new(db, provider.catalog()))
}
