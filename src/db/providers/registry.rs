use std::{collections::BTreeMap, sync::Arc};

use anyhow::{Result, anyhow, bail};
use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbBackend};

use crate::config::DatabaseConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DbProviderId {
    MySql,
    Postgres,
}

impl DbProviderId {
    pub fn as_str(self) -> &'static str {
        match self {
            DbProviderId::MySql => "mysql",
            DbProviderId::Postgres => "postgres",
        }
    }
}

/// Catalog SQL for one backend. Every query selects its values under the
/// lower-case aliases read by the introspector.
#[derive(Debug, Clone, Copy)]
pub struct CatalogQueries {
    pub backend: DbBackend,
    /// Binds schema then table; one row per column in ordinal order.
    pub columns: &'static str,
    pub schemas: &'static str,
    pub current_schema: &'static str,
    /// Binds schema.
    pub tables: &'static str,
}

#[async_trait]
pub trait DbProvider: Send + Sync {
    fn id(&self) -> DbProviderId;
    /// Lower-case URL schemes this provider connects with.
    fn schemes(&self) -> &'static [&'static str];
    fn catalog(&self) -> &'static CatalogQueries;
    async fn connect(&self, cfg: &DatabaseConfig) -> Result<DatabaseConnection>;
}

/// Providers keyed by the URL scheme they accept.
#[derive(Default)]
pub struct DbProviders {
    by_scheme: BTreeMap<&'static str, Arc<dyn DbProvider>>,
}

impl DbProviders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `provider` for each of its schemes. A scheme can only have
    /// one provider.
    pub fn with_provider(mut self, provider: Arc<dyn DbProvider>) -> Result<Self> {
        for scheme in provider.schemes() {
            if let Some(existing) = self.by_scheme.get(scheme) {
                bail!(
                    "url scheme '{scheme}' is already handled by the {} provider",
                    existing.id().as_str()
                );
            }
            self.by_scheme.insert(*scheme, provider.clone());
        }
        Ok(self)
    }

    pub fn provider_for_url(&self, url: &str) -> Result<Arc<dyn DbProvider>> {
        url_scheme(url)
            .and_then(|scheme| self.by_scheme.get(scheme.as_str()))
            .cloned()
            .ok_or_else(|| {
                let expected: Vec<String> =
                    self.by_scheme.keys().map(|scheme| format!("{scheme}://")).collect();
                anyhow!(
                    "unsupported database url '{}'; expected one of: {}",
                    redact_url(url),
                    expected.join(", ")
                )
            })
    }
}

fn url_scheme(url: &str) -> Option<String> {
    url.trim()
        .split_once("://")
        .map(|(scheme, _)| scheme.to_ascii_lowercase())
}

/// Keeps only the scheme so credentials never reach logs or errors.
pub(crate) fn redact_url(url: &str) -> String {
    match url.trim().split_once(':') {
        Some((scheme, rest)) if rest.starts_with("//") => format!("{scheme}://<redacted>"),
        Some((scheme, _)) => format!("{scheme}:<redacted>"),
        None => "<invalid-url>".to_string(),
    }
}
