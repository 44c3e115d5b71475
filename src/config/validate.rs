use anyhow::{Result, bail};

use super::{AppConfig, DatabaseConfig};

pub fn validate(cfg: &AppConfig) -> Result<()> {
    let mut errors: Vec<String> = Vec::new();

    if cfg.logging.rust_log.trim().is_empty() {
        errors.push("logging.rust_log must not be empty".to_string());
    }

    if let Some(database) = cfg.database.as_ref() {
        database_errors(database, &mut errors);
    }

    if let Some(schema) = cfg.generator.default_schema.as_ref() {
        if schema.trim().is_empty() {
            errors.push("generator.default_schema must not be blank when set".to_string());
        }
    }

    finish(errors)
}

pub fn validate_database(database: &DatabaseConfig) -> Result<()> {
    let mut errors = Vec::new();
    database_errors(database, &mut errors);
    finish(errors)
}

fn database_errors(database: &DatabaseConfig, errors: &mut Vec<String>) {
    if database.url.trim().is_empty() {
        errors.push("database.url must not be empty".to_string());
    }

    if database.max_connections == 0 {
        errors.push("database.max_connections must be > 0".to_string());
    }

    if database.min_idle > database.max_connections {
        errors.push(format!(
            "database.min_idle ({}) must be <= database.max_connections ({})",
            database.min_idle, database.max_connections
        ));
    }

    if database.connect_timeout_secs == 0 {
        errors.push("database.connect_timeout_secs must be > 0".to_string());
    }
}

fn finish(errors: Vec<String>) -> Result<()> {
    if errors.is_empty() {
        return Ok(());
    }

    bail!("invalid app config:\n- {}", errors.join("\n- "))
}
