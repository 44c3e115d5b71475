use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid column definition: {field} {reason}")]
    InvalidColumn { field: &'static str, reason: String },
    #[error("table '{table}' not found in schema '{schema}'")]
    TableNotFound { schema: String, table: String },
    #[error("invalid entity class name '{0}'")]
    InvalidClassName(String),
    #[error("database error: {0}")]
    Database(#[from] DbErr),
    #[error("failed to render entity class: {0}")]
    Render(#[from] askama::Error),
}

impl GenerationError {
    pub fn invalid_column(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidColumn {
            field,
            reason: reason.into(),
        }
    }

    pub fn table_not_found(schema: impl Into<String>, table: impl Into<String>) -> Self {
        Self::TableNotFound {
            schema: schema.into(),
            table: table.into(),
        }
    }
}

pub type GenResult<T> = Result<T, GenerationError>;
