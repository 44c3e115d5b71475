use serde::{Deserialize, Serialize};

use crate::error::{GenResult, GenerationError};

/// One table column as reported by the schema source.
///
/// Size fields are `None` when the source reported nothing for them; a reported
/// zero is kept as `Some(0)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    pub column_name: String,
    pub data_type: String,
    pub is_nullable: bool,
    pub character_maximum_length: Option<u32>,
    pub numeric_precision: Option<u32>,
    pub numeric_scale: Option<u32>,
}

impl ColumnDefinition {
    pub fn new(
        column_name: impl Into<String>,
        data_type: impl Into<String>,
        is_nullable: bool,
    ) -> Self {
        Self {
            column_name: column_name.into(),
            data_type: data_type.into(),
            is_nullable,
            character_maximum_length: None,
            numeric_precision: None,
            numeric_scale: None,
        }
    }

    pub fn with_max_length(mut self, length: Option<u32>) -> Self {
        self.character_maximum_length = length;
        self
    }

    pub fn with_numeric(mut self, precision: Option<u32>, scale: Option<u32>) -> Self {
        self.numeric_precision = precision;
        self.numeric_scale = scale;
        self
    }

    /// Rejects definitions whose required fields are missing.
    pub fn validate(&self) -> GenResult<()> {
        if self.column_name.is_empty() {
            return Err(GenerationError::invalid_column(
                "column_name",
                "must not be empty",
            ));
        }
        if self.data_type.trim().is_empty() {
            return Err(GenerationError::invalid_column(
                "data_type",
                format!("must not be empty (column '{}')", self.column_name),
            ));
        }
        Ok(())
    }
}
