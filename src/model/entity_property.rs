use std::fmt;

use serde::{Deserialize, Serialize};

/// Type token assigned to the generated class field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Bool,
    Int,
    Float,
    String,
    DateTime,
}

impl PropertyType {
    pub fn as_str(self) -> &'static str {
        match self {
            PropertyType::Bool => "bool",
            PropertyType::Int => "int",
            PropertyType::Float => "float",
            PropertyType::String => "string",
            PropertyType::DateTime => "datetime",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical mapping-layer type token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageType {
    Boolean,
    SmallInt,
    BigInt,
    Integer,
    String,
    Text,
    Decimal,
    DateTime,
}

impl StorageType {
    pub fn as_str(self) -> &'static str {
        match self {
            StorageType::Boolean => "boolean",
            StorageType::SmallInt => "smallint",
            StorageType::BigInt => "bigint",
            StorageType::Integer => "integer",
            StorageType::String => "string",
            StorageType::Text => "text",
            StorageType::Decimal => "decimal",
            StorageType::DateTime => "datetime",
        }
    }

    pub fn carries_length(self) -> bool {
        self == StorageType::String
    }

    pub fn carries_precision(self) -> bool {
        self == StorageType::Decimal
    }
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One property of the generated entity class.
///
/// `length` is only ever set for [`StorageType::String`], `precision`/`scale`
/// only for [`StorageType::Decimal`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityProperty {
    pub name: String,
    pub column_name: String,
    pub property_type: PropertyType,
    pub storage_type: StorageType,
    pub length: Option<u32>,
    pub precision: Option<u32>,
    pub scale: Option<u32>,
    pub nullable: bool,
}
