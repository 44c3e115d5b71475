//! Column type classification.
//!
//! Raw type descriptors are matched against [`TYPE_RULES`] in order and the
//! first hit wins. Order matters: `tinyint(1)` must be seen before the integer
//! rules, and the character/text rules before any integer rule.

use crate::model::{PropertyType, StorageType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeMatcher {
    /// Lower-cased descriptor contains any of the needles.
    Contains(&'static [&'static str]),
    /// Lower-cased descriptor equals one of the values.
    Exactly(&'static [&'static str]),
}

impl TypeMatcher {
    pub fn matches(&self, data_type: &str) -> bool {
        match self {
            TypeMatcher::Contains(needles) => needles.iter().any(|n| data_type.contains(n)),
            TypeMatcher::Exactly(values) => values.iter().any(|v| data_type == *v),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeRule {
    pub matcher: TypeMatcher,
    pub property_type: PropertyType,
    pub storage_type: StorageType,
    /// Pass the column's maximum length through to the mapping.
    pub keeps_length: bool,
}

const fn rule(
    matcher: TypeMatcher,
    property_type: PropertyType,
    storage_type: StorageType,
) -> TypeRule {
    TypeRule {
        matcher,
        property_type,
        storage_type,
        keeps_length: false,
    }
}

const fn with_length(rule: TypeRule) -> TypeRule {
    TypeRule {
        keeps_length: true,
        ..rule
    }
}

pub const TYPE_RULES: &[TypeRule] = &[
    rule(
        TypeMatcher::Contains(&["tinyint(1)"]),
        PropertyType::Bool,
        StorageType::Boolean,
    ),
    with_length(rule(
        TypeMatcher::Contains(&["varchar", "char"]),
        PropertyType::String,
        StorageType::String,
    )),
    rule(
        TypeMatcher::Contains(&["enum"]),
        PropertyType::String,
        StorageType::String,
    ),
    // text, longtext, mediumtext, ...
    rule(
        TypeMatcher::Contains(&["text"]),
        PropertyType::String,
        StorageType::Text,
    ),
    rule(
        TypeMatcher::Contains(&["tinyint", "smallint"]),
        PropertyType::Int,
        StorageType::SmallInt,
    ),
    rule(
        TypeMatcher::Contains(&["mediumint", "bigint"]),
        PropertyType::Int,
        StorageType::BigInt,
    ),
    rule(
        TypeMatcher::Contains(&["int"]),
        PropertyType::Int,
        StorageType::Integer,
    ),
    rule(
        TypeMatcher::Contains(&["float", "decimal"]),
        PropertyType::Float,
        StorageType::Decimal,
    ),
    rule(
        TypeMatcher::Exactly(&["datetime", "date"]),
        PropertyType::DateTime,
        StorageType::DateTime,
    ),
];

pub const DEFAULT_PROPERTY_TYPE: PropertyType = PropertyType::String;
pub const DEFAULT_STORAGE_TYPE: StorageType = StorageType::String;

/// Result of classifying one raw column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMapping {
    pub property_type: PropertyType,
    pub storage_type: StorageType,
    pub length: Option<u32>,
    pub precision: Option<u32>,
    pub scale: Option<u32>,
}

/// Index into [`TYPE_RULES`] of the first rule matching `data_type`.
pub fn matching_rule(data_type: &str) -> Option<usize> {
    let lowered = data_type.to_lowercase();
    TYPE_RULES
        .iter()
        .position(|rule| rule.matcher.matches(&lowered))
}

/// Maps a raw type descriptor and its size constraints to property/storage types.
///
/// Unknown descriptors fall back to `string`/`string` without constraints.
/// `length` survives only for `string` storage and `precision`/`scale` only for
/// `decimal`; everything else comes back `None` whatever the caller passed.
pub fn classify(
    data_type: &str,
    max_length: Option<u32>,
    precision: Option<u32>,
    scale: Option<u32>,
) -> TypeMapping {
    let (property_type, storage_type, length) = match matching_rule(data_type) {
        Some(index) => {
            let rule = &TYPE_RULES[index];
            let length = if rule.keeps_length && rule.storage_type.carries_length() {
                max_length
            } else {
                None
            };
            (rule.property_type, rule.storage_type, length)
        }
        None => (DEFAULT_PROPERTY_TYPE, DEFAULT_STORAGE_TYPE, None),
    };

    let (precision, scale) = if storage_type.carries_precision() {
        (precision, scale)
    } else {
        (None, None)
    };

    TypeMapping {
        property_type,
        storage_type,
        length,
        precision,
        scale,
    }
}
