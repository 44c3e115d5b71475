use crate::{
    error::GenResult,
    model::{ColumnDefinition, EntityProperty},
    naming::normalize_column_name,
    type_mapping::classify,
};

/// Builds the property for one column.
pub fn map_column(column: &ColumnDefinition) -> GenResult<EntityProperty> {
    column.validate()?;

    let mapping = classify(
        &column.data_type,
        column.character_maximum_length,
        column.numeric_precision,
        column.numeric_scale,
    );

    Ok(EntityProperty {
        name: normalize_column_name(&column.column_name),
        column_name: column.column_name.clone(),
        property_type: mapping.property_type,
        storage_type: mapping.storage_type,
        length: mapping.length,
        precision: mapping.precision,
        scale: mapping.scale,
        nullable: column.is_nullable,
    })
}

/// Maps every column, in order. Fails on the first malformed column and
/// returns no partial list.
pub fn generate(columns: &[ColumnDefinition]) -> GenResult<Vec<EntityProperty>> {
    columns.iter().map(map_column).collect()
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, thread};

    use super::{generate, map_column};
    use crate::{
        error::GenerationError,
        model::{ColumnDefinition, EntityProperty, PropertyType, StorageType},
    };

    fn sample_columns() -> Vec<ColumnDefinition> {
        vec![
            ColumnDefinition::new("id", "int(10) unsigned", false).with_numeric(Some(10), Some(0)),
            ColumnDefinition::new("user_name", "VARCHAR(20)", false).with_max_length(Some(20)),
            ColumnDefinition::new(" retail_price", "DECIMAL(4,2)", true).with_numeric(Some(4), Some(2)),
            ColumnDefinition::new("is_active", "tinyint(1)", false),
            ColumnDefinition::new("created_date", "DATETIME", true),
        ]
    }

    #[test]
    fn maps_datetime_column_end_to_end() {
        let property = map_column(&ColumnDefinition::new("created_date", "DATETIME", true))
            .expect("column should map");

        assert_eq!(
            property,
            EntityProperty {
                name: "createdDate".to_string(),
                column_name: "created_date".to_string(),
                property_type: PropertyType::DateTime,
                storage_type: StorageType::DateTime,
                length: None,
                precision: None,
                scale: None,
                nullable: true,
            }
        );
    }

    #[test]
    fn maps_leading_space_decimal_column() {
        let column = ColumnDefinition::new(" retail_price", "DECIMAL(4,2)", false)
            .with_max_length(Some(6))
            .with_numeric(Some(4), Some(2));
        let property = map_column(&column).expect("column should map");

        assert_eq!(property.name, "_retailPrice");
        assert_eq!(property.column_name, " retail_price");
        assert_eq!(property.property_type, PropertyType::Float);
        assert_eq!(property.storage_type, StorageType::Decimal);
        assert_eq!(property.length, None);
        assert_eq!((property.precision, property.scale), (Some(4), Some(2)));
        assert!(!property.nullable);
    }

    #[test]
    fn keeps_input_order_and_copies_passthrough_fields() {
        let columns = sample_columns();
        let properties = generate(&columns).expect("columns should map");

        assert_eq!(properties.len(), columns.len());
        for (column, property) in columns.iter().zip(&properties) {
            assert_eq!(property.column_name, column.column_name);
            assert_eq!(property.nullable, column.is_nullable);
        }
        let names: Vec<_> = properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            ["id", "userName", "_retailPrice", "isActive", "createdDate"]
        );
        assert_eq!(properties[1].length, Some(20));
        assert_eq!(properties[0].precision, None);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let properties = generate(&[]).expect("empty input should map");
        assert!(properties.is_empty());
    }

    #[test]
    fn malformed_column_aborts_whole_generation() {
        let mut columns = sample_columns();
        columns.insert(2, ColumnDefinition::new("broken", "", true));

        let err = generate(&columns).expect_err("blank data type should fail");
        assert!(matches!(
            err,
            GenerationError::InvalidColumn { field: "data_type", .. }
        ));
    }

    #[test]
    fn repeated_calls_do_not_accumulate() {
        let columns = sample_columns();
        let first = generate(&columns).expect("first call should map");
        let second = generate(&columns).expect("second call should map");

        assert_eq!(first, second);
        assert_eq!(second.len(), columns.len());
    }

    #[test]
    fn concurrent_calls_produce_identical_results() {
        let columns = Arc::new(sample_columns());
        let expected = generate(&columns).expect("columns should map");

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let columns = Arc::clone(&columns);
                thread::spawn(move || generate(&columns).expect("columns should map"))
            })
            .collect();

        for handle in handles {
            let properties = handle.join().expect("worker should not panic");
            assert_eq!(properties, expected);
        }
    }
}
