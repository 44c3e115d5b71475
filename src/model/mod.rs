pub mod column_definition;
pub mod entity_property;

pub use column_definition::ColumnDefinition;
pub use entity_property::{EntityProperty, PropertyType, StorageType};
