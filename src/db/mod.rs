pub mod connection;
pub mod introspection;
pub mod providers;

pub use introspection::{ColumnRecord, InformationSchemaIntrospector, SchemaIntrospector};
