pub mod entity_service;
pub mod generation;

pub use entity_service::EntityService;
pub use generation::{generate, map_column};
