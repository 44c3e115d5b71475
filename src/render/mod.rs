mod doctrine;

pub use doctrine::DoctrineEntityRenderer;

use crate::{error::GenResult, model::EntityProperty};

/// Everything the template needs for one entity class.
#[derive(Debug, Clone, Copy)]
pub struct RenderRequest<'a> {
    pub entity_class_name: &'a str,
    pub table_name: &'a str,
    pub properties: &'a [EntityProperty],
}

pub trait EntityRenderer: Send + Sync {
    fn render(&self, request: &RenderRequest<'_>) -> GenResult<String>;
}
