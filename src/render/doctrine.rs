use askama::Template;

use super::{EntityRenderer, RenderRequest};
use crate::{
    error::{GenResult, GenerationError},
    model::{EntityProperty, PropertyType},
};

#[derive(Template)]
#[template(path = "entity.php.jinja", escape = "none")]
struct EntityClassTemplate<'a> {
    namespace: &'a str,
    class_name: &'a str,
    table_name: String,
    properties: Vec<PropertyView>,
}

struct PropertyView {
    name: String,
    accessor: String,
    type_hint: String,
    doc_type: String,
    column_attributes: String,
}

impl PropertyView {
    fn from_property(property: &EntityProperty) -> Self {
        let base_type = php_type(property.property_type);
        let (type_hint, doc_type) = if property.nullable {
            (format!("?{base_type}"), format!("{base_type}|null"))
        } else {
            (base_type.to_string(), base_type.to_string())
        };

        Self {
            name: property.name.clone(),
            accessor: upper_first(&property.name),
            type_hint,
            doc_type,
            column_attributes: column_attributes(property),
        }
    }
}

/// Renders Doctrine-annotated PHP entity classes.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoctrineEntityRenderer;

impl DoctrineEntityRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl EntityRenderer for DoctrineEntityRenderer {
    fn render(&self, request: &RenderRequest<'_>) -> GenResult<String> {
        let (namespace, class_name) = split_class_name(request.entity_class_name)?;
        let template = EntityClassTemplate {
            namespace,
            class_name,
            table_name: escape_annotation(request.table_name),
            properties: request
                .properties
                .iter()
                .map(PropertyView::from_property)
                .collect(),
        };
        Ok(template.render()?)
    }
}

fn php_type(property_type: PropertyType) -> &'static str {
    match property_type {
        PropertyType::Bool => "bool",
        PropertyType::Int => "int",
        PropertyType::Float => "float",
        PropertyType::String => "string",
        PropertyType::DateTime => "\\DateTime",
    }
}

fn column_attributes(property: &EntityProperty) -> String {
    let mut attributes = vec![
        format!("name=\"{}\"", escape_annotation(&property.column_name)),
        format!("type=\"{}\"", property.storage_type),
    ];
    if let Some(length) = property.length {
        attributes.push(format!("length={length}"));
    }
    if let Some(precision) = property.precision {
        attributes.push(format!("precision={precision}"));
    }
    if let Some(scale) = property.scale {
        attributes.push(format!("scale={scale}"));
    }
    attributes.push(format!("nullable={}", property.nullable));
    attributes.join(", ")
}

// Annotation strings escape a double quote by doubling it.
fn escape_annotation(input: &str) -> String {
    input.replace('"', "\"\"")
}

fn upper_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Splits `App\Entity\User` into (`App\Entity`, `User`).
fn split_class_name(input: &str) -> GenResult<(&str, &str)> {
    let trimmed = input.trim().trim_start_matches('\\');
    let (namespace, class_name) = match trimmed.rsplit_once('\\') {
        Some((namespace, class_name)) => (namespace, class_name),
        None => ("", trimmed),
    };

    let valid = !class_name.is_empty()
        && trimmed.split('\\').all(is_php_identifier);
    if !valid {
        return Err(GenerationError::InvalidClassName(input.to_string()));
    }
    Ok((namespace, class_name))
}

fn is_php_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}
