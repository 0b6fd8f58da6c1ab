use serde_json::Value;

use crate::error::IntrospectionError;

use super::label::humanize_label;
use super::schema::{FieldSpec, SemanticType};

const MAX_REF_DEPTH: usize = 8;

/// Assigns a semantic type to a field schema. First match wins, widest
/// family first; anything unrecognized falls back to free text.
pub fn classify(schema: &Value) -> SemanticType {
    match read_type(schema) {
        Some("boolean") => SemanticType::Boolean,
        Some("integer") => SemanticType::Integer,
        Some("number") => SemanticType::Number,
        Some("string") => match schema.get("format").and_then(Value::as_str) {
            Some("date") => SemanticType::Date,
            Some("date-time") | Some("partial-date-time") => SemanticType::DateTime,
            _ => SemanticType::Text,
        },
        Some("array") => SemanticType::Collection,
        _ => SemanticType::Text,
    }
}

/// Walks the class description's properties in declaration order and
/// produces one [`FieldSpec`] per declared field.
pub(crate) fn extract_fields(root: &Value) -> Result<Vec<FieldSpec>, IntrospectionError> {
    let Some(properties) = root.get("properties").and_then(Value::as_object) else {
        return Err(IntrospectionError::NotAnObjectSchema);
    };
    let required = root
        .get("required")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_str).collect::<Vec<_>>())
        .unwrap_or_default();

    let mut fields = Vec::with_capacity(properties.len());
    for (declared_order, (name, property)) in properties.iter().enumerate() {
        let resolved = resolve(root, name, property)?;
        fields.push(FieldSpec {
            name: name.clone(),
            label: humanize_label(name),
            semantic: classify(resolved),
            declared_order,
            required: required.iter().any(|field| field == name),
        });
    }
    Ok(fields)
}

fn resolve<'a>(
    root: &'a Value,
    field: &str,
    schema: &'a Value,
) -> Result<&'a Value, IntrospectionError> {
    let mut current = schema;
    for _ in 0..MAX_REF_DEPTH {
        if !current.is_object() {
            return Err(IntrospectionError::unreadable(field));
        }
        let Some(reference) = current.get("$ref").and_then(Value::as_str) else {
            return Ok(current);
        };
        current = lookup_reference(root, reference).ok_or_else(|| {
            IntrospectionError::UnresolvedReference {
                field: field.to_string(),
                reference: reference.to_string(),
            }
        })?;
    }
    Err(IntrospectionError::unreadable(field))
}

fn lookup_reference<'a>(root: &'a Value, reference: &str) -> Option<&'a Value> {
    let pointer = reference.strip_prefix('#')?;
    root.pointer(pointer)
}

/// Reads the schema's `type`, skipping the `null` member of nullable unions.
fn read_type(schema: &Value) -> Option<&str> {
    match schema.get("type") {
        Some(Value::String(ty)) => Some(ty.as_str()),
        Some(Value::Array(types)) => types
            .iter()
            .filter_map(Value::as_str)
            .find(|ty| *ty != "null"),
        _ => None,
    }
}
