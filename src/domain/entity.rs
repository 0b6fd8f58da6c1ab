use serde_json::Value;

use crate::error::FieldAccessError;

/// A live instance of the described class, in its JSON object form. Typed
/// callers round-trip through serde.
pub type Entity = Value;

/// Reads one declared field off an entity instance.
pub fn read_field<'a>(entity: &'a Entity, field: &str) -> Result<&'a Value, FieldAccessError> {
    let object = entity.as_object().ok_or(FieldAccessError::NotAnObject)?;
    object
        .get(field)
        .ok_or_else(|| FieldAccessError::MissingField(field.to_string()))
}

/// Reads a collection-valued field off an entity instance. A null or
/// non-array value is an access failure, not an empty collection.
pub fn read_collection<'a>(entity: &'a Entity, field: &str) -> Result<&'a [Value], FieldAccessError> {
    match read_field(entity, field)? {
        Value::Array(items) => Ok(items),
        Value::Null => Err(FieldAccessError::NullCollection(field.to_string())),
        _ => Err(FieldAccessError::NotACollection(field.to_string())),
    }
}

/// The natural string form of a JSON value, used for grid cells and as the
/// default collection item label.
pub(crate) fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(num) => num.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null => String::new(),
        Value::Array(items) => {
            let rendered = items
                .iter()
                .map(value_to_string)
                .collect::<Vec<_>>()
                .join(", ");
            format!("[{rendered}]")
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_declared_fields() {
        let entity = json!({"name": "Ada", "age": 36});
        assert_eq!(read_field(&entity, "name").unwrap(), &json!("Ada"));
    }

    #[test]
    fn missing_field_is_an_access_error() {
        let entity = json!({"name": "Ada"});
        assert!(matches!(
            read_field(&entity, "age"),
            Err(FieldAccessError::MissingField(field)) if field == "age"
        ));
    }

    #[test]
    fn null_collection_is_an_access_error() {
        let entity = json!({"roles": null});
        assert!(matches!(
            read_collection(&entity, "roles"),
            Err(FieldAccessError::NullCollection(_))
        ));
    }

    #[test]
    fn renders_natural_string_forms() {
        assert_eq!(value_to_string(&json!("text")), "text");
        assert_eq!(value_to_string(&json!(4.5)), "4.5");
        assert_eq!(value_to_string(&json!(["a", "b"])), "[a, b]");
        assert_eq!(value_to_string(&Value::Null), "");
    }
}
