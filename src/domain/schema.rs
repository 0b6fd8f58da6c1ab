use schemars::JsonSchema;
use serde_json::Value;

use crate::error::IntrospectionError;

use super::extract::extract_fields;

/// The closed set of widget-relevant field categories. Classification picks
/// exactly one per field (see [`classify`]).
///
/// [`classify`]: super::classify
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticType {
    Boolean,
    Integer,
    Number,
    Date,
    DateTime,
    Collection,
    Text,
}

impl SemanticType {
    pub fn is_collection(self) -> bool {
        matches!(self, SemanticType::Collection)
    }
}

/// Rendering mode for a collection-valued field. `InlineSelect` is the
/// default; the badge variants render non-editable labeled chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollectionDisplay {
    #[default]
    InlineSelect,
    Badge,
    BadgeSuccess,
    BadgeError,
    BadgeContrast,
}

impl CollectionDisplay {
    /// Style class carried by badge chips; `None` for the inline selector.
    pub fn badge_class(self) -> Option<&'static str> {
        match self {
            CollectionDisplay::InlineSelect => None,
            CollectionDisplay::Badge => Some("badge"),
            CollectionDisplay::BadgeSuccess => Some("badge success"),
            CollectionDisplay::BadgeError => Some("badge error"),
            CollectionDisplay::BadgeContrast => Some("badge contrast"),
        }
    }
}

/// Metadata for one declared field, derived once per class description and
/// immutable afterwards.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub label: String,
    pub semantic: SemanticType,
    pub declared_order: usize,
    pub required: bool,
}

impl FieldSpec {
    pub fn is_collection(&self) -> bool {
        self.semantic.is_collection()
    }
}

/// The parsed class description: every declared field in declaration order.
#[derive(Debug, Clone)]
pub struct EntitySchema {
    title: Option<String>,
    fields: Vec<FieldSpec>,
}

impl EntitySchema {
    /// Introspects the JSON Schema generated for `T`. Declaration order is
    /// preserved, inherited (flattened) fields included.
    pub fn of<T: JsonSchema>() -> Result<Self, IntrospectionError> {
        let root = schemars::r#gen::SchemaGenerator::default().into_root_schema_for::<T>();
        let value =
            serde_json::to_value(root).map_err(|_| IntrospectionError::NotAnObjectSchema)?;
        Self::from_schema(&value)
    }

    /// Introspects a raw JSON Schema document.
    pub fn from_schema(schema: &Value) -> Result<Self, IntrospectionError> {
        let fields = extract_fields(schema)?;
        let title = schema
            .get("title")
            .and_then(Value::as_str)
            .map(str::to_string);
        Ok(Self { title, fields })
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Field names in declaration order, the input to the column policy.
    pub fn declared_names(&self) -> Vec<String> {
        self.fields.iter().map(|field| field.name.clone()).collect()
    }
}
