mod entity;
mod extract;
mod label;
mod schema;

pub use entity::{Entity, read_collection, read_field};
pub(crate) use entity::value_to_string;
pub use extract::classify;
pub use label::humanize_label;
pub use schema::{CollectionDisplay, EntitySchema, FieldSpec, SemanticType};
