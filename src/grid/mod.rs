mod columns;

pub use columns::{Column, order_columns};

use crate::domain::EntitySchema;

/// Builds the master list's column set: one column per declared field plus
/// any host-injected columns, arranged by the ordering policy.
pub fn build_columns(schema: &EntitySchema, injected: &[Column]) -> Vec<Column> {
    let mut columns: Vec<Column> = schema
        .fields()
        .iter()
        .map(|field| Column::new(&field.name, &field.label))
        .collect();
    columns.extend(injected.iter().cloned());
    order_columns(&columns, &schema.declared_names())
}
