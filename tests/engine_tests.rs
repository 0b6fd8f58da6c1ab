use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use autogrid::{
    AutoGrid, CollectionDisplay, Column, DataSourceGateway, Entity, EntitySchema, InMemoryGateway,
    PersistenceError, SaveOutcome, SemanticType,
};

fn person_schema() -> EntitySchema {
    EntitySchema::from_schema(&json!({
        "type": "object",
        "title": "People",
        "required": ["firstName", "lastName"],
        "properties": {
            "id": {"type": "integer"},
            "firstName": {"type": "string"},
            "lastName": {"type": "string"},
            "dateOfBirth": {"type": "string", "format": "date"},
            "important": {"type": "boolean"},
            "roles": {"type": "array", "items": {"type": "string"}},
        },
    }))
    .unwrap()
}

fn seeded_gateway() -> InMemoryGateway {
    InMemoryGateway::new()
        .with_rows(vec![
            json!({
                "id": 1,
                "firstName": "Ada",
                "lastName": "Lovelace",
                "dateOfBirth": "1815-12-10",
                "important": true,
                "roles": ["MANAGER", "WORKER"],
            }),
            json!({
                "id": 2,
                "firstName": "Grace",
                "lastName": "Hopper",
                "dateOfBirth": "1906-12-09",
                "important": false,
                "roles": ["WORKER"],
            }),
        ])
        .unwrap()
}

#[test]
fn every_field_is_bound_exactly_once_scalar_xor_collection() {
    let grid = AutoGrid::new(person_schema(), seeded_gateway()).unwrap();
    let schema = grid.schema();

    assert_eq!(grid.binding_count(), schema.fields().len());

    let scalars = grid.controller().binder().field_names();
    let collections = grid.controller().adapters().field_names();
    for field in schema.fields() {
        let scalar_bound = scalars.contains(&field.name);
        let collection_bound = collections.contains(&field.name);
        assert!(
            scalar_bound ^ collection_bound,
            "field {} must be bound exactly one way",
            field.name
        );
        assert_eq!(collection_bound, field.semantic == SemanticType::Collection);
    }
}

#[test]
fn columns_follow_declaration_order_with_injected_first() {
    let grid = AutoGrid::new(person_schema(), seeded_gateway())
        .unwrap()
        .with_injected_columns(&[Column::new("rowNumber", "#")]);
    let keys: Vec<&str> = grid
        .columns()
        .iter()
        .map(|column| column.key.as_str())
        .collect();
    assert_eq!(
        keys,
        ["rowNumber", "id", "firstName", "lastName", "dateOfBirth", "important", "roles"]
    );
}

#[test]
fn edit_save_cycle_persists_and_clears_selection() {
    let mut grid = AutoGrid::new(person_schema(), seeded_gateway()).unwrap();
    let controller = grid.controller_mut();
    controller.select_row(0).unwrap();
    for key in [KeyCode::Char('-'), KeyCode::Char('J')] {
        controller
            .binder_mut()
            .handle_key("lastName", &KeyEvent::from(key));
    }

    let outcome = controller.save().unwrap();
    assert!(matches!(outcome, SaveOutcome::Saved));
    assert!(controller.selected_index().is_none());
    assert_eq!(controller.rows()[0]["lastName"], json!("Lovelace-J"));
    // scalar widgets reset, collections emptied
    assert_eq!(controller.binder().display_value("lastName").unwrap(), "");
    assert!(controller.adapters().children("roles").unwrap().is_empty());
}

#[test]
fn badge_strategy_renders_lowercased_chips_in_collection_order() {
    let mut grid = AutoGrid::new(person_schema(), seeded_gateway()).unwrap();
    grid.set_collection_display(
        "roles",
        CollectionDisplay::Badge,
        Some(Arc::new(|value: &Value| {
            value.as_str().unwrap_or_default().to_lowercase()
        })),
    );
    grid.controller_mut().select_row(0).unwrap();
    assert_eq!(
        grid.controller().adapters().children("roles").unwrap(),
        ["manager", "worker"]
    );
}

#[test]
fn switching_strategy_with_a_live_selection_keeps_the_labels() {
    let mut grid = AutoGrid::new(person_schema(), seeded_gateway()).unwrap();
    grid.controller_mut().select_row(0).unwrap();
    let before = grid.controller().adapters().children("roles").unwrap();

    grid.set_collection_display("roles", CollectionDisplay::BadgeError, None);
    assert_eq!(
        grid.controller().adapters().children("roles").unwrap(),
        before
    );
    assert_eq!(
        grid.controller().adapters().display("roles").unwrap(),
        CollectionDisplay::BadgeError
    );
}

#[test]
fn typed_schemas_classify_like_raw_ones() {
    #[derive(Debug, Serialize, Deserialize, JsonSchema)]
    #[serde(rename_all = "camelCase")]
    struct Ticket {
        id: Option<u64>,
        summary: String,
        estimate: f64,
        closed: bool,
        tags: Vec<String>,
    }

    let schema = EntitySchema::of::<Ticket>().unwrap();
    let semantics: Vec<SemanticType> =
        schema.fields().iter().map(|field| field.semantic).collect();
    assert_eq!(
        semantics,
        [
            SemanticType::Integer,
            SemanticType::Text,
            SemanticType::Number,
            SemanticType::Boolean,
            SemanticType::Collection,
        ]
    );
    assert_eq!(schema.fields()[1].label, "Summary");
    assert!(schema.fields()[1].required);
    assert!(!schema.fields()[0].required);
}

struct BrokenSaves {
    inner: InMemoryGateway,
}

impl DataSourceGateway for BrokenSaves {
    fn list_all(&self) -> Result<Vec<Entity>, PersistenceError> {
        self.inner.list_all()
    }

    fn find_by_id(&self, id: &Value) -> Result<Option<Entity>, PersistenceError> {
        self.inner.find_by_id(id)
    }

    fn save(&self, _entity: Entity) -> Result<Entity, PersistenceError> {
        Err(PersistenceError::new("save", "store offline"))
    }

    fn delete_by_id(&self, id: &Value) -> Result<(), PersistenceError> {
        self.inner.delete_by_id(id)
    }
}

#[test]
fn gateway_failure_keeps_editing_state_for_retry() {
    let gateway = BrokenSaves {
        inner: seeded_gateway(),
    };
    let mut grid = AutoGrid::new(person_schema(), gateway).unwrap();
    let controller = grid.controller_mut();
    controller.select_row(1).unwrap();
    controller
        .binder_mut()
        .handle_key("lastName", &KeyEvent::from(KeyCode::Char('!')));

    let error = controller.save().unwrap_err();
    assert_eq!(error.operation, "save");
    // selection is not cleared and the edit is still in the widget
    assert_eq!(controller.selected_index(), Some(1));
    assert_eq!(
        controller.binder().display_value("lastName").unwrap(),
        "Hopper!"
    );
}
