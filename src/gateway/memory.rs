use indexmap::IndexMap;
use parking_lot::Mutex;
use serde_json::Value;

use crate::domain::Entity;
use crate::error::PersistenceError;

use super::DataSourceGateway;

/// Id-keyed in-process gateway, used by the demos and the test suites.
/// Entities without an id are assigned the next numeric one on save.
#[derive(Debug)]
pub struct InMemoryGateway {
    id_field: String,
    store: Mutex<Store>,
}

impl Default for InMemoryGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Default)]
struct Store {
    rows: IndexMap<String, Entity>,
    next_id: u64,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self {
            id_field: "id".to_string(),
            store: Mutex::new(Store::default()),
        }
    }

    pub fn with_id_field(mut self, id_field: impl Into<String>) -> Self {
        self.id_field = id_field.into();
        self
    }

    pub fn with_rows(self, rows: Vec<Entity>) -> Result<Self, PersistenceError> {
        for row in rows {
            self.save(row)?;
        }
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.store.lock().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.lock().rows.is_empty()
    }

    fn key(id: &Value) -> String {
        id.to_string()
    }
}

impl DataSourceGateway for InMemoryGateway {
    fn list_all(&self) -> Result<Vec<Entity>, PersistenceError> {
        Ok(self.store.lock().rows.values().cloned().collect())
    }

    fn find_by_id(&self, id: &Value) -> Result<Option<Entity>, PersistenceError> {
        Ok(self.store.lock().rows.get(&Self::key(id)).cloned())
    }

    fn save(&self, mut entity: Entity) -> Result<Entity, PersistenceError> {
        let mut store = self.store.lock();
        let id = match entity.get(&self.id_field) {
            Some(Value::Null) | None => {
                store.next_id += 1;
                let id = Value::from(store.next_id);
                let object = entity
                    .as_object_mut()
                    .ok_or_else(|| PersistenceError::new("save", "entity is not an object"))?;
                object.insert(self.id_field.clone(), id.clone());
                id
            }
            Some(existing) => existing.clone(),
        };
        store.rows.insert(Self::key(&id), entity.clone());
        Ok(entity)
    }

    fn delete_by_id(&self, id: &Value) -> Result<(), PersistenceError> {
        self.store.lock().rows.shift_remove(&Self::key(id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn assigns_ids_on_save() {
        let gateway = InMemoryGateway::new();
        let saved = gateway.save(json!({"name": "Ada"})).unwrap();
        assert_eq!(saved["id"], json!(1));
        assert_eq!(gateway.list_all().unwrap().len(), 1);
    }

    #[test]
    fn save_replaces_existing_rows() {
        let gateway = InMemoryGateway::new();
        gateway.save(json!({"id": 7, "name": "Ada"})).unwrap();
        gateway.save(json!({"id": 7, "name": "Grace"})).unwrap();
        let rows = gateway.list_all().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["name"], json!("Grace"));
    }

    #[test]
    fn finds_and_deletes_by_id() {
        let gateway = InMemoryGateway::new();
        gateway.save(json!({"id": 3, "name": "Ada"})).unwrap();
        assert!(gateway.find_by_id(&json!(3)).unwrap().is_some());
        gateway.delete_by_id(&json!(3)).unwrap();
        assert!(gateway.find_by_id(&json!(3)).unwrap().is_none());
        assert!(gateway.is_empty());
    }
}
