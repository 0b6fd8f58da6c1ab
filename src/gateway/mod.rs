mod memory;

pub use memory::InMemoryGateway;

use serde_json::Value;

use crate::domain::Entity;
use crate::error::PersistenceError;

/// The persistence accessor consumed by the engine. Calls are synchronous
/// from the engine's perspective; failures are never retried by the core.
pub trait DataSourceGateway {
    fn list_all(&self) -> Result<Vec<Entity>, PersistenceError>;

    fn find_by_id(&self, id: &Value) -> Result<Option<Entity>, PersistenceError>;

    /// Persists the entity and returns its stored form.
    fn save(&self, entity: Entity) -> Result<Entity, PersistenceError>;

    fn delete_by_id(&self, id: &Value) -> Result<(), PersistenceError>;
}
