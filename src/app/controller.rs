use tracing::{debug, warn};

use serde_json::Value;

use crate::domain::{Entity, read_field};
use crate::error::{FieldAccessError, PersistenceError, ValidationErrors};
use crate::form::{Binder, CollectionFieldAdapter};
use crate::gateway::DataSourceGateway;

/// Result of a save request.
#[derive(Debug)]
pub enum SaveOutcome {
    /// Persisted; selection cleared and the list re-fetched.
    Saved,
    /// Validation rejected the write; selection and edits are kept.
    Invalid(ValidationErrors),
    /// No row was selected, nothing happened.
    NothingSelected,
}

#[derive(Debug)]
pub enum DeleteOutcome {
    Deleted,
    NothingSelected,
}

/// Coordinates the list view's selection with the detail form and the
/// collection adapters, and routes save/cancel/delete to the gateway.
///
/// Two states: no selection, or viewing one row. Selecting another row
/// discards unsaved widget edits without confirmation; this is the intended
/// read-then-edit-then-explicit-save model, not autosave.
pub struct MasterDetailController<G> {
    gateway: G,
    binder: Binder,
    adapters: CollectionFieldAdapter,
    rows: Vec<Entity>,
    selected: Option<usize>,
    id_field: String,
}

impl<G: DataSourceGateway> MasterDetailController<G> {
    pub(crate) fn new(
        gateway: G,
        binder: Binder,
        adapters: CollectionFieldAdapter,
        id_field: impl Into<String>,
    ) -> Result<Self, PersistenceError> {
        let rows = gateway.list_all()?;
        debug!(rows = rows.len(), "initial fetch");
        Ok(Self {
            gateway,
            binder,
            adapters,
            rows,
            selected: None,
            id_field: id_field.into(),
        })
    }

    pub fn rows(&self) -> &[Entity] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_entity(&self) -> Option<&Entity> {
        self.selected.and_then(|index| self.rows.get(index))
    }

    pub fn binder(&self) -> &Binder {
        &self.binder
    }

    pub fn binder_mut(&mut self) -> &mut Binder {
        &mut self.binder
    }

    pub fn adapters(&self) -> &CollectionFieldAdapter {
        &self.adapters
    }

    pub fn adapters_mut(&mut self) -> &mut CollectionFieldAdapter {
        &mut self.adapters
    }

    /// Selects the row at `index`, pushing its persisted values into the
    /// binder and every collection adapter. Any edits against a previously
    /// selected row are discarded. Out-of-range indexes are ignored.
    pub fn select_row(&mut self, index: usize) -> Result<(), FieldAccessError> {
        let Some(entity) = self.rows.get(index) else {
            return Ok(());
        };
        self.selected = Some(index);
        self.binder.set_bean(Some(entity));
        self.adapters.populate(entity)
    }

    /// Clears the selection: scalar widgets reset, collection adapters
    /// emptied.
    pub fn deselect(&mut self) {
        self.selected = None;
        self.binder.set_bean(None);
        self.adapters.clear();
    }

    /// Discards edits without persisting.
    pub fn cancel(&mut self) {
        self.deselect();
    }

    /// Validates and persists the selected row. Validation failure keeps the
    /// selection and the edits; a gateway failure is propagated with the
    /// editing state intact for retry.
    pub fn save(&mut self) -> Result<SaveOutcome, PersistenceError> {
        let Some(index) = self.selected else {
            return Ok(SaveOutcome::NothingSelected);
        };
        let mut entity = self.rows[index].clone();
        if let Err(errors) = self.binder.write_bean(&mut entity) {
            debug!(violations = errors.len(), "save rejected");
            return Ok(SaveOutcome::Invalid(errors));
        }
        self.gateway.save(entity)?;
        debug!("entity saved");
        self.deselect();
        self.refresh()?;
        Ok(SaveOutcome::Saved)
    }

    /// Deletes the selected row via the gateway, then clears selection and
    /// re-fetches.
    pub fn delete(&mut self) -> Result<DeleteOutcome, PersistenceError> {
        let Some(index) = self.selected else {
            return Ok(DeleteOutcome::NothingSelected);
        };
        let id = read_field(&self.rows[index], &self.id_field)
            .map_err(|error| PersistenceError::new("delete", error.to_string()))?
            .clone();
        self.gateway.delete_by_id(&id)?;
        debug!(%id, "entity deleted");
        self.deselect();
        self.refresh()?;
        Ok(DeleteOutcome::Deleted)
    }

    /// Re-fetches the list from the gateway. Row selection does not survive
    /// a refresh; indexes may have shifted.
    pub fn refresh(&mut self) -> Result<(), PersistenceError> {
        self.rows = self.gateway.list_all()?;
        if self.selected.is_some() {
            warn!("selection dropped by refresh");
            self.deselect();
        }
        Ok(())
    }

    pub fn find(&self, id: &Value) -> Result<Option<Entity>, PersistenceError> {
        self.gateway.find_by_id(id)
    }
}
