use anyhow::{Context, Result};
use schemars::JsonSchema;
use tracing::warn;

use crate::domain::{CollectionDisplay, EntitySchema};
use crate::form::{Binder, CollectionFieldAdapter, ItemLabelGenerator, WidgetFactory};
use crate::gateway::DataSourceGateway;
use crate::grid::{Column, build_columns};

use super::controller::MasterDetailController;
use super::options::UiOptions;
use super::runtime::App;

/// The synthesized master-detail engine: one list column and one detail
/// widget per declared field, wired to the supplied gateway.
///
/// Construction derives the full widget set from the class description;
/// fields are never added or removed afterwards.
pub struct AutoGrid<G: DataSourceGateway> {
    schema: EntitySchema,
    columns: Vec<Column>,
    controller: MasterDetailController<G>,
    options: UiOptions,
}

impl<G: DataSourceGateway> AutoGrid<G> {
    pub fn new(schema: EntitySchema, gateway: G) -> Result<Self> {
        let factory = WidgetFactory::new();
        let mut binder = Binder::new();
        let mut adapters = CollectionFieldAdapter::new();
        for spec in schema.fields() {
            if spec.is_collection() {
                adapters.register(spec.clone());
            } else {
                binder.register(spec.clone(), factory.create(spec));
            }
        }
        let controller = MasterDetailController::new(gateway, binder, adapters, "id")
            .context("initial fetch from gateway failed")?;
        let columns = build_columns(&schema, &[]);
        Ok(Self {
            schema,
            columns,
            controller,
            options: UiOptions::default(),
        })
    }

    /// Builds the engine for any schema-describable entity type.
    pub fn for_type<T: JsonSchema>(gateway: G) -> Result<Self> {
        let schema = EntitySchema::of::<T>().context("failed to introspect entity type")?;
        Self::new(schema, gateway)
    }

    pub fn with_options(mut self, options: UiOptions) -> Self {
        self.options = options;
        self
    }

    /// Adds host-supplied columns; the ordering policy places them before
    /// the declared-field columns.
    pub fn with_injected_columns(mut self, injected: &[Column]) -> Self {
        self.columns = build_columns(&self.schema, injected);
        self
    }

    /// Switches the display strategy of one collection-valued field at
    /// runtime. The replacement widget takes the old one's layout position;
    /// when a row is selected its items are pushed into the new widget
    /// immediately.
    pub fn set_collection_display(
        &mut self,
        field: &str,
        display: CollectionDisplay,
        labeler: Option<ItemLabelGenerator>,
    ) -> bool {
        if !self
            .controller
            .adapters_mut()
            .set_strategy(field, display, labeler)
        {
            return false;
        }
        if let Some(entity) = self.controller.selected_entity().cloned()
            && let Err(error) = self.controller.adapters().set_items(field, &entity)
        {
            warn!(field = %field, %error, "refill after strategy switch failed");
        }
        true
    }

    pub fn schema(&self) -> &EntitySchema {
        &self.schema
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn options(&self) -> &UiOptions {
        &self.options
    }

    pub fn controller(&self) -> &MasterDetailController<G> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut MasterDetailController<G> {
        &mut self.controller
    }

    /// Total number of widget bindings, scalar and collection together.
    pub fn binding_count(&self) -> usize {
        self.controller.binder().len() + self.controller.adapters().len()
    }

    /// Runs the interactive terminal host until the user quits.
    pub fn run(self) -> Result<()> {
        App::new(self).run()
    }
}
