use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::Mutex;
use serde_json::Value;
use tracing::warn;

use crate::domain::{CollectionDisplay, Entity, FieldSpec, read_collection, value_to_string};
use crate::error::FieldAccessError;

use super::components::{BadgeListComponent, InlineSelectComponent};

/// Maps one collection element to its display label. Defaults to the
/// element's natural string form.
pub type ItemLabelGenerator = Arc<dyn Fn(&Value) -> String + Send + Sync>;

fn natural_labels() -> ItemLabelGenerator {
    Arc::new(|value: &Value| value_to_string(value))
}

#[derive(Debug)]
enum CollectionWidget {
    InlineSelect(InlineSelectComponent),
    Badges(BadgeListComponent),
}

impl CollectionWidget {
    fn for_display(display: CollectionDisplay) -> Self {
        match display.badge_class() {
            None => CollectionWidget::InlineSelect(InlineSelectComponent::new()),
            Some(class) => CollectionWidget::Badges(BadgeListComponent::new(class)),
        }
    }

    fn set_children(&mut self, children: Vec<String>) {
        match self {
            CollectionWidget::InlineSelect(select) => select.set_children(children),
            CollectionWidget::Badges(badges) => badges.set_children(children),
        }
    }

    fn children(&self) -> Vec<String> {
        match self {
            CollectionWidget::InlineSelect(select) => select.children().to_vec(),
            CollectionWidget::Badges(badges) => badges.children().to_vec(),
        }
    }

    fn selected_index(&self) -> Option<usize> {
        match self {
            CollectionWidget::InlineSelect(select) => select.selected_index(),
            CollectionWidget::Badges(_) => None,
        }
    }

    fn select(&mut self, delta: i32) -> bool {
        match self {
            CollectionWidget::InlineSelect(select) => select.select(delta),
            CollectionWidget::Badges(_) => false,
        }
    }

    fn display_value(&self) -> String {
        match self {
            CollectionWidget::InlineSelect(select) => select.display_value(),
            CollectionWidget::Badges(badges) => badges.display_value(),
        }
    }
}

struct CollectionBinding {
    spec: FieldSpec,
    display: CollectionDisplay,
    labeler: ItemLabelGenerator,
    // Rebuilds tear down and reconstruct the rendered children; the lock
    // keeps at most one rebuild in flight per binding.
    widget: Mutex<CollectionWidget>,
}

/// Rendering-ready snapshot of one collection binding.
#[derive(Debug, Clone)]
pub struct CollectionView {
    pub field: String,
    pub label: String,
    pub display: CollectionDisplay,
    pub children: Vec<String>,
    pub selected: Option<usize>,
    pub summary: String,
}

/// Registry of collection-valued bindings and their display strategies. The
/// validating binder never sees these fields.
#[derive(Default)]
pub struct CollectionFieldAdapter {
    bindings: IndexMap<String, CollectionBinding>,
}

impl CollectionFieldAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn register(&mut self, spec: FieldSpec) {
        let display = CollectionDisplay::default();
        self.bindings.insert(
            spec.name.clone(),
            CollectionBinding {
                spec,
                display,
                labeler: natural_labels(),
                widget: Mutex::new(CollectionWidget::for_display(display)),
            },
        );
    }

    /// Replaces the widget bound to `field` with one for the given strategy,
    /// keeping the field's position in the layout. The replacement starts
    /// empty; push the current entity through [`set_items`] to refill it.
    ///
    /// [`set_items`]: Self::set_items
    pub fn set_strategy(
        &mut self,
        field: &str,
        display: CollectionDisplay,
        labeler: Option<ItemLabelGenerator>,
    ) -> bool {
        let Some(binding) = self.bindings.get_mut(field) else {
            return false;
        };
        binding.display = display;
        if let Some(labeler) = labeler {
            binding.labeler = labeler;
        }
        *binding.widget.lock() = CollectionWidget::for_display(display);
        true
    }

    /// Reads the collection value off the entity, maps every element through
    /// the field's label generator, and re-renders the children to exactly
    /// that label sequence. Idempotent for unchanged input; an accessor
    /// failure leaves the previously rendered children intact.
    pub fn set_items(&self, field: &str, entity: &Entity) -> Result<(), FieldAccessError> {
        let Some(binding) = self.bindings.get(field) else {
            return Err(FieldAccessError::MissingField(field.to_string()));
        };
        let items = read_collection(entity, field)?;
        let labels: Vec<String> = items.iter().map(|item| (binding.labeler)(item)).collect();
        binding.widget.lock().set_children(labels);
        Ok(())
    }

    /// Pushes the entity into every registered binding. Failing fields keep
    /// their previous children; the first failure is reported.
    pub fn populate(&self, entity: &Entity) -> Result<(), FieldAccessError> {
        let mut first_error = None;
        for field in self.bindings.keys() {
            if let Err(error) = self.set_items(field, entity) {
                warn!(field = %field, %error, "collection rebuild skipped");
                first_error.get_or_insert(error);
            }
        }
        match first_error {
            None => Ok(()),
            Some(error) => Err(error),
        }
    }

    /// Empties every rendered collection, the no-selection state.
    pub fn clear(&self) {
        for binding in self.bindings.values() {
            binding.widget.lock().set_children(Vec::new());
        }
    }

    pub fn children(&self, field: &str) -> Option<Vec<String>> {
        self.bindings
            .get(field)
            .map(|binding| binding.widget.lock().children())
    }

    pub fn display(&self, field: &str) -> Option<CollectionDisplay> {
        self.bindings.get(field).map(|binding| binding.display)
    }

    /// Moves the inline selector's cursor; badge renderings ignore this.
    pub fn select(&self, field: &str, delta: i32) -> bool {
        self.bindings
            .get(field)
            .map(|binding| binding.widget.lock().select(delta))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn field_names(&self) -> Vec<String> {
        self.bindings.keys().cloned().collect()
    }

    pub fn view(&self, field: &str) -> Option<CollectionView> {
        self.bindings.get(field).map(|binding| {
            let widget = binding.widget.lock();
            CollectionView {
                field: binding.spec.name.clone(),
                label: binding.spec.label.clone(),
                display: binding.display,
                children: widget.children(),
                selected: widget.selected_index(),
                summary: widget.display_value(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SemanticType;
    use serde_json::json;

    fn roles_spec() -> FieldSpec {
        FieldSpec {
            name: "roles".to_string(),
            label: "Roles".to_string(),
            semantic: SemanticType::Collection,
            declared_order: 0,
            required: false,
        }
    }

    fn adapter() -> CollectionFieldAdapter {
        let mut adapter = CollectionFieldAdapter::new();
        adapter.register(roles_spec());
        adapter
    }

    #[test]
    fn badge_strategy_renders_lowercased_labels_in_order() {
        let mut adapter = adapter();
        adapter.set_strategy(
            "roles",
            CollectionDisplay::Badge,
            Some(Arc::new(|value| {
                value.as_str().unwrap_or_default().to_lowercase()
            })),
        );
        let entity = json!({"roles": ["MANAGER", "WORKER"]});
        adapter.set_items("roles", &entity).unwrap();
        assert_eq!(adapter.children("roles").unwrap(), ["manager", "worker"]);
    }

    #[test]
    fn rebuilding_twice_renders_identical_children() {
        let adapter = adapter();
        let entity = json!({"roles": ["a", "b"]});
        adapter.set_items("roles", &entity).unwrap();
        let first = adapter.children("roles").unwrap();
        adapter.set_items("roles", &entity).unwrap();
        assert_eq!(adapter.children("roles").unwrap(), first);
    }

    #[test]
    fn strategy_switch_preserves_data_and_position() {
        let mut adapter = CollectionFieldAdapter::new();
        adapter.register(roles_spec());
        adapter.register(FieldSpec {
            name: "tags".to_string(),
            label: "Tags".to_string(),
            semantic: SemanticType::Collection,
            declared_order: 1,
            required: false,
        });
        let entity = json!({"roles": ["a", "b"], "tags": []});
        adapter.populate(&entity).unwrap();
        let before = adapter.children("roles").unwrap();

        adapter.set_strategy("roles", CollectionDisplay::BadgeContrast, None);
        adapter.set_items("roles", &entity).unwrap();
        assert_eq!(adapter.children("roles").unwrap(), before);
        // order-preserving replacement, not append
        assert_eq!(adapter.field_names(), ["roles", "tags"]);
    }

    #[test]
    fn accessor_failure_keeps_previous_children() {
        let adapter = adapter();
        adapter
            .set_items("roles", &json!({"roles": ["keep"]}))
            .unwrap();
        let result = adapter.set_items("roles", &json!({"roles": null}));
        assert!(matches!(result, Err(FieldAccessError::NullCollection(_))));
        assert_eq!(adapter.children("roles").unwrap(), ["keep"]);
    }

    #[test]
    fn clearing_empties_every_collection() {
        let adapter = adapter();
        adapter
            .set_items("roles", &json!({"roles": [1, 2]}))
            .unwrap();
        adapter.clear();
        assert!(adapter.children("roles").unwrap().is_empty());
    }

    #[test]
    fn default_labels_use_the_natural_string_form() {
        let adapter = adapter();
        adapter
            .set_items("roles", &json!({"roles": ["x", 7, true]}))
            .unwrap();
        assert_eq!(adapter.children("roles").unwrap(), ["x", "7", "true"]);
    }
}
