use crossterm::event::KeyEvent;
use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::domain::{Entity, FieldSpec, read_field};
use crate::error::{FieldViolation, ValidationErrors};

use super::FieldWidget;

#[derive(Debug)]
pub(crate) struct ScalarBinding {
    pub(crate) spec: FieldSpec,
    pub(crate) widget: Box<dyn FieldWidget>,
    pub(crate) error: Option<String>,
    pub(crate) dirty: bool,
}

/// Bidirectional, validating binding between one entity instance and all
/// scalar widgets. Collection-valued fields are never registered here.
#[derive(Debug, Default)]
pub struct Binder {
    bindings: IndexMap<String, ScalarBinding>,
    bean: Option<Entity>,
}

impl Binder {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn register(&mut self, spec: FieldSpec, widget: Box<dyn FieldWidget>) {
        self.bindings.insert(
            spec.name.clone(),
            ScalarBinding {
                spec,
                widget,
                error: None,
                dirty: false,
            },
        );
    }

    /// Pushes the entity's field values into every scalar widget, or resets
    /// every widget to its empty representation when no entity is supplied.
    pub fn set_bean(&mut self, bean: Option<&Entity>) {
        for binding in self.bindings.values_mut() {
            binding.error = None;
            binding.dirty = false;
            match bean {
                Some(entity) => match read_field(entity, &binding.spec.name) {
                    Ok(Value::Null) | Err(_) => binding.widget.reset(),
                    Ok(value) => binding.widget.seed_value(value),
                },
                None => binding.widget.reset(),
            }
        }
        self.bean = bean.cloned();
    }

    pub fn bean(&self) -> Option<&Entity> {
        self.bean.as_ref()
    }

    /// Validates every widget and, only if all of them pass, writes the
    /// values onto the target's fields. Either all fields are written or
    /// none; on failure the per-field errors are retained for display.
    pub fn write_bean(&mut self, target: &mut Entity) -> Result<(), ValidationErrors> {
        let mut staged: Vec<(String, Option<Value>)> = Vec::with_capacity(self.bindings.len());
        let mut violations = Vec::new();

        for binding in self.bindings.values_mut() {
            match binding.widget.current_value() {
                Ok(value) => {
                    binding.error = None;
                    staged.push((binding.spec.name.clone(), value));
                }
                Err(message) => {
                    binding.error = Some(message.clone());
                    violations.push(FieldViolation {
                        field: binding.spec.name.clone(),
                        message,
                    });
                }
            }
        }

        if !violations.is_empty() {
            return Err(ValidationErrors { violations });
        }

        if !target.is_object() {
            *target = Value::Object(Map::new());
        }
        if let Some(object) = target.as_object_mut() {
            for (name, value) in staged {
                object.insert(name, value.unwrap_or(Value::Null));
            }
        }
        for binding in self.bindings.values_mut() {
            binding.dirty = false;
        }
        Ok(())
    }

    /// Routes a key event to the named field's widget. Returns whether the
    /// widget consumed it; consumed keys mark the binding dirty.
    pub fn handle_key(&mut self, field: &str, key: &KeyEvent) -> bool {
        let Some(binding) = self.bindings.get_mut(field) else {
            return false;
        };
        if binding.widget.handle_key(key) {
            binding.dirty = true;
            binding.error = None;
            true
        } else {
            false
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.bindings.values().any(|binding| binding.dirty)
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

    pub fn display_value(&self, field: &str) -> Option<String> {
        self.bindings
            .get(field)
            .map(|binding| binding.widget.display_value())
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.bindings
            .get(field)
            .and_then(|binding| binding.error.as_deref())
    }

    /// Kind of the widget bound to `field`, mostly of interest to tests and
    /// embedding hosts.
    pub fn widget_kind(&self, field: &str) -> Option<super::WidgetKind> {
        self.bindings
            .get(field)
            .map(|binding| binding.widget.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EntitySchema;
    use crate::form::WidgetFactory;
    use crossterm::event::KeyCode;
    use serde_json::json;

    fn person_binder() -> Binder {
        let schema = EntitySchema::from_schema(&json!({
            "type": "object",
            "required": ["firstName"],
            "properties": {
                "firstName": {"type": "string"},
                "age": {"type": "integer"},
                "important": {"type": "boolean"},
                "dateOfBirth": {"type": "string", "format": "date"},
            },
        }))
        .unwrap();
        let factory = WidgetFactory::new();
        let mut binder = Binder::new();
        for spec in schema.fields() {
            binder.register(spec.clone(), factory.create(spec));
        }
        binder
    }

    fn sample() -> Entity {
        json!({
            "firstName": "Ada",
            "age": 36,
            "important": true,
            "dateOfBirth": "1815-12-10",
        })
    }

    #[test]
    fn set_then_write_round_trips_every_scalar_field() {
        let mut binder = person_binder();
        let entity = sample();
        binder.set_bean(Some(&entity));

        let mut target = json!({});
        binder.write_bean(&mut target).unwrap();
        for field in ["firstName", "age", "important", "dateOfBirth"] {
            assert_eq!(target[field], entity[field], "field {field}");
        }
    }

    #[test]
    fn empty_required_field_rejects_the_whole_write() {
        let mut binder = person_binder();
        let mut entity = sample();
        entity["firstName"] = json!("");
        binder.set_bean(Some(&entity));

        let mut target = json!({"age": 1});
        let errors = binder.write_bean(&mut target).unwrap_err();
        assert!(!errors.is_empty());
        assert_eq!(errors.violations[0].field, "firstName");
        // all-or-nothing: the target is untouched
        assert_eq!(target, json!({"age": 1}));
        assert!(binder.error("firstName").is_some());
    }

    #[test]
    fn clearing_the_bean_resets_every_widget() {
        let mut binder = person_binder();
        binder.set_bean(Some(&sample()));
        binder.set_bean(None);
        assert_eq!(binder.display_value("firstName").unwrap(), "");
        assert_eq!(binder.display_value("important").unwrap(), "[ ]");
        assert!(binder.bean().is_none());
    }

    #[test]
    fn rebinding_discards_previous_edits() {
        let mut binder = person_binder();
        binder.set_bean(Some(&sample()));
        assert!(binder.handle_key("firstName", &KeyEvent::from(KeyCode::Char('!'))));
        assert!(binder.is_dirty());

        let other = json!({
            "firstName": "Grace",
            "age": 45,
            "important": false,
            "dateOfBirth": "1906-12-09",
        });
        binder.set_bean(Some(&other));
        assert!(!binder.is_dirty());
        assert_eq!(binder.display_value("firstName").unwrap(), "Grace");
    }

    #[test]
    fn exactly_one_binding_per_scalar_field() {
        let binder = person_binder();
        assert_eq!(binder.len(), 4);
        assert_eq!(
            binder.widget_kind("important"),
            Some(crate::form::WidgetKind::Toggle)
        );
    }
}
