use indexmap::IndexMap;

use crate::domain::{FieldSpec, SemanticType};

use super::FieldWidget;
use super::components::{DateComponent, NumericComponent, TextComponent, ToggleComponent};

pub(crate) type WidgetConstructor = fn(&FieldSpec) -> Box<dyn FieldWidget>;

/// Explicit registry mapping semantic-type tags to widget constructors,
/// populated at startup. Collection-valued fields never pass through here;
/// the adapter registry owns those.
pub struct WidgetFactory {
    registry: IndexMap<SemanticType, WidgetConstructor>,
}

impl Default for WidgetFactory {
    fn default() -> Self {
        let mut registry: IndexMap<SemanticType, WidgetConstructor> = IndexMap::new();
        registry.insert(SemanticType::Boolean, make_toggle);
        registry.insert(SemanticType::Integer, make_integer);
        registry.insert(SemanticType::Number, make_number);
        registry.insert(SemanticType::Date, make_date);
        registry.insert(SemanticType::DateTime, make_date_time);
        registry.insert(SemanticType::Text, make_text);
        Self { registry }
    }
}

impl WidgetFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn create(&self, spec: &FieldSpec) -> Box<dyn FieldWidget> {
        debug_assert!(!spec.is_collection());
        let constructor = self
            .registry
            .get(&spec.semantic)
            .copied()
            .unwrap_or(make_text);
        constructor(spec)
    }
}

fn make_toggle(spec: &FieldSpec) -> Box<dyn FieldWidget> {
    Box::new(ToggleComponent::new(spec))
}

fn make_integer(spec: &FieldSpec) -> Box<dyn FieldWidget> {
    Box::new(NumericComponent::integer(spec))
}

fn make_number(spec: &FieldSpec) -> Box<dyn FieldWidget> {
    Box::new(NumericComponent::number(spec))
}

fn make_date(spec: &FieldSpec) -> Box<dyn FieldWidget> {
    Box::new(DateComponent::date(spec))
}

fn make_date_time(spec: &FieldSpec) -> Box<dyn FieldWidget> {
    Box::new(DateComponent::date_time(spec))
}

fn make_text(spec: &FieldSpec) -> Box<dyn FieldWidget> {
    Box::new(TextComponent::new(spec))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::WidgetKind;

    fn spec(semantic: SemanticType) -> FieldSpec {
        FieldSpec {
            name: "field".to_string(),
            label: "Field".to_string(),
            semantic,
            declared_order: 0,
            required: false,
        }
    }

    #[test]
    fn each_scalar_semantic_type_gets_its_widget_kind() {
        let factory = WidgetFactory::new();
        let expectations = [
            (SemanticType::Boolean, WidgetKind::Toggle),
            (SemanticType::Integer, WidgetKind::IntegerInput),
            (SemanticType::Number, WidgetKind::NumberInput),
            (SemanticType::Date, WidgetKind::DateInput),
            (SemanticType::DateTime, WidgetKind::DateTimeInput),
            (SemanticType::Text, WidgetKind::TextInput),
        ];
        for (semantic, kind) in expectations {
            assert_eq!(factory.create(&spec(semantic)).kind(), kind);
        }
    }
}
