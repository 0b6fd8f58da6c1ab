use crossterm::event::KeyEvent;
use serde_json::Value;

mod badges;
mod date;
mod numeric;
mod select;
mod text;
mod toggle;

pub use badges::BadgeListComponent;
pub use date::DateComponent;
pub use numeric::NumericComponent;
pub use select::InlineSelectComponent;
pub use text::TextComponent;
pub use toggle::ToggleComponent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    Toggle,
    IntegerInput,
    NumberInput,
    DateInput,
    DateTimeInput,
    TextInput,
    InlineSelect,
    BadgeList,
}

/// One editable scalar widget. Collection-valued fields never implement
/// this; they are handled by the adapter registry instead.
pub(crate) trait FieldWidget: std::fmt::Debug {
    fn kind(&self) -> WidgetKind;

    fn display_value(&self) -> String;

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        let _ = key;
        false
    }

    /// Pushes an entity's current field value into the widget.
    fn seed_value(&mut self, value: &Value);

    /// Returns the widget to its empty/default representation.
    fn reset(&mut self);

    /// Coerces the widget contents into the field's JSON value. `Ok(None)`
    /// means the optional input is empty; `Err` carries the violation text.
    fn current_value(&self) -> Result<Option<Value>, String>;
}

pub(crate) const REQUIRED_MESSAGE: &str = "must not be empty";
