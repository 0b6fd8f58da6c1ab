use crossterm::event::{KeyCode, KeyEvent};
use serde_json::Value;

use crate::domain::FieldSpec;

use super::{FieldWidget, WidgetKind};

#[derive(Debug, Clone)]
pub struct ToggleComponent {
    value: bool,
}

impl ToggleComponent {
    pub fn new(_spec: &FieldSpec) -> Self {
        Self { value: false }
    }
}

impl FieldWidget for ToggleComponent {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Toggle
    }

    fn display_value(&self) -> String {
        if self.value {
            "[x]".to_string()
        } else {
            "[ ]".to_string()
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right => {
                self.value = !self.value;
                true
            }
            _ => false,
        }
    }

    fn seed_value(&mut self, value: &Value) {
        self.value = value.as_bool().unwrap_or(false);
    }

    fn reset(&mut self) {
        self.value = false;
    }

    fn current_value(&self) -> Result<Option<Value>, String> {
        Ok(Some(Value::Bool(self.value)))
    }
}
