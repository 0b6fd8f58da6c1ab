use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::Value;

use crate::domain::{FieldSpec, value_to_string};

use super::{FieldWidget, REQUIRED_MESSAGE, WidgetKind};

#[derive(Debug, Clone)]
pub struct TextComponent {
    buffer: String,
    required: bool,
}

impl TextComponent {
    pub fn new(spec: &FieldSpec) -> Self {
        Self {
            buffer: String::new(),
            required: spec.required,
        }
    }
}

impl FieldWidget for TextComponent {
    fn kind(&self) -> WidgetKind {
        WidgetKind::TextInput
    }

    fn display_value(&self) -> String {
        self.buffer.clone()
    }

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        handle_text_edit(&mut self.buffer, key)
    }

    fn seed_value(&mut self, value: &Value) {
        match value {
            Value::String(text) => self.buffer = text.clone(),
            Value::Null => self.buffer.clear(),
            other => self.buffer = value_to_string(other),
        }
    }

    fn reset(&mut self) {
        self.buffer.clear();
    }

    fn current_value(&self) -> Result<Option<Value>, String> {
        if self.buffer.is_empty() {
            if self.required {
                return Err(REQUIRED_MESSAGE.to_string());
            }
            return Ok(None);
        }
        Ok(Some(Value::String(self.buffer.clone())))
    }
}

/// Shared single-line editing rules for buffer-backed widgets.
pub(super) fn handle_text_edit(buffer: &mut String, key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return false;
            }
            buffer.push(c);
            true
        }
        KeyCode::Backspace => {
            buffer.pop();
            true
        }
        KeyCode::Delete => {
            buffer.clear();
            true
        }
        _ => false,
    }
}
