use crossterm::event::{KeyCode, KeyEvent};
use serde_json::Value;

use crate::domain::{FieldSpec, value_to_string};

use super::text::handle_text_edit;
use super::{FieldWidget, REQUIRED_MESSAGE, WidgetKind};

/// Numeric input, integer-constrained or unconstrained. Arrow keys step the
/// current value; coercion happens when the value is read back.
#[derive(Debug, Clone)]
pub struct NumericComponent {
    buffer: String,
    integer: bool,
    required: bool,
}

impl NumericComponent {
    pub fn integer(spec: &FieldSpec) -> Self {
        Self {
            buffer: String::new(),
            integer: true,
            required: spec.required,
        }
    }

    pub fn number(spec: &FieldSpec) -> Self {
        Self {
            buffer: String::new(),
            integer: false,
            required: spec.required,
        }
    }

    fn step(&mut self, delta: i64) {
        if self.integer {
            let current = self.buffer.trim().parse::<i64>().unwrap_or(0);
            self.buffer = current.saturating_add(delta).to_string();
        } else {
            let current = self.buffer.trim().parse::<f64>().unwrap_or(0.0);
            self.buffer = (current + delta as f64).to_string();
        }
    }
}

impl FieldWidget for NumericComponent {
    fn kind(&self) -> WidgetKind {
        if self.integer {
            WidgetKind::IntegerInput
        } else {
            WidgetKind::NumberInput
        }
    }

    fn display_value(&self) -> String {
        self.buffer.clone()
    }

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Left => {
                self.step(-1);
                true
            }
            KeyCode::Right => {
                self.step(1);
                true
            }
            _ => handle_text_edit(&mut self.buffer, key),
        }
    }

    fn seed_value(&mut self, value: &Value) {
        match value {
            Value::Number(num) => self.buffer = num.to_string(),
            Value::Null => self.buffer.clear(),
            other => self.buffer = value_to_string(other),
        }
    }

    fn reset(&mut self) {
        self.buffer.clear();
    }

    fn current_value(&self) -> Result<Option<Value>, String> {
        let trimmed = self.buffer.trim();
        if trimmed.is_empty() {
            if self.required {
                return Err(REQUIRED_MESSAGE.to_string());
            }
            return Ok(None);
        }
        if self.integer {
            trimmed
                .parse::<i64>()
                .map(|value| Some(Value::from(value)))
                .map_err(|_| "expected integer".to_string())
        } else {
            trimmed
                .parse::<f64>()
                .map(|value| Some(Value::from(value)))
                .map_err(|_| "expected number".to_string())
        }
    }
}
