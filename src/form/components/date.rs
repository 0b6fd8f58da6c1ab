use chrono::{NaiveDate, NaiveDateTime};
use crossterm::event::KeyEvent;
use serde_json::Value;

use crate::domain::{FieldSpec, value_to_string};

use super::text::handle_text_edit;
use super::{FieldWidget, REQUIRED_MESSAGE, WidgetKind};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Calendar-date or date-and-time input over a text buffer. The buffer is
/// coerced through chrono when the value is read back; the stored form is
/// the canonical ISO string.
#[derive(Debug, Clone)]
pub struct DateComponent {
    buffer: String,
    with_time: bool,
    required: bool,
}

impl DateComponent {
    pub fn date(spec: &FieldSpec) -> Self {
        Self {
            buffer: String::new(),
            with_time: false,
            required: spec.required,
        }
    }

    pub fn date_time(spec: &FieldSpec) -> Self {
        Self {
            buffer: String::new(),
            with_time: true,
            required: spec.required,
        }
    }
}

impl FieldWidget for DateComponent {
    fn kind(&self) -> WidgetKind {
        if self.with_time {
            WidgetKind::DateTimeInput
        } else {
            WidgetKind::DateInput
        }
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
        let trimmed = self.buffer.trim();
        if trimmed.is_empty() {
            if self.required {
                return Err(REQUIRED_MESSAGE.to_string());
            }
            return Ok(None);
        }
        if self.with_time {
            NaiveDateTime::parse_from_str(trimmed, DATE_TIME_FORMAT)
                .map(|parsed| Some(Value::String(parsed.format(DATE_TIME_FORMAT).to_string())))
                .map_err(|_| "expected date-time (YYYY-MM-DDTHH:MM:SS)".to_string())
        } else {
            NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
                .map(|parsed| Some(Value::String(parsed.format(DATE_FORMAT).to_string())))
                .map_err(|_| "expected date (YYYY-MM-DD)".to_string())
        }
    }
}
