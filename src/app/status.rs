#[derive(Debug, Clone)]
pub(crate) struct StatusLine {
    message: String,
}

pub(crate) const READY_STATUS: &str = "Ready. ↑/↓ rows, Enter to edit, Ctrl+Q to quit.";

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            message: READY_STATUS.to_string(),
        }
    }
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_raw(&mut self, msg: impl Into<String>) {
        self.message = msg.into();
    }

    pub fn ready(&mut self) {
        self.message = READY_STATUS.to_string();
    }

    pub fn editing(&mut self, label: &str) {
        self.message = format!("Editing {label}");
    }

    pub fn data_updated(&mut self) {
        self.message = "Data updated".to_string();
    }

    pub fn entry_deleted(&mut self) {
        self.message = "Entry deleted".to_string();
    }

    pub fn validation_failed(&mut self, count: usize) {
        self.message = format!("{count} field(s) failed validation");
    }

    pub fn pending_exit(&mut self) {
        self.message = "Unsaved changes. Press Ctrl+Q again to quit without saving.".to_string();
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
