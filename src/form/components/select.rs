/// Selectable inline list over a collection field's rendered labels, the
/// default collection display.
#[derive(Debug, Clone, Default)]
pub struct InlineSelectComponent {
    items: Vec<String>,
    selected: usize,
}

impl InlineSelectComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the rendered children with exactly the given labels, in
    /// order. The cursor is kept when it still points at a valid entry.
    pub fn set_children(&mut self, items: Vec<String>) {
        if self.selected >= items.len() {
            self.selected = 0;
        }
        self.items = items;
    }

    pub fn children(&self) -> &[String] {
        &self.items
    }

    pub fn selected_label(&self) -> Option<&str> {
        self.items.get(self.selected).map(String::as_str)
    }

    pub fn selected_index(&self) -> Option<usize> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.selected)
        }
    }

    pub fn select(&mut self, delta: i32) -> bool {
        let len = self.items.len() as i32;
        if len == 0 {
            return false;
        }
        let next = (self.selected as i32 + delta).rem_euclid(len) as usize;
        if next == self.selected {
            return false;
        }
        self.selected = next;
        true
    }

    pub fn display_value(&self) -> String {
        match self.selected_label() {
            Some(label) => format!("{label} ({}/{})", self.selected + 1, self.items.len()),
            None => "(empty)".to_string(),
        }
    }
}
