/// Non-editable badge list: one labeled chip per collection element, carrying
/// the style class of the chosen badge variant.
#[derive(Debug, Clone)]
pub struct BadgeListComponent {
    class: &'static str,
    children: Vec<String>,
}

impl BadgeListComponent {
    pub fn new(class: &'static str) -> Self {
        Self {
            class,
            children: Vec::new(),
        }
    }

    /// Replaces the rendered children with exactly the given labels, in
    /// order produced by the source collection.
    pub fn set_children(&mut self, children: Vec<String>) {
        self.children = children;
    }

    pub fn children(&self) -> &[String] {
        &self.children
    }

    pub fn class(&self) -> &'static str {
        self.class
    }

    pub fn display_value(&self) -> String {
        self.children
            .iter()
            .map(|label| format!("[{label}]"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
