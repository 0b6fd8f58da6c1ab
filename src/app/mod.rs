mod auto_grid;
mod controller;
pub(crate) mod input;
mod options;
mod runtime;
mod status;
mod terminal;

pub use auto_grid::AutoGrid;
pub use controller::{DeleteOutcome, MasterDetailController, SaveOutcome};
pub use options::UiOptions;
