mod components;
mod view;

pub(crate) use view::render;

use crate::grid::Column;

/// Everything the terminal view needs for one frame, detached from the
/// engine's mutable state.
#[derive(Debug, Clone)]
pub(crate) struct UiSnapshot {
    pub title: String,
    pub master: MasterSnapshot,
    pub detail: Vec<DetailLine>,
    pub status: String,
    pub help: Option<String>,
    pub master_percent: u16,
    pub detail_focused: bool,
}

#[derive(Debug, Clone)]
pub(crate) struct MasterSnapshot {
    pub columns: Vec<Column>,
    pub cells: Vec<Vec<String>>,
    pub cursor: Option<usize>,
}

#[derive(Debug, Clone)]
pub(crate) struct DetailLine {
    pub label: String,
    pub focused: bool,
    pub body: DetailBody,
}

#[derive(Debug, Clone)]
pub(crate) enum DetailBody {
    Scalar {
        value: String,
        error: Option<String>,
    },
    Select {
        summary: String,
    },
    Badges {
        class: &'static str,
        chips: Vec<String>,
    },
}
