use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use tracing::warn;

use crate::domain::{read_field, value_to_string};
use crate::gateway::DataSourceGateway;
use crate::presentation::{self, DetailBody, DetailLine, MasterSnapshot, UiSnapshot};

use super::auto_grid::AutoGrid;
use super::controller::{DeleteOutcome, SaveOutcome};
use super::input::{self, AppCommand, Focus};
use super::status::StatusLine;
use super::terminal::TerminalGuard;

const MASTER_HELP: &str = "↑/↓ rows · Enter edit · Ctrl+D delete · Ctrl+Q quit";
const DETAIL_HELP: &str = "Tab/↓ next field · Esc cancel · Ctrl+S save · Ctrl+D delete";

/// The interactive event loop around a constructed engine. Events are
/// handled strictly in arrival order; gateway calls block the triggering
/// event until they return.
pub(crate) struct App<G: DataSourceGateway> {
    grid: AutoGrid<G>,
    status: StatusLine,
    focus: Focus,
    row_cursor: usize,
    field_cursor: usize,
    exit_armed: bool,
    should_quit: bool,
}

impl<G: DataSourceGateway> App<G> {
    pub fn new(grid: AutoGrid<G>) -> Self {
        Self {
            grid,
            status: StatusLine::new(),
            focus: Focus::Master,
            row_cursor: 0,
            field_cursor: 0,
            exit_armed: false,
            should_quit: false,
        }
    }

    pub fn run(mut self) -> Result<()> {
        let mut terminal = TerminalGuard::new()?;
        while !self.should_quit {
            let snapshot = self.snapshot();
            terminal.draw(|frame| presentation::render(frame, &snapshot))?;
            if event::poll(self.grid.options().tick_rate)?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                self.handle_key(&key);
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: &KeyEvent) {
        let Some(command) = input::route(key, self.focus) else {
            return;
        };
        if command != AppCommand::Quit {
            self.exit_armed = false;
        }
        match command {
            AppCommand::Quit => self.on_quit(),
            AppCommand::Save => self.on_save(),
            AppCommand::Delete => self.on_delete(),
            AppCommand::RowStep(delta) => self.step_row(delta),
            AppCommand::Edit => self.on_edit(),
            AppCommand::Back => self.on_back(),
            AppCommand::FieldStep(delta) => self.step_field(delta),
            AppCommand::Forward => self.forward_to_widget(key),
        }
    }

    fn on_quit(&mut self) {
        if self.focus == Focus::Detail
            && self.grid.controller().binder().is_dirty()
            && !self.exit_armed
        {
            self.exit_armed = true;
            self.status.pending_exit();
            return;
        }
        self.should_quit = true;
    }

    fn on_edit(&mut self) {
        if self.grid.controller().row_count() == 0 {
            return;
        }
        let index = self.row_cursor;
        self.field_cursor = 0;
        match self.grid.controller_mut().select_row(index) {
            Ok(()) => {
                if let Some(label) = self.focused_label() {
                    self.status.editing(&label);
                }
            }
            Err(error) => {
                warn!(%error, "collection fill failed on selection");
                self.status.set_raw(error.to_string());
            }
        }
        self.focus = Focus::Detail;
    }

    fn on_back(&mut self) {
        self.grid.controller_mut().cancel();
        self.focus = Focus::Master;
        self.status.ready();
    }

    fn on_save(&mut self) {
        match self.grid.controller_mut().save() {
            Ok(SaveOutcome::Saved) => {
                self.focus = Focus::Master;
                self.clamp_row_cursor();
                self.status.data_updated();
            }
            Ok(SaveOutcome::Invalid(errors)) => self.status.validation_failed(errors.len()),
            Ok(SaveOutcome::NothingSelected) => {}
            Err(error) => {
                warn!(%error, "save failed");
                self.status.set_raw(error.to_string());
            }
        }
    }

    fn on_delete(&mut self) {
        if self.grid.controller().selected_index().is_none() {
            if self.grid.controller().row_count() == 0 {
                return;
            }
            let index = self.row_cursor;
            if let Err(error) = self.grid.controller_mut().select_row(index) {
                // delete needs only the id; a collection failure is not fatal
                warn!(%error, "collection fill failed before delete");
            }
        }
        match self.grid.controller_mut().delete() {
            Ok(DeleteOutcome::Deleted) => {
                self.focus = Focus::Master;
                self.clamp_row_cursor();
                self.status.entry_deleted();
            }
            Ok(DeleteOutcome::NothingSelected) => {}
            Err(error) => {
                warn!(%error, "delete failed");
                self.status.set_raw(error.to_string());
            }
        }
    }

    fn step_row(&mut self, delta: i32) {
        let count = self.grid.controller().row_count();
        if count == 0 {
            return;
        }
        let next = (self.row_cursor as i32 + delta).clamp(0, count as i32 - 1);
        self.row_cursor = next as usize;
    }

    fn step_field(&mut self, delta: i32) {
        let count = self.grid.schema().fields().len();
        if count == 0 {
            return;
        }
        let next = (self.field_cursor as i32 + delta).rem_euclid(count as i32);
        self.field_cursor = next as usize;
        if let Some(label) = self.focused_label() {
            self.status.editing(&label);
        }
    }

    fn forward_to_widget(&mut self, key: &KeyEvent) {
        let Some((name, is_collection)) = self
            .grid
            .schema()
            .fields()
            .get(self.field_cursor)
            .map(|spec| (spec.name.clone(), spec.is_collection()))
        else {
            return;
        };
        if is_collection {
            let delta = match key.code {
                KeyCode::Left => -1,
                KeyCode::Right => 1,
                _ => return,
            };
            self.grid.controller().adapters().select(&name, delta);
        } else {
            self.grid
                .controller_mut()
                .binder_mut()
                .handle_key(&name, key);
        }
    }

    fn focused_label(&self) -> Option<String> {
        self.grid
            .schema()
            .fields()
            .get(self.field_cursor)
            .map(|spec| spec.label.clone())
    }

    fn clamp_row_cursor(&mut self) {
        let count = self.grid.controller().row_count();
        self.row_cursor = self.row_cursor.min(count.saturating_sub(1));
    }

    fn snapshot(&self) -> UiSnapshot {
        let controller = self.grid.controller();
        let columns = self.grid.columns().to_vec();

        let cells = controller
            .rows()
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|column| match read_field(row, &column.key) {
                        Ok(value) => value_to_string(value),
                        Err(_) => String::new(),
                    })
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        let cursor = if controller.row_count() == 0 {
            None
        } else {
            Some(self.row_cursor.min(controller.row_count() - 1))
        };

        let detail = self
            .grid
            .schema()
            .fields()
            .iter()
            .enumerate()
            .map(|(index, spec)| {
                let focused = self.focus == Focus::Detail && index == self.field_cursor;
                let body = if spec.is_collection() {
                    match controller.adapters().view(&spec.name) {
                        Some(view) => match view.display.badge_class() {
                            None => DetailBody::Select {
                                summary: view.summary,
                            },
                            Some(class) => DetailBody::Badges {
                                class,
                                chips: view.children,
                            },
                        },
                        None => DetailBody::Scalar {
                            value: String::new(),
                            error: None,
                        },
                    }
                } else {
                    DetailBody::Scalar {
                        value: controller
                            .binder()
                            .display_value(&spec.name)
                            .unwrap_or_default(),
                        error: controller.binder().error(&spec.name).map(str::to_string),
                    }
                };
                DetailLine {
                    label: spec.label.clone(),
                    focused,
                    body,
                }
            })
            .collect();

        let options = self.grid.options();
        UiSnapshot {
            title: self.grid.schema().title().unwrap_or("Entries").to_string(),
            master: MasterSnapshot {
                columns,
                cells,
                cursor,
            },
            detail,
            status: self.status.message().to_string(),
            help: options.show_help.then(|| {
                match self.focus {
                    Focus::Master => MASTER_HELP,
                    Focus::Detail => DETAIL_HELP,
                }
                .to_string()
            }),
            master_percent: options.master_percent,
            detail_focused: self.focus == Focus::Detail,
        }
    }
}
