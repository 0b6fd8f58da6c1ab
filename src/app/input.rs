use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Which region currently receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    Master,
    Detail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AppCommand {
    Quit,
    Save,
    Delete,
    RowStep(i32),
    Edit,
    Back,
    FieldStep(i32),
    /// Anything else while the form has focus goes to the focused widget.
    Forward,
}

pub(crate) fn route(key: &KeyEvent, focus: Focus) -> Option<AppCommand> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('q') => return Some(AppCommand::Quit),
            KeyCode::Char('s') => return Some(AppCommand::Save),
            KeyCode::Char('d') => return Some(AppCommand::Delete),
            _ => {}
        }
    }
    match focus {
        Focus::Master => match key.code {
            KeyCode::Up => Some(AppCommand::RowStep(-1)),
            KeyCode::Down => Some(AppCommand::RowStep(1)),
            KeyCode::Enter => Some(AppCommand::Edit),
            KeyCode::Esc => Some(AppCommand::Quit),
            _ => None,
        },
        Focus::Detail => match key.code {
            KeyCode::Tab | KeyCode::Down => Some(AppCommand::FieldStep(1)),
            KeyCode::BackTab | KeyCode::Up => Some(AppCommand::FieldStep(-1)),
            KeyCode::Esc => Some(AppCommand::Back),
            _ => Some(AppCommand::Forward),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_chords_win_in_any_focus() {
        let save = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(route(&save, Focus::Master), Some(AppCommand::Save));
        assert_eq!(route(&save, Focus::Detail), Some(AppCommand::Save));
    }

    #[test]
    fn master_arrows_move_the_row_cursor() {
        assert_eq!(
            route(&KeyEvent::from(KeyCode::Up), Focus::Master),
            Some(AppCommand::RowStep(-1))
        );
        assert_eq!(
            route(&KeyEvent::from(KeyCode::Enter), Focus::Master),
            Some(AppCommand::Edit)
        );
    }

    #[test]
    fn detail_keys_fall_through_to_the_widget() {
        assert_eq!(
            route(&KeyEvent::from(KeyCode::Char('x')), Focus::Detail),
            Some(AppCommand::Forward)
        );
        assert_eq!(
            route(&KeyEvent::from(KeyCode::Esc), Focus::Detail),
            Some(AppCommand::Back)
        );
    }
}
