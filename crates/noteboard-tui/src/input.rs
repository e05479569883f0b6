use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Mode};

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    MoveItemUp,   // 'K': swap selected todo with the one above
    MoveItemDown, // 'J': swap selected todo with the one below
    ToggleDone,
    NewTodo,
    Delete,
    ShowHelp,
    InputChar(char),
    Backspace,
    Confirm,
    Cancel,
    None,
}

/// Map a key press to an action for the current mode
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    match &app.mode {
        Mode::Insert(_) => match key.code {
            KeyCode::Enter => Action::Confirm,
            KeyCode::Esc => Action::Cancel,
            KeyCode::Backspace => Action::Backspace,
            KeyCode::Char(c) => Action::InputChar(c),
            _ => Action::None,
        },
        Mode::Help => Action::Cancel,
        Mode::Normal => match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
            KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
            KeyCode::Char('J') => Action::MoveItemDown,
            KeyCode::Char('K') => Action::MoveItemUp,
            KeyCode::Char(' ') | KeyCode::Char('x') => Action::ToggleDone,
            KeyCode::Char('o') => Action::NewTodo,
            KeyCode::Char('d') => Action::Delete,
            KeyCode::Char('?') => Action::ShowHelp,
            KeyCode::Esc => Action::Cancel,
            _ => Action::None,
        },
    }
}

/// Apply an action to the app state
pub fn apply_action(app: &mut App, action: Action) {
    // Any key while dragging aborts the drag before acting
    if action != Action::None {
        app.cancel_drag();
    }

    match action {
        Action::Quit => app.should_quit = true,
        Action::MoveUp => app.select_prev(),
        Action::MoveDown => app.select_next(),
        Action::MoveItemUp => app.move_selected(-1),
        Action::MoveItemDown => app.move_selected(1),
        Action::ToggleDone => app.toggle_selected(),
        Action::NewTodo => app.begin_insert(),
        Action::Delete => app.delete_selected(),
        Action::ShowHelp => app.mode = Mode::Help,
        Action::InputChar(c) => {
            if let Mode::Insert(buffer) = &mut app.mode {
                buffer.push(c);
            }
        }
        Action::Backspace => {
            if let Mode::Insert(buffer) = &mut app.mode {
                buffer.pop();
            }
        }
        Action::Confirm => app.commit_insert(),
        Action::Cancel => {
            app.mode = Mode::Normal;
            app.status_message = None;
        }
        Action::None => {}
    }
}
