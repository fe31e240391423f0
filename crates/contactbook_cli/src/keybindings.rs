//! Keybinding definitions

use crossterm::event::{KeyCode, KeyModifiers};

/// Keybinding action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Create a contact from the form
    Add,
    /// Overwrite the selected contact
    Update,
    /// Ask to delete the selected contact
    Delete,
    /// Run a name search
    Search,
    /// Drop the selection and clear the form
    ClearSelection,
    /// Focus the next input
    FocusNext,
    /// Focus the previous input
    FocusPrev,
}

/// Get the action for a key that works regardless of focus
pub fn global_action(code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    match code {
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl => Some(Action::Quit),
        KeyCode::Char('a') if ctrl => Some(Action::Add),
        KeyCode::Char('u') if ctrl => Some(Action::Update),
        KeyCode::Char('d') if ctrl => Some(Action::Delete),
        KeyCode::Char('f') if ctrl => Some(Action::Search),
        KeyCode::F(2) => Some(Action::Add),
        KeyCode::F(3) => Some(Action::Update),
        KeyCode::F(4) => Some(Action::Delete),
        KeyCode::F(5) => Some(Action::Search),
        KeyCode::Esc => Some(Action::ClearSelection),
        KeyCode::Tab => Some(Action::FocusNext),
        KeyCode::BackTab => Some(Action::FocusPrev),
        _ => None,
    }
}
