//! Terminal application state: focus, table cursor and key dispatch.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::widgets::TableState;

use contactbook_core::{ContactStore, ContactView, FormField, ViewResult, ViewState};

use crate::keybindings::{global_action, Action};

/// Input that receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FormField),
    Search,
    List,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Field(FormField::Name),
        Focus::Field(FormField::PhoneNumber),
        Focus::Field(FormField::Email),
        Focus::Search,
        Focus::List,
    ];

    fn position(self) -> usize {
        Self::ORDER
            .iter()
            .position(|focus| *focus == self)
            .unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

/// Main application state
pub struct App<S: ContactStore> {
    pub view: ContactView<S>,
    pub focus: Focus,
    pub table_state: TableState,
    pub status_message: Option<String>,
}

impl<S: ContactStore> App<S> {
    pub fn new(view: ContactView<S>) -> Self {
        let count = view.rows().len();
        Self {
            view,
            focus: Focus::Field(FormField::Name),
            table_state: TableState::default(),
            status_message: Some(format!("{count} contact(s) loaded.")),
        }
    }

    /// Handle a key press, returns true if app should quit
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        if self.view.notice().is_some() {
            if matches!(code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.view.dismiss_notice();
            }
            return false;
        }

        if let ViewState::ConfirmingDelete(_) = self.view.state() {
            self.handle_confirm_key(code);
            return false;
        }

        if let Some(action) = global_action(code, modifiers) {
            return self.dispatch(action);
        }

        match self.focus {
            Focus::Field(field) => self.handle_text_key(code, modifiers, Some(field)),
            Focus::Search => self.handle_text_key(code, modifiers, None),
            Focus::List => self.handle_list_key(code),
        }
        false
    }

    fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::Add => {
                let result = self.view.add().map(|id| format!("Contact {id} added."));
                self.finish(result);
            }
            Action::Update => {
                let result = self.view.update().map(|id| format!("Contact {id} updated."));
                self.finish(result);
            }
            Action::Delete => {
                let result = self
                    .view
                    .request_delete()
                    .map(|id| format!("Delete contact {id}? Press y to confirm, n to cancel."));
                self.finish(result);
            }
            Action::Search => self.run_search(),
            Action::ClearSelection => {
                self.view.clear_selection();
                self.status_message = None;
                self.sync_table();
            }
            Action::FocusNext => self.focus = self.focus.next(),
            Action::FocusPrev => self.focus = self.focus.prev(),
        }
        false
    }

    fn handle_confirm_key(&mut self, code: KeyCode) {
        let confirmed = match code {
            KeyCode::Char('y') | KeyCode::Char('Y') => true,
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => false,
            _ => return,
        };
        let result = self.view.confirm_delete(confirmed).map(|removed| {
            if removed {
                "Contact deleted.".to_string()
            } else {
                "Delete cancelled.".to_string()
            }
        });
        self.finish(result);
    }

    /// `field == None` edits the search input.
    fn handle_text_key(&mut self, code: KeyCode, modifiers: KeyModifiers, field: Option<FormField>) {
        let text = match field {
            Some(field) => self.view.form_mut().field_mut(field),
            None => self.view.search_term_mut(),
        };
        match code {
            KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => text.push(c),
            KeyCode::Backspace => {
                text.pop();
            }
            KeyCode::Enter if field.is_none() => self.run_search(),
            KeyCode::Enter | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::Up => self.focus = self.focus.prev(),
            _ => {}
        }
    }

    fn handle_list_key(&mut self, code: KeyCode) {
        let len = self.view.rows().len();
        if len == 0 {
            return;
        }
        let current = self.view.selection().map(|selection| selection.index);
        let target = match code {
            KeyCode::Down | KeyCode::Char('j') => current.map_or(0, |i| (i + 1).min(len - 1)),
            KeyCode::Up | KeyCode::Char('k') => current.map_or(0, |i| i.saturating_sub(1)),
            KeyCode::Home => 0,
            KeyCode::End => len - 1,
            _ => return,
        };
        self.view.select_row(target);
        self.sync_table();
    }

    fn run_search(&mut self) {
        let result = self
            .view
            .search()
            .map(|count| format!("{count} contact(s) shown."));
        self.finish(result);
    }

    fn finish(&mut self, result: ViewResult<String>) {
        match result {
            Ok(message) => self.status_message = Some(message),
            Err(err) => {
                self.status_message = None;
                self.view.report(&err);
            }
        }
        self.sync_table();
    }

    /// Mirrors the view selection into the table cursor.
    fn sync_table(&mut self) {
        self.table_state
            .select(self.view.selection().map(|selection| selection.index));
    }
}
