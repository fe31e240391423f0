//! Contact view state machine.
//!
//! # Responsibility
//! - Own the form, rendered rows, selection and modal notice of one session.
//! - Dispatch Add/Update/Delete/Search intents to the store.
//!
//! # Invariants
//! - `selection`, when set, points at a row of `rows` with the same id.
//! - Successful mutations clear the form and selection, then reload the full
//!   unfiltered list.
//! - Delete only reaches the store after `confirm_delete(true)`.

use super::form::ContactForm;
use crate::model::contact::{Contact, ContactId, ContactValidationError};
use crate::repo::contact_repo::RepoError;
use crate::service::contact_store::ContactStore;
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ViewResult<T> = Result<T, ViewError>;

/// Intent that needs a selected row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewAction {
    Update,
    Delete,
}

impl ViewAction {
    fn verb(self) -> &'static str {
        match self {
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// Failure surfaced to the user as a modal notice.
#[derive(Debug)]
pub enum ViewError {
    /// Required form field missing.
    UserInput(ContactValidationError),
    /// Update/Delete invoked without a selected row.
    NoSelection { action: ViewAction },
    /// Target contact vanished from the store.
    NotFound(ContactId),
    /// Underlying read/write failure.
    Storage(RepoError),
}

impl ViewError {
    /// Short title for the notice window.
    pub fn title(&self) -> &'static str {
        match self {
            Self::UserInput(_) => "Missing Information",
            Self::NoSelection { .. } => "Error",
            Self::NotFound(_) => "Contact Not Found",
            Self::Storage(_) => "Storage Error",
        }
    }
}

impl Display for ViewError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UserInput(err) => write!(f, "Cannot save contact: {err}."),
            Self::NoSelection { action } => {
                write!(f, "Please select a contact to {}.", action.verb())
            }
            Self::NotFound(id) => write!(
                f,
                "Contact {id} no longer exists. The list has been reloaded."
            ),
            Self::Storage(err) => write!(f, "Could not access the contact book: {err}"),
        }
    }
}

impl Error for ViewError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::UserInput(err) => Some(err),
            Self::Storage(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ContactValidationError> for ViewError {
    fn from(value: ContactValidationError) -> Self {
        Self::UserInput(value)
    }
}

impl From<RepoError> for ViewError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::UserInput(err),
            RepoError::NotFound(id) => Self::NotFound(id),
            other => Self::Storage(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Modal message awaiting dismissal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Which rows are currently rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListFilter {
    /// Full listing ordered by name.
    All,
    /// Name search results in insertion order.
    Search(String),
}

/// Selected rendered row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub index: usize,
    pub id: ContactId,
}

/// Coarse session state derived from the view fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Idle,
    Selected(ContactId),
    ConfirmingDelete(ContactId),
}

/// Interactive contact view bound to a store.
pub struct ContactView<S: ContactStore> {
    store: S,
    form: ContactForm,
    search_term: String,
    rows: Vec<Contact>,
    filter: ListFilter,
    selection: Option<Selection>,
    pending_delete: Option<ContactId>,
    notice: Option<Notice>,
}

impl<S: ContactStore> ContactView<S> {
    /// Initializes the store and renders the full list.
    pub fn open(store: S) -> ViewResult<Self> {
        store.initialize()?;
        let mut view = Self {
            store,
            form: ContactForm::default(),
            search_term: String::new(),
            rows: Vec::new(),
            filter: ListFilter::All,
            selection: None,
            pending_delete: None,
            notice: None,
        };
        view.reload()?;
        Ok(view)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn rows(&self) -> &[Contact] {
        &self.rows
    }

    pub fn filter(&self) -> &ListFilter {
        &self.filter
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn search_term_mut(&mut self) -> &mut String {
        &mut self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn pending_delete(&self) -> Option<ContactId> {
        self.pending_delete
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn state(&self) -> ViewState {
        match (self.pending_delete, self.selection) {
            (Some(id), _) => ViewState::ConfirmingDelete(id),
            (None, Some(selection)) => ViewState::Selected(selection.id),
            (None, None) => ViewState::Idle,
        }
    }

    /// Selects a rendered row and copies its displayed values into the form.
    ///
    /// An out-of-range index clears the selection and leaves the form alone.
    pub fn select_row(&mut self, index: usize) -> Option<&Contact> {
        self.pending_delete = None;
        match self.rows.get(index) {
            Some(contact) => {
                self.form.fill_from(contact);
                self.selection = Some(Selection {
                    index,
                    id: contact.id,
                });
                Some(contact)
            }
            None => {
                self.selection = None;
                None
            }
        }
    }

    /// Drops the selection and empties the form.
    pub fn clear_selection(&mut self) {
        self.selection = None;
        self.pending_delete = None;
        self.form.clear();
    }

    /// Creates a contact from the form.
    pub fn add(&mut self) -> ViewResult<ContactId> {
        let draft = self.form.to_draft();
        draft.validate()?;
        let id = self.store.create(&draft)?;
        debug!("event=view_add module=view status=ok contact_id={id}");
        self.finish_mutation()?;
        Ok(id)
    }

    /// Overwrites the selected contact with the form values.
    pub fn update(&mut self) -> ViewResult<ContactId> {
        let id = self.require_selection(ViewAction::Update)?;
        let draft = self.form.to_draft();
        draft.validate()?;

        if let Err(err) = self.store.update(id, &draft) {
            return Err(self.resync_after(err.into()));
        }
        debug!("event=view_update module=view status=ok contact_id={id}");
        self.finish_mutation()?;
        Ok(id)
    }

    /// Starts delete confirmation for the selected contact.
    pub fn request_delete(&mut self) -> ViewResult<ContactId> {
        let id = self.require_selection(ViewAction::Delete)?;
        self.pending_delete = Some(id);
        Ok(id)
    }

    /// Resolves a pending delete; returns whether a contact was removed.
    pub fn confirm_delete(&mut self, confirmed: bool) -> ViewResult<bool> {
        let id = self.pending_delete.take().ok_or(ViewError::NoSelection {
            action: ViewAction::Delete,
        })?;
        if !confirmed {
            return Ok(false);
        }

        match self.store.delete(id) {
            Ok(true) => {
                debug!("event=view_delete module=view status=ok contact_id={id}");
                self.finish_mutation()?;
                Ok(true)
            }
            Ok(false) => Err(self.resync_after(ViewError::NotFound(id))),
            Err(err) => Err(self.resync_after(err.into())),
        }
    }

    /// Runs a name search with the current search term.
    ///
    /// An empty term clears the filter and shows the full list again.
    /// Returns the number of rendered rows.
    /// A failed read leaves the previous filter and rows in place.
    pub fn search(&mut self) -> ViewResult<usize> {
        let filter = if self.search_term.is_empty() {
            ListFilter::All
        } else {
            ListFilter::Search(self.search_term.clone())
        };
        self.apply_filter(filter)?;

        if matches!(self.filter, ListFilter::Search(_)) && self.rows.is_empty() {
            self.notice = Some(Notice::info("Search Result", "No contacts found."));
        }
        Ok(self.rows.len())
    }

    /// Re-reads rows for the current filter; drops the selection.
    pub fn reload(&mut self) -> ViewResult<()> {
        self.apply_filter(self.filter.clone())
    }

    /// Shows an error as a modal notice.
    pub fn report(&mut self, err: &ViewError) {
        warn!(
            "event=view_error module=view status=error title={} error={}",
            err.title(),
            err
        );
        self.notice = Some(Notice::error(err.title(), err.to_string()));
    }

    fn require_selection(&self, action: ViewAction) -> ViewResult<ContactId> {
        self.selection
            .map(|selection| selection.id)
            .ok_or(ViewError::NoSelection { action })
    }

    /// Fetches rows for `filter`, then commits filter and rows together.
    fn apply_filter(&mut self, filter: ListFilter) -> ViewResult<()> {
        let rows = match &filter {
            ListFilter::All => self.store.list_all()?,
            ListFilter::Search(term) => self.store.search(term)?,
        };
        self.selection = None;
        self.pending_delete = None;
        self.filter = filter;
        self.rows = rows;
        Ok(())
    }

    fn finish_mutation(&mut self) -> ViewResult<()> {
        self.form.clear();
        self.apply_filter(ListFilter::All)
    }

    /// Reloads after a failed write so stale rows are not edited again.
    ///
    /// The form keeps the user's values. A failing reload replaces the
    /// not-found error with the storage error.
    fn resync_after(&mut self, err: ViewError) -> ViewError {
        if !matches!(err, ViewError::NotFound(_)) {
            return err;
        }
        match self.reload() {
            Ok(()) => err,
            Err(reload_err) => reload_err,
        }
    }
}
