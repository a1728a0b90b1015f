//! Notes app dispatcher.
//!
//! # Responsibility
//! - Own the note service, router and the active form draft.
//! - Apply UI actions as commands and expose the active screen snapshot.
//!
//! # Invariants
//! - Rejected actions change neither the store nor the route.
//! - A form draft exists exactly while the add or a resolved edit screen is
//!   active.
//! - The edit screen writes back to the note resolved on entry, by identity.

use crate::config::AppConfig;
use crate::model::note::{NoteId, NoteKey};
use crate::model::validation::{NoteValidationError, ValidationRule};
use crate::router::{Route, Router};
use crate::service::note_service::{NoteService, NoteServiceError};
use crate::store::note_store::{InMemoryNoteStore, NoteStore};
use crate::view::{ListScreen, NoteForm, Screen};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Behavior of the add screen's header back action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddBackPolicy {
    /// Create the note when both fields are non-blank, then return.
    /// Otherwise the back action does nothing.
    #[default]
    Lenient,
    /// Same rule as the submit button.
    Strict,
    /// Return without creating anything.
    Discard,
}

impl AddBackPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lenient => "lenient",
            Self::Strict => "strict",
            Self::Discard => "discard",
        }
    }
}

/// User action sent from a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// List: floating add button.
    OpenAdd,
    /// List: edit button on a row.
    OpenEdit(NoteId),
    /// List: row checkbox.
    ToggleChecked(NoteKey),
    /// List: delete button on a row.
    Delete(NoteKey),
    /// Add/Edit: title text field.
    SetTitle(String),
    /// Add/Edit: subtitle text field.
    SetSubtitle(String),
    /// Add/Edit: "Add Note" / "Save Note" button.
    Submit,
    /// Add/Edit: header back arrow.
    Back,
}

impl Action {
    fn name(&self) -> &'static str {
        match self {
            Self::OpenAdd => "open_add",
            Self::OpenEdit(_) => "open_edit",
            Self::ToggleChecked(_) => "toggle_checked",
            Self::Delete(_) => "delete",
            Self::SetTitle(_) => "set_title",
            Self::SetSubtitle(_) => "set_subtitle",
            Self::Submit => "submit",
            Self::Back => "back",
        }
    }
}

/// Result of one dispatched action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// State changed; the active screen stayed the same.
    Changed,
    /// The active screen changed to this route.
    Navigated(Route),
    /// Nothing happened. The UI shows no feedback.
    Ignored(IgnoreReason),
}

/// Why an action was inert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The form pair failed validation.
    Rejected(NoteValidationError),
    /// The action does not exist on the active screen.
    NotOnScreen,
    /// The target note is gone (or the edit screen is blank).
    NoteMissing,
}

enum Draft {
    Add(NoteForm),
    Edit(NoteForm),
}

/// One app session: store, navigation and the form being edited.
pub struct NotesApp<S: NoteStore> {
    service: NoteService<S>,
    router: Router,
    draft: Option<Draft>,
    add_back: AddBackPolicy,
}

impl NotesApp<InMemoryNoteStore> {
    /// Builds an in-memory session from configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        info!(
            "event=app_session module=app status=ok id_policy={} add_back={}",
            config.id_policy.as_str(),
            config.add_back.as_str()
        );
        Self::new(
            InMemoryNoteStore::with_id_policy(config.id_policy),
            config.add_back,
        )
    }
}

impl Default for NotesApp<InMemoryNoteStore> {
    fn default() -> Self {
        Self::new(InMemoryNoteStore::new(), AddBackPolicy::default())
    }
}

impl<S: NoteStore> NotesApp<S> {
    /// Creates a session on the list screen.
    pub fn new(store: S, add_back: AddBackPolicy) -> Self {
        Self {
            service: NoteService::new(store),
            router: Router::new(),
            draft: None,
            add_back,
        }
    }

    /// Active route.
    pub fn route(&self) -> Route {
        self.router.current()
    }

    /// Note service for read access.
    pub fn service(&self) -> &NoteService<S> {
        &self.service
    }

    pub fn add_back_policy(&self) -> AddBackPolicy {
        self.add_back
    }

    /// Snapshot of the active screen.
    pub fn screen(&self) -> Screen {
        match (self.router.current(), self.draft.as_ref()) {
            (Route::List, _) => Screen::List(ListScreen::from_notes(self.service.notes())),
            (Route::Add, Some(Draft::Add(form))) => Screen::Add(form.snapshot()),
            (Route::Add, _) => Screen::Add(NoteForm::empty().snapshot()),
            (Route::Edit(_), Some(Draft::Edit(form))) => Screen::Edit(Some(form.snapshot())),
            (Route::Edit(_), _) => Screen::Edit(None),
        }
    }

    /// Applies one action to the active screen.
    pub fn dispatch(&mut self, action: Action) -> ActionOutcome {
        let route = self.router.current();
        let name = action.name();
        let outcome = match (route, action) {
            (Route::List, Action::OpenAdd) => self.open_add(),
            (Route::List, Action::OpenEdit(id)) => self.open_edit(id),
            (Route::List, Action::ToggleChecked(key)) => self.toggle(key),
            (Route::List, Action::Delete(key)) => self.delete(key),
            (Route::Add | Route::Edit(_), Action::SetTitle(title)) => {
                self.edit_draft(|form| form.set_title(title))
            }
            (Route::Add | Route::Edit(_), Action::SetSubtitle(subtitle)) => {
                self.edit_draft(|form| form.set_subtitle(subtitle))
            }
            (Route::Add, Action::Submit) => self.submit_add(ValidationRule::Strict),
            (Route::Add, Action::Back) => self.back_from_add(),
            (Route::Edit(_), Action::Submit) => self.submit_edit(),
            (Route::Edit(_), Action::Back) => self.leave_form(),
            _ => ActionOutcome::Ignored(IgnoreReason::NotOnScreen),
        };

        if let ActionOutcome::Ignored(reason) = &outcome {
            debug!(
                "event=action module=app status=ignored action={} route={} reason={}",
                name,
                route,
                ignore_code(reason)
            );
        }
        outcome
    }

    fn open_add(&mut self) -> ActionOutcome {
        self.navigate_to(Route::Add, Some(Draft::Add(NoteForm::empty())))
    }

    fn open_edit(&mut self, id: NoteId) -> ActionOutcome {
        let draft = self
            .service
            .find_note(id)
            .map(|note| Draft::Edit(NoteForm::for_note(note)));
        if draft.is_none() {
            debug!("event=open_edit module=app status=blank id={id}");
        }
        self.navigate_to(Route::Edit(id), draft)
    }

    fn navigate_to(&mut self, route: Route, draft: Option<Draft>) -> ActionOutcome {
        match self.router.navigate(route) {
            Ok(()) => {
                self.draft = draft;
                ActionOutcome::Navigated(route)
            }
            Err(_) => ActionOutcome::Ignored(IgnoreReason::NotOnScreen),
        }
    }

    fn toggle(&mut self, key: NoteKey) -> ActionOutcome {
        match self.service.toggle_checked(key) {
            Ok(_) => ActionOutcome::Changed,
            Err(err) => ignored_from(err),
        }
    }

    fn delete(&mut self, key: NoteKey) -> ActionOutcome {
        match self.service.delete_note(key) {
            Some(_) => ActionOutcome::Changed,
            None => ActionOutcome::Ignored(IgnoreReason::NoteMissing),
        }
    }

    fn edit_draft(&mut self, apply: impl FnOnce(&mut NoteForm)) -> ActionOutcome {
        match self.draft.as_mut() {
            Some(Draft::Add(form)) | Some(Draft::Edit(form)) => {
                apply(form);
                ActionOutcome::Changed
            }
            None => ActionOutcome::Ignored(IgnoreReason::NoteMissing),
        }
    }

    fn submit_add(&mut self, rule: ValidationRule) -> ActionOutcome {
        let Some(Draft::Add(form)) = self.draft.as_ref() else {
            return ActionOutcome::Ignored(IgnoreReason::NotOnScreen);
        };
        match self
            .service
            .create_note(&form.title, &form.subtitle, rule)
        {
            Ok(_) => self.leave_form(),
            Err(err) => ignored_from(err),
        }
    }

    fn back_from_add(&mut self) -> ActionOutcome {
        match self.add_back {
            AddBackPolicy::Lenient => self.submit_add(ValidationRule::NonBlank),
            AddBackPolicy::Strict => self.submit_add(ValidationRule::Strict),
            AddBackPolicy::Discard => self.leave_form(),
        }
    }

    fn submit_edit(&mut self) -> ActionOutcome {
        let Some(Draft::Edit(form)) = self.draft.as_ref() else {
            return ActionOutcome::Ignored(IgnoreReason::NoteMissing);
        };
        let Some(key) = form.target() else {
            return ActionOutcome::Ignored(IgnoreReason::NoteMissing);
        };
        match self.service.edit_note(key, &form.title, &form.subtitle) {
            Ok(_) => self.leave_form(),
            Err(err) => ignored_from(err),
        }
    }

    fn leave_form(&mut self) -> ActionOutcome {
        self.draft = None;
        if self.router.pop_back() {
            ActionOutcome::Navigated(self.router.current())
        } else {
            ActionOutcome::Ignored(IgnoreReason::NotOnScreen)
        }
    }
}

fn ignored_from(err: NoteServiceError) -> ActionOutcome {
    match err {
        NoteServiceError::Validation(reason) => {
            ActionOutcome::Ignored(IgnoreReason::Rejected(reason))
        }
        NoteServiceError::NoteNotFound(_) => ActionOutcome::Ignored(IgnoreReason::NoteMissing),
    }
}

fn ignore_code(reason: &IgnoreReason) -> &'static str {
    match reason {
        IgnoreReason::Rejected(err) => err.code(),
        IgnoreReason::NotOnScreen => "not_on_screen",
        IgnoreReason::NoteMissing => "note_missing",
    }
}
