//! Add/edit form draft.
//!
//! # Invariants
//! - A draft is created fresh on every entry into the add or edit screen.
//! - Drafts never write to the store; the app dispatcher does on submit.

use crate::model::note::{Note, NoteId, NoteKey};
use crate::model::validation::{NoteValidationError, ValidationRule};

/// Editable `(title, subtitle)` pair plus the note it edits, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteForm {
    pub title: String,
    pub subtitle: String,
    target: Option<NoteKey>,
    note_id: Option<NoteId>,
}

impl NoteForm {
    /// Empty draft for the add screen.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Draft pre-filled from an existing note for the edit screen.
    pub fn for_note(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            subtitle: note.subtitle.clone(),
            target: Some(note.key),
            note_id: Some(note.id),
        }
    }

    /// Identity of the note being edited; `None` on the add screen.
    pub fn target(&self) -> Option<NoteKey> {
        self.target
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_subtitle(&mut self, subtitle: impl Into<String>) {
        self.subtitle = subtitle.into();
    }

    /// Checks the draft against a rule.
    pub fn check(&self, rule: ValidationRule) -> Result<(), NoteValidationError> {
        rule.check(&self.title, &self.subtitle)
    }

    /// Snapshot for rendering; `can_submit` uses the strict rule.
    pub fn snapshot(&self) -> FormScreen {
        FormScreen {
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            note_id: self.note_id,
            can_submit: self.check(ValidationRule::Strict).is_ok(),
        }
    }
}

/// Rendered form: two text inputs and the submit/save button state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormScreen {
    pub title: String,
    pub subtitle: String,
    /// Id of the edited note; `None` on the add screen.
    pub note_id: Option<NoteId>,
    pub can_submit: bool,
}
