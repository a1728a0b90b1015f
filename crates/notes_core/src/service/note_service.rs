//! Note use-case service.
//!
//! # Responsibility
//! - Provide create/edit/toggle/delete/find APIs for the screens.
//! - Run the validation rule before every title/subtitle write.
//! - Emit metadata-only log events for every mutation.
//!
//! # Invariants
//! - A rejected pair leaves the store untouched.
//! - Log events never include title or subtitle text.

use crate::model::note::{Note, NoteId, NoteKey};
use crate::model::validation::{NoteValidationError, ValidationRule};
use crate::store::note_store::{NoteStore, StoreError};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for note use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteServiceError {
    /// Input pair failed the applied validation rule.
    Validation(NoteValidationError),
    /// Target note does not exist.
    NoteNotFound(NoteKey),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NoteNotFound(key) => write!(f, "note not found: {key}"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NoteNotFound(_) => None,
        }
    }
}

impl From<NoteValidationError> for NoteServiceError {
    fn from(value: NoteValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for NoteServiceError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound(key) => Self::NoteNotFound(key),
        }
    }
}

/// Note service facade over store implementations.
#[derive(Debug)]
pub struct NoteService<S: NoteStore> {
    store: S,
}

impl<S: NoteStore> NoteService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Validates the pair with `rule` and appends a new note.
    pub fn create_note(
        &mut self,
        title: &str,
        subtitle: &str,
        rule: ValidationRule,
    ) -> Result<Note, NoteServiceError> {
        if let Err(err) = rule.check(title, subtitle) {
            debug!(
                "event=note_create module=service status=rejected rule={:?} reason={}",
                rule,
                err.code()
            );
            return Err(err.into());
        }

        let note = self.store.add(title, subtitle);
        info!(
            "event=note_create module=service status=ok id={} total={}",
            note.id,
            self.store.len()
        );
        Ok(note)
    }

    /// Overwrites title/subtitle of one note under the strict rule.
    ///
    /// `id`, `checked` and list position are preserved.
    pub fn edit_note(
        &mut self,
        key: NoteKey,
        title: &str,
        subtitle: &str,
    ) -> Result<Note, NoteServiceError> {
        if let Err(err) = ValidationRule::Strict.check(title, subtitle) {
            debug!(
                "event=note_edit module=service status=rejected reason={}",
                err.code()
            );
            return Err(err.into());
        }

        self.store.update(key, title, subtitle)?;
        let note = self
            .store
            .get(key)
            .cloned()
            .ok_or(NoteServiceError::NoteNotFound(key))?;
        info!("event=note_edit module=service status=ok id={}", note.id);
        Ok(note)
    }

    /// Flips the checkbox of one note and returns the new state.
    pub fn toggle_checked(&mut self, key: NoteKey) -> Result<bool, NoteServiceError> {
        let checked = self.store.toggle_checked(key)?;
        debug!("event=note_toggle module=service status=ok checked={checked}");
        Ok(checked)
    }

    /// Deletes one note by identity. Unknown keys are a silent no-op.
    pub fn delete_note(&mut self, key: NoteKey) -> Option<Note> {
        let removed = self.store.remove(key);
        match removed.as_ref() {
            Some(note) => info!(
                "event=note_delete module=service status=ok id={} total={}",
                note.id,
                self.store.len()
            ),
            None => debug!("event=note_delete module=service status=noop"),
        }
        removed
    }

    /// First note with a matching routing id.
    pub fn find_note(&self, id: NoteId) -> Option<&Note> {
        self.store.find(id)
    }

    /// Note with this identity.
    pub fn get_note(&self, key: NoteKey) -> Option<&Note> {
        self.store.get(key)
    }

    /// All notes in list order.
    pub fn notes(&self) -> &[Note] {
        self.store.notes()
    }

    /// Read access to the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
