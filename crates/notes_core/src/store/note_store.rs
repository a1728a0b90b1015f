//! Ordered in-memory note collection.
//!
//! # Responsibility
//! - Provide add/remove/find/toggle/update over one ordered `Vec<Note>`.
//! - Assign note ids according to the configured `IdPolicy`.
//!
//! # Invariants
//! - `remove` never errors and is a no-op for unknown keys.
//! - `find` returns the first note with a matching id.
//! - Under `IdPolicy::Monotonic` ids are never reused within a session.

use crate::model::note::{Note, NoteId, NoteKey};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error for identity-based mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    NotFound(NoteKey),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(key) => write!(f, "note not found: {key}"),
        }
    }
}

impl Error for StoreError {}

/// Source of `Note::id` for newly added notes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdPolicy {
    /// Session counter, independent of collection size.
    ///
    /// Default. Differs from the plain `id = len()` rule: an add after a
    /// delete never reuses a live note's id. `CollectionSize` keeps the
    /// `len()` numbering.
    #[default]
    Monotonic,
    /// `id = len()` at creation time. Ids collide after deletes.
    CollectionSize,
}

impl IdPolicy {
    /// Stable string id used by configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Monotonic => "monotonic",
            Self::CollectionSize => "collection_size",
        }
    }
}

/// Store interface used by the note service.
pub trait NoteStore {
    /// Appends a new unchecked note and returns a copy of it.
    fn add(&mut self, title: &str, subtitle: &str) -> Note;
    /// Removes the note with this identity, returning it when present.
    fn remove(&mut self, key: NoteKey) -> Option<Note>;
    /// First note whose `id` matches.
    fn find(&self, id: NoteId) -> Option<&Note>;
    /// Note with this identity.
    fn get(&self, key: NoteKey) -> Option<&Note>;
    /// Flips `checked` in place and returns the new value.
    fn toggle_checked(&mut self, key: NoteKey) -> StoreResult<bool>;
    /// Overwrites title/subtitle in place; id, checked and position stay.
    fn update(&mut self, key: NoteKey, title: &str, subtitle: &str) -> StoreResult<()>;
    /// All notes in insertion order.
    fn notes(&self) -> &[Note];

    fn len(&self) -> usize {
        self.notes().len()
    }

    fn is_empty(&self) -> bool {
        self.notes().is_empty()
    }
}

/// Process-memory note store.
#[derive(Debug, Default)]
pub struct InMemoryNoteStore {
    notes: Vec<Note>,
    id_policy: IdPolicy,
    next_id: NoteId,
}

impl InMemoryNoteStore {
    /// Creates an empty store with the default (`Monotonic`) id policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with an explicit id policy.
    pub fn with_id_policy(id_policy: IdPolicy) -> Self {
        Self {
            notes: Vec::new(),
            id_policy,
            next_id: 0,
        }
    }

    pub fn id_policy(&self) -> IdPolicy {
        self.id_policy
    }

    fn allocate_id(&mut self) -> NoteId {
        match self.id_policy {
            IdPolicy::Monotonic => {
                let id = self.next_id;
                self.next_id = self.next_id.saturating_add(1);
                id
            }
            IdPolicy::CollectionSize => {
                NoteId::try_from(self.notes.len()).unwrap_or(NoteId::MAX)
            }
        }
    }

    fn position(&self, key: NoteKey) -> Option<usize> {
        self.notes.iter().position(|note| note.key == key)
    }

    fn get_mut(&mut self, key: NoteKey) -> StoreResult<&mut Note> {
        self.notes
            .iter_mut()
            .find(|note| note.key == key)
            .ok_or(StoreError::NotFound(key))
    }
}

impl NoteStore for InMemoryNoteStore {
    fn add(&mut self, title: &str, subtitle: &str) -> Note {
        let note = Note::new(self.allocate_id(), title, subtitle);
        self.notes.push(note.clone());
        note
    }

    fn remove(&mut self, key: NoteKey) -> Option<Note> {
        let index = self.position(key)?;
        Some(self.notes.remove(index))
    }

    fn find(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    fn get(&self, key: NoteKey) -> Option<&Note> {
        self.notes.iter().find(|note| note.key == key)
    }

    fn toggle_checked(&mut self, key: NoteKey) -> StoreResult<bool> {
        Ok(self.get_mut(key)?.toggle_checked())
    }

    fn update(&mut self, key: NoteKey, title: &str, subtitle: &str) -> StoreResult<()> {
        let note = self.get_mut(key)?;
        note.title = title.to_string();
        note.subtitle = subtitle.to_string();
        Ok(())
    }

    fn notes(&self) -> &[Note] {
        &self.notes
    }
}
