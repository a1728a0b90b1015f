//! Note record.
//!
//! # Responsibility
//! - Define the single entity of the notes app.
//! - Separate routing number (`id`) from record identity (`key`).
//!
//! # Invariants
//! - `key` is generated once per note and never reused.
//! - `id` is assigned by the store's id policy and is not guaranteed unique.
//! - `checked` starts as `false` and is only changed by explicit toggles.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Routing number shown to the router (`editNote/{id}`).
pub type NoteId = u32;

/// Process-unique record identity used for delete/toggle/update.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteKey = Uuid;

/// One note row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable identity for "remove this exact note" semantics.
    pub key: NoteKey,
    /// Number assigned at creation by the store's id policy.
    pub id: NoteId,
    /// Headline text, 3..=50 UTF-16 units when written through validation.
    pub title: String,
    /// Supporting text, non-blank and at most 120 UTF-16 units.
    pub subtitle: String,
    /// Checkbox state on the list screen.
    pub checked: bool,
}

impl Note {
    /// Creates an unchecked note with a freshly generated identity.
    ///
    /// Does not validate fields; callers run a `ValidationRule` first.
    pub fn new(id: NoteId, title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            key: Uuid::new_v4(),
            id,
            title: title.into(),
            subtitle: subtitle.into(),
            checked: false,
        }
    }

    /// Flips `checked` and returns the new value.
    pub fn toggle_checked(&mut self) -> bool {
        self.checked = !self.checked;
        self.checked
    }
}
