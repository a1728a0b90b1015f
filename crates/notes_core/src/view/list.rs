//! List screen snapshot.

use crate::model::note::{Note, NoteId, NoteKey};

/// One rendered row: checkbox, headline, supporting text, edit/delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRow {
    /// Delete/toggle target.
    pub key: NoteKey,
    /// Edit target (`editNote/{id}`).
    pub id: NoteId,
    pub title: String,
    pub subtitle: String,
    pub checked: bool,
}

impl From<&Note> for NoteRow {
    fn from(note: &Note) -> Self {
        Self {
            key: note.key,
            id: note.id,
            title: note.title.clone(),
            subtitle: note.subtitle.clone(),
            checked: note.checked,
        }
    }
}

/// All notes in store order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListScreen {
    pub rows: Vec<NoteRow>,
}

impl ListScreen {
    pub fn from_notes(notes: &[Note]) -> Self {
        Self {
            rows: notes.iter().map(NoteRow::from).collect(),
        }
    }

    /// Row at a 1-based display position.
    pub fn row(&self, position: usize) -> Option<&NoteRow> {
        position.checked_sub(1).and_then(|index| self.rows.get(index))
    }
}
