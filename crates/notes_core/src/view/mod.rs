//! Screen view-models.
//!
//! # Responsibility
//! - Describe what each of the three screens shows, as owned snapshots.
//! - Hold the editable form draft used by the add and edit screens.
//!
//! # Invariants
//! - Snapshots are detached copies; rendering never mutates app state.

pub mod form;
pub mod list;

pub use form::{FormScreen, NoteForm};
pub use list::{ListScreen, NoteRow};

/// Snapshot of the active screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    List(ListScreen),
    Add(FormScreen),
    /// `None` when the routed id no longer resolves; the screen is blank.
    Edit(Option<FormScreen>),
}

impl Screen {
    /// Whether the screen renders no content.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Edit(None))
    }

    /// Header title shown by the screen.
    pub fn header(&self) -> &'static str {
        match self {
            Self::List(_) => "Notes App",
            Self::Add(_) => "Add Note",
            Self::Edit(_) => "Edit Note",
        }
    }
}
