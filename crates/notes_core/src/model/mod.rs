//! Note domain model.
//!
//! # Responsibility
//! - Define the note record owned by the note store.
//! - Define the field validation rules shared by the add and edit screens.
//!
//! # Invariants
//! - Every note carries a process-unique `NoteKey` identity.
//! - `NoteId` is a display/routing number and may collide under
//!   `IdPolicy::CollectionSize`.

pub mod note;
pub mod validation;
