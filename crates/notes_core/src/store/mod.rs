//! Note store contracts and the in-memory implementation.
//!
//! # Responsibility
//! - Own every note record for the lifetime of the process.
//! - Keep insertion order stable across toggles, edits and deletes.
//!
//! # Invariants
//! - Store writes do not validate; the note service validates first.
//! - Identity-based APIs (`NoteKey`) never touch a different record that
//!   shares the same `NoteId`.

pub mod note_store;
