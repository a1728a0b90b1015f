//! Core domain logic for the notes app.
//! This crate is the single source of truth for note state and navigation.

pub mod app;
pub mod config;
pub mod logging;
pub mod model;
pub mod router;
pub mod service;
pub mod store;
pub mod view;

pub use app::{Action, ActionOutcome, AddBackPolicy, IgnoreReason, NotesApp};
pub use config::{AppConfig, ConfigError, LogSettings};
pub use logging::{default_log_level, init_logging, init_logging_with, logging_status, LoggingError};
pub use model::note::{Note, NoteId, NoteKey};
pub use model::validation::{
    validate_non_blank, validate_note_fields, NoteValidationError, ValidationRule,
};
pub use router::{Route, RouteError, Router};
pub use service::note_service::{NoteService, NoteServiceError};
pub use store::note_store::{IdPolicy, InMemoryNoteStore, NoteStore, StoreError, StoreResult};
pub use view::{FormScreen, ListScreen, NoteForm, NoteRow, Screen};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
