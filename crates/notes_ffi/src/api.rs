//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the notes app session to Dart via FRB.
//! - Return one flat `ScreenView` envelope after every action so the UI
//!   only renders, never keeps its own note state.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - One session per process; `notes_reset` starts a fresh one.

use log::warn;
use notes_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, init_logging_with,
    ping as ping_inner, Action, ActionOutcome, AppConfig, FormScreen, IgnoreReason,
    InMemoryNoteStore, NoteKey, NoteRow, NotesApp, Screen,
};
use std::sync::{Mutex, MutexGuard, OnceLock};

type Session = NotesApp<InMemoryNoteStore>;

static SESSION: OnceLock<Mutex<Session>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One list row as seen by Dart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteItem {
    /// Record identity; pass back to toggle/delete.
    pub key: String,
    /// Routing id; pass back to `notes_open_edit`.
    pub id: u32,
    pub title: String,
    pub subtitle: String,
    pub checked: bool,
}

/// Active screen envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenView {
    /// `noteList | addNote | editNote/{id}`.
    pub route: String,
    /// Header title.
    pub header: String,
    /// Rows for the list screen; empty on form screens.
    pub notes: Vec<NoteItem>,
    /// Form title field; `None` on the list screen and blank edit screen.
    pub form_title: Option<String>,
    /// Form subtitle field; `None` on the list screen and blank edit screen.
    pub form_subtitle: Option<String>,
    /// Whether the add/save button passes validation.
    pub can_submit: bool,
    /// Edit screen whose id no longer resolves; render nothing.
    pub blank: bool,
    /// Whether the last action changed state or navigation.
    pub applied: bool,
    /// Diagnostic message for logs; not meant for display.
    pub message: String,
}

/// Returns the active screen without changing anything.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_screen() -> ScreenView {
    let session = lock_session();
    to_screen_view(&session, true, String::new())
}

/// List: floating add button.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_open_add() -> ScreenView {
    dispatch(Action::OpenAdd)
}

/// List: edit button of the row with routing id `id`.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_open_edit(id: u32) -> ScreenView {
    dispatch(Action::OpenEdit(id))
}

/// List: checkbox of the row with identity `key`.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_toggle_checked(key: String) -> ScreenView {
    with_key(key, Action::ToggleChecked)
}

/// List: delete button of the row with identity `key`.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_delete(key: String) -> ScreenView {
    with_key(key, Action::Delete)
}

/// Add/Edit: title field changed.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_set_title(title: String) -> ScreenView {
    dispatch(Action::SetTitle(title))
}

/// Add/Edit: subtitle field changed.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_set_subtitle(subtitle: String) -> ScreenView {
    dispatch(Action::SetSubtitle(subtitle))
}

/// Add/Edit: submit/save button.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_submit() -> ScreenView {
    dispatch(Action::Submit)
}

/// Add/Edit: header back arrow.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_back() -> ScreenView {
    dispatch(Action::Back)
}

/// Drops every note and returns to the list with a freshly configured session.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_reset() -> ScreenView {
    let (fresh, message) = build_session();
    let mut session = lock_session();
    *session = fresh;
    to_screen_view(&session, true, message)
}

fn with_key(key: String, action: fn(NoteKey) -> Action) -> ScreenView {
    match NoteKey::parse_str(key.trim()) {
        Ok(key) => dispatch(action(key)),
        Err(_) => {
            let session = lock_session();
            to_screen_view(&session, false, format!("invalid note key `{key}`"))
        }
    }
}

fn dispatch(action: Action) -> ScreenView {
    let mut session = lock_session();
    let outcome = session.dispatch(action);
    let (applied, message) = match outcome {
        ActionOutcome::Changed => (true, String::new()),
        ActionOutcome::Navigated(route) => (true, format!("navigated to {route}")),
        ActionOutcome::Ignored(reason) => (false, ignore_message(&reason)),
    };
    to_screen_view(&session, applied, message)
}

fn ignore_message(reason: &IgnoreReason) -> String {
    match reason {
        IgnoreReason::Rejected(err) => format!("rejected: {err}"),
        IgnoreReason::NotOnScreen => "action not available on this screen".to_string(),
        IgnoreReason::NoteMissing => "note not found".to_string(),
    }
}

fn lock_session() -> MutexGuard<'static, Session> {
    let cell = SESSION.get_or_init(|| Mutex::new(build_session().0));
    // Recover from poisoning; no FFI call may panic.
    cell.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn build_session() -> (Session, String) {
    match AppConfig::from_env() {
        Ok(config) => {
            let mut message = String::new();
            if let Some(settings) = config.log.as_ref() {
                if let Err(err) = init_logging_with(settings) {
                    message = format!("logging disabled: {err}");
                }
            }
            (NotesApp::from_config(&config), message)
        }
        Err(err) => {
            warn!("event=session_config module=ffi status=error error={err}");
            (
                NotesApp::from_config(&AppConfig::default()),
                format!("using default config: {err}"),
            )
        }
    }
}

fn to_screen_view(session: &Session, applied: bool, message: String) -> ScreenView {
    let screen = session.screen();
    let header = screen.header().to_string();
    let blank = screen.is_blank();
    let (notes, form): (Vec<NoteItem>, Option<FormScreen>) = match screen {
        Screen::List(list) => (list.rows.iter().map(to_note_item).collect(), None),
        Screen::Add(form) | Screen::Edit(Some(form)) => (Vec::new(), Some(form)),
        Screen::Edit(None) => (Vec::new(), None),
    };

    ScreenView {
        route: session.route().path(),
        header,
        notes,
        can_submit: form.as_ref().is_some_and(|form| form.can_submit),
        form_title: form.as_ref().map(|form| form.title.clone()),
        form_subtitle: form.map(|form| form.subtitle),
        blank,
        applied,
        message,
    }
}

fn to_note_item(row: &NoteRow) -> NoteItem {
    NoteItem {
        key: row.key.to_string(),
        id: row.id,
        title: row.title.clone(),
        subtitle: row.subtitle.clone(),
        checked: row.checked,
    }
}
