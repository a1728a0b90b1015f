//! Core use-case services.
//!
//! # Responsibility
//! - Validate user input before it reaches the note store.
//! - Keep app/FFI layers decoupled from store details.

pub mod note_service;
