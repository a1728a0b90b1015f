//! Field validation for note forms.
//!
//! # Responsibility
//! - Decide whether a `(title, subtitle)` pair may be written to the store.
//! - Report which bound failed for logs and library callers.
//!
//! # Invariants
//! - Lengths count UTF-16 code units, so a character outside the Basic
//!   Multilingual Plane counts as two.
//! - "Blank" means empty or made only of JVM whitespace: Unicode space
//!   separators, U+0009..=U+000D and U+001C..=U+001F. U+0085 is not blank.
//! - The strict title check is a pure length bound; whitespace titles of
//!   valid length pass.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const TITLE_MIN_UNITS: usize = 3;
pub const TITLE_MAX_UNITS: usize = 50;
pub const SUBTITLE_MAX_UNITS: usize = 120;

/// Rule applied before a note write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationRule {
    /// Title 3..=50 units, subtitle non-blank and at most 120 units.
    /// Used by the add/save buttons.
    Strict,
    /// Both fields non-blank, no length bounds.
    /// Used by the add screen's header back action.
    NonBlank,
}

impl ValidationRule {
    /// Checks a pair against this rule.
    pub fn check(self, title: &str, subtitle: &str) -> Result<(), NoteValidationError> {
        match self {
            Self::Strict => validate_note_fields(title, subtitle),
            Self::NonBlank => validate_non_blank(title, subtitle),
        }
    }

    /// Returns whether the pair passes this rule.
    pub fn accepts(self, title: &str, subtitle: &str) -> bool {
        self.check(title, subtitle).is_ok()
    }
}

/// Reason a pair was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteValidationError {
    TitleTooShort { len: usize, min: usize },
    TitleTooLong { len: usize, max: usize },
    BlankTitle,
    BlankSubtitle,
    SubtitleTooLong { len: usize, max: usize },
}

impl NoteValidationError {
    /// Stable snake_case code used in log events.
    pub fn code(self) -> &'static str {
        match self {
            Self::TitleTooShort { .. } => "title_too_short",
            Self::TitleTooLong { .. } => "title_too_long",
            Self::BlankTitle => "blank_title",
            Self::BlankSubtitle => "blank_subtitle",
            Self::SubtitleTooLong { .. } => "subtitle_too_long",
        }
    }
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TitleTooShort { len, min } => {
                write!(f, "title has {len} units, needs at least {min}")
            }
            Self::TitleTooLong { len, max } => {
                write!(f, "title has {len} units, allows at most {max}")
            }
            Self::BlankTitle => write!(f, "title must not be blank"),
            Self::BlankSubtitle => write!(f, "subtitle must not be blank"),
            Self::SubtitleTooLong { len, max } => {
                write!(f, "subtitle has {len} units, allows at most {max}")
            }
        }
    }
}

impl Error for NoteValidationError {}

/// Strict rule shared by the add and edit forms.
///
/// Accepts iff `3 <= len(title) <= 50`, `subtitle` is non-blank and
/// `len(subtitle) <= 120`. Title is checked first.
pub fn validate_note_fields(title: &str, subtitle: &str) -> Result<(), NoteValidationError> {
    let title_len = text_len(title);
    if title_len < TITLE_MIN_UNITS {
        return Err(NoteValidationError::TitleTooShort {
            len: title_len,
            min: TITLE_MIN_UNITS,
        });
    }
    if title_len > TITLE_MAX_UNITS {
        return Err(NoteValidationError::TitleTooLong {
            len: title_len,
            max: TITLE_MAX_UNITS,
        });
    }
    if is_blank(subtitle) {
        return Err(NoteValidationError::BlankSubtitle);
    }
    let subtitle_len = text_len(subtitle);
    if subtitle_len > SUBTITLE_MAX_UNITS {
        return Err(NoteValidationError::SubtitleTooLong {
            len: subtitle_len,
            max: SUBTITLE_MAX_UNITS,
        });
    }
    Ok(())
}

/// Lenient rule: both fields non-blank.
pub fn validate_non_blank(title: &str, subtitle: &str) -> Result<(), NoteValidationError> {
    if is_blank(title) {
        return Err(NoteValidationError::BlankTitle);
    }
    if is_blank(subtitle) {
        return Err(NoteValidationError::BlankSubtitle);
    }
    Ok(())
}

/// Length in UTF-16 code units.
fn text_len(value: &str) -> usize {
    value.encode_utf16().count()
}

fn is_blank(value: &str) -> bool {
    value.chars().all(is_blank_char)
}

// `char::is_whitespace` minus U+0085, plus the ASCII information separators.
fn is_blank_char(c: char) -> bool {
    matches!(c, '\u{1C}'..='\u{1F}') || (c.is_whitespace() && c != '\u{85}')
}
