//! Terminal command parsing.
//!
//! # Responsibility
//! - Parse one input line into a `Command`.
//! - Resolve 1-based row positions against the list screen into app actions.

use notes_core::{Action, Screen};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add,
    Edit(usize),
    Toggle(usize),
    Delete(usize),
    Title(String),
    Subtitle(String),
    Submit,
    Back,
    Show,
    Help,
    Quit,
}

/// Input errors, printed back to the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    Unknown(String),
    MissingArgument(&'static str),
    InvalidRow(String),
    NoSuchRow(usize),
    NotOnList,
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty command; type `help`"),
            Self::Unknown(name) => write!(f, "unknown command `{name}`; type `help`"),
            Self::MissingArgument(name) => write!(f, "`{name}` needs an argument"),
            Self::InvalidRow(raw) => write!(f, "`{raw}` is not a row number"),
            Self::NoSuchRow(row) => write!(f, "no row {row}"),
            Self::NotOnList => write!(f, "row commands only work on the list screen"),
        }
    }
}

impl Error for CommandError {}

pub const HELP: &str = "\
commands:
  add              open the add screen
  edit <row>       edit the note at <row>
  toggle <row>     flip the checkbox at <row>
  delete <row>     delete the note at <row>
  title <text>     set the form title
  subtitle <text>  set the form subtitle
  submit           add/save the form
  back             header back arrow
  list             redraw the current screen
  help             show this text
  quit             exit";

/// Parses one input line.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(CommandError::Empty);
    }
    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    match name.to_ascii_lowercase().as_str() {
        "add" | "a" => Ok(Command::Add),
        "edit" | "e" => parse_row(rest, "edit").map(Command::Edit),
        "toggle" | "t" => parse_row(rest, "toggle").map(Command::Toggle),
        "delete" | "d" => parse_row(rest, "delete").map(Command::Delete),
        // Verbatim after the first separator.
        "title" => Ok(Command::Title(field_text(line, name))),
        "subtitle" => Ok(Command::Subtitle(field_text(line, name))),
        "submit" | "s" => Ok(Command::Submit),
        "back" | "b" => Ok(Command::Back),
        "list" | "ls" => Ok(Command::Show),
        "help" | "h" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

/// Maps a command to an app action for the active screen.
///
/// Returns `Ok(None)` for commands handled by the terminal itself.
pub fn to_action(command: Command, screen: &Screen) -> Result<Option<Action>, CommandError> {
    let action = match command {
        Command::Add => Action::OpenAdd,
        Command::Edit(row) => Action::OpenEdit(row_target(screen, row)?.0),
        Command::Toggle(row) => Action::ToggleChecked(row_target(screen, row)?.1),
        Command::Delete(row) => Action::Delete(row_target(screen, row)?.1),
        Command::Title(text) => Action::SetTitle(text),
        Command::Subtitle(text) => Action::SetSubtitle(text),
        Command::Submit => Action::Submit,
        Command::Back => Action::Back,
        Command::Show | Command::Help | Command::Quit => return Ok(None),
    };
    Ok(Some(action))
}

fn row_target(
    screen: &Screen,
    row: usize,
) -> Result<(notes_core::NoteId, notes_core::NoteKey), CommandError> {
    let Screen::List(list) = screen else {
        return Err(CommandError::NotOnList);
    };
    list.row(row)
        .map(|note| (note.id, note.key))
        .ok_or(CommandError::NoSuchRow(row))
}

fn parse_row(raw: &str, name: &'static str) -> Result<usize, CommandError> {
    if raw.is_empty() {
        return Err(CommandError::MissingArgument(name));
    }
    raw.parse::<usize>()
        .map_err(|_| CommandError::InvalidRow(raw.to_string()))
}

fn field_text(line: &str, name: &str) -> String {
    let rest = &line[name.len()..];
    rest.strip_prefix(' ').unwrap_or(rest).to_string()
}
