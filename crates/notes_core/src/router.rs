//! Screen routing for the notes app.
//!
//! # Responsibility
//! - Name the three screens and convert them to/from route paths.
//! - Enforce the single-level parent/child navigation graph.
//!
//! # Invariants
//! - The root route is always `Route::List`.
//! - The back stack never holds more than one child above the root.
//! - Only `List -> Add` and `List -> Edit(id)` pushes are allowed.

use crate::model::note::NoteId;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const LIST_ROUTE: &str = "noteList";
pub const ADD_ROUTE: &str = "addNote";
pub const EDIT_ROUTE_PREFIX: &str = "editNote";

static EDIT_ROUTE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^editNote/([^/]+)$").expect("valid edit route regex"));

/// One navigable screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    List,
    Add,
    /// Carries the routing id; it may not resolve to any note.
    Edit(NoteId),
}

impl Route {
    /// Route path in `noteList | addNote | editNote/{id}` form.
    pub fn path(self) -> String {
        match self {
            Self::List => LIST_ROUTE.to_string(),
            Self::Add => ADD_ROUTE.to_string(),
            Self::Edit(id) => format!("{EDIT_ROUTE_PREFIX}/{id}"),
        }
    }

    /// Parses a route path produced by `path()`.
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let path = path.trim();
        match path {
            LIST_ROUTE => return Ok(Self::List),
            ADD_ROUTE => return Ok(Self::Add),
            _ => {}
        }

        let caps = EDIT_ROUTE_RE
            .captures(path)
            .ok_or_else(|| RouteError::UnknownRoute(path.to_string()))?;
        let raw_id = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        raw_id
            .parse::<NoteId>()
            .map(Self::Edit)
            .map_err(|_| RouteError::InvalidNoteId(raw_id.to_string()))
    }

    /// Parent screen, `None` for the root.
    pub fn parent(self) -> Option<Self> {
        match self {
            Self::List => None,
            Self::Add | Self::Edit(_) => Some(Self::List),
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

/// Routing errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    UnknownRoute(String),
    InvalidNoteId(String),
    InvalidTransition { from: Route, to: Route },
}

impl Display for RouteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownRoute(path) => write!(f, "unknown route: `{path}`"),
            Self::InvalidNoteId(raw) => write!(f, "invalid note id in route: `{raw}`"),
            Self::InvalidTransition { from, to } => {
                write!(f, "navigation from `{from}` to `{to}` is not allowed")
            }
        }
    }
}

impl Error for RouteError {}

/// Single-level navigation stack rooted at `Route::List`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    stack: Vec<Route>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    pub fn new() -> Self {
        Self {
            stack: vec![Route::List],
        }
    }

    /// Active screen.
    pub fn current(&self) -> Route {
        self.stack.last().copied().unwrap_or(Route::List)
    }

    /// Pushes a child screen of the active one.
    ///
    /// # Errors
    /// - `InvalidTransition` unless `route` is a child of the active screen.
    pub fn navigate(&mut self, route: Route) -> Result<(), RouteError> {
        let from = self.current();
        if route.parent() != Some(from) {
            return Err(RouteError::InvalidTransition { from, to: route });
        }
        self.stack.push(route);
        Ok(())
    }

    /// Pops the active child. Returns `false` when already at the root.
    pub fn pop_back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        self.stack.pop();
        true
    }

    /// Number of screens on the stack, root included.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
