//! Keyboard highlight over a list of search results.
//!
//! The controller is a pure state machine. It never fetches results itself:
//! every key event is handled against the candidate list the caller is
//! currently showing.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use thiserror::Error;

use crate::catalog::VerbEntry;

/// Something that can appear in the result list.
pub trait Candidate {
    /// The text that becomes the query when this candidate is committed.
    fn name(&self) -> &str;
}

impl Candidate for VerbEntry {
    fn name(&self) -> &str {
        &self.verb
    }
}

impl Candidate for String {
    fn name(&self) -> &str {
        self
    }
}

impl Candidate for str {
    fn name(&self) -> &str {
        self
    }
}

impl<T: Candidate + ?Sized> Candidate for &T {
    fn name(&self) -> &str {
        (*self).name()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    /// No query.
    Idle,
    /// A query is set and nothing is highlighted.
    Listing,
    /// The result at this index has keyboard focus.
    Highlighted(usize),
}

/// Keys the result list reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKey {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
}

/// A key name that [`SelectionKey`] does not recognize.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown key '{0}', expected one of: down, up, enter, escape")]
pub struct UnknownKey(pub String);

impl FromStr for SelectionKey {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "down" | "arrowdown" => Ok(SelectionKey::ArrowDown),
            "up" | "arrowup" => Ok(SelectionKey::ArrowUp),
            "enter" => Ok(SelectionKey::Enter),
            "escape" | "esc" => Ok(SelectionKey::Escape),
            _ => Err(UnknownKey(s.to_string())),
        }
    }
}

impl Display for SelectionKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            SelectionKey::ArrowDown => "down",
            SelectionKey::ArrowUp => "up",
            SelectionKey::Enter => "enter",
            SelectionKey::Escape => "escape",
        };
        write!(f, "{name}")
    }
}

/// What a key press did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    /// The key is not valid in the current state.
    Ignored,
    /// The highlight moved to this index.
    Moved(usize),
    /// The highlighted candidate became the query.
    Committed(String),
    /// The query was cleared.
    Cleared,
}

/// Tracks the query and which candidate is highlighted.
///
/// # Example
///
/// ```
/// use verbiste::{SelectionController, SelectionKey, SelectionState};
///
/// let results = ["aimer", "aller", "avoir"];
/// let mut selection = SelectionController::new();
/// selection.set_query("a");
///
/// selection.handle_key(SelectionKey::ArrowUp, &results);
/// assert_eq!(selection.state(), SelectionState::Highlighted(2));
///
/// selection.handle_key(SelectionKey::ArrowDown, &results);
/// assert_eq!(selection.state(), SelectionState::Highlighted(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionController {
    query: String,
    state: SelectionState,
}

impl Default for SelectionController {
    fn default() -> Self {
        SelectionController::new()
    }
}

impl SelectionController {
    pub fn new() -> Self {
        SelectionController {
            query: String::new(),
            state: SelectionState::Idle,
        }
    }

    /// Starts from a query restored from persisted state.
    pub fn with_query(query: impl Into<String>) -> Self {
        let mut controller = SelectionController::new();
        controller.set_query(query);
        controller
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn highlighted(&self) -> Option<usize> {
        match self.state {
            SelectionState::Highlighted(index) => Some(index),
            SelectionState::Idle | SelectionState::Listing => None,
        }
    }

    /// Replaces the query and clears any highlight.
    ///
    /// An empty query returns to [`SelectionState::Idle`].
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.state = if self.query.is_empty() {
            SelectionState::Idle
        } else {
            SelectionState::Listing
        };
    }

    /// Clears the query.
    pub fn clear(&mut self) {
        self.set_query(String::new());
    }

    /// Applies a key press against the candidates currently shown.
    ///
    /// Navigation and commit keys are ignored without a query or when fewer
    /// than two candidates are listed, since a single match is selected
    /// without going through the list.
    pub fn handle_key<C: Candidate>(
        &mut self,
        key: SelectionKey,
        candidates: &[C],
    ) -> SelectionEvent {
        if key == SelectionKey::Escape {
            self.clear();
            return SelectionEvent::Cleared;
        }
        if self.state == SelectionState::Idle || candidates.len() < 2 {
            return SelectionEvent::Ignored;
        }

        let last = candidates.len() - 1;
        match (key, self.state) {
            (SelectionKey::ArrowDown, SelectionState::Listing) => self.move_to(0),
            (SelectionKey::ArrowDown, SelectionState::Highlighted(index)) => {
                self.move_to(if index >= last { 0 } else { index + 1 })
            }
            (SelectionKey::ArrowUp, SelectionState::Listing) => self.move_to(last),
            (SelectionKey::ArrowUp, SelectionState::Highlighted(index)) => {
                self.move_to(if index == 0 { last } else { (index - 1).min(last) })
            }
            (SelectionKey::Enter, SelectionState::Highlighted(index)) => {
                match candidates.get(index) {
                    Some(candidate) => {
                        let name = candidate.name().to_string();
                        self.set_query(name.clone());
                        SelectionEvent::Committed(name)
                    }
                    None => SelectionEvent::Ignored,
                }
            }
            _ => SelectionEvent::Ignored,
        }
    }

    fn move_to(&mut self, index: usize) -> SelectionEvent {
        self.state = SelectionState::Highlighted(index);
        SelectionEvent::Moved(index)
    }
}
