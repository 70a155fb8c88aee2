use std::fmt;

use thiserror::Error;

use crate::model::RoomId;

/// Result type for editor operations.
pub type Result<T> = std::result::Result<T, EditorError>;

/// What kind of element took part in a rejected edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Room,
    Door,
    Window,
    Furniture,
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Element::Room => "room",
            Element::Door => "door",
            Element::Window => "window",
            Element::Furniture => "furniture",
        };
        f.write_str(name)
    }
}

/// Why a line of a saved plan could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("expected 6 comma-separated fields, found {0}")]
    WrongFieldCount(usize),
    #[error("field `{field}` is not an integer: {value:?}")]
    NotAnInteger { field: &'static str, value: String },
}

/// Errors returned by the editor. None of them are fatal: after any of these
/// the scene is still valid and no gesture is in progress.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("{subject} overlaps an existing {other}")]
    Overlap { subject: Element, other: Element },
    #[error("invalid room: {0}")]
    InvalidRoom(String),
    #[error("room {0} does not exist")]
    UnknownRoom(RoomId),
    #[error("no room selected")]
    NoSelection,
    #[error("line {line}: {kind}")]
    Parse { line: usize, kind: ParseErrorKind },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl EditorError {
    pub(crate) fn overlap(subject: Element, other: Element) -> Self {
        EditorError::Overlap { subject, other }
    }

    /// Conflicts and invalid input the user can fix by adjusting parameters.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            EditorError::Overlap { .. } | EditorError::InvalidRoom(_) | EditorError::UnknownRoom(_)
        )
    }
}
