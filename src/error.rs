use thiserror::Error;

pub type Result<T> = std::result::Result<T, EditError>;

/// Errors reported by the mutating operations of [`crate::SpliceString`].
///
/// A call that returns one of these has left the string untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("offset {offset} is out of bounds for a string of length {len}")]
    OutOfBounds { offset: isize, len: usize },

    #[error("invalid range {start}..{end}: end must not be less than start")]
    InvalidRange { start: usize, end: usize },

    #[error("offset {offset} is not on a character boundary")]
    NotCharBoundary { offset: usize },

    #[error("cannot split a chunk that has already been edited {line}:{column}")]
    ConflictingEdit {
        offset: usize,
        line: usize,
        column: usize,
    },

    #[error("cannot overwrite {start}..{end}: {reason}")]
    InvalidOverwrite {
        start: usize,
        end: usize,
        reason: &'static str,
    },

    #[error("cannot move {start}..{end} to {index}: {reason}")]
    InvalidMove {
        start: usize,
        end: usize,
        index: usize,
        reason: &'static str,
    },
}
