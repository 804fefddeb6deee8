//! Recoverable errors raised by collection access and text input.

use thiserror::Error;

use crate::shape::ShapeKind;

/// Errors surfaced by shapes, points and the collection.
#[derive(Debug, Error)]
pub enum ShapeError {
    /// Element access or erase outside `[0, len)`.
    #[error("index {index} out of range for collection of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// The shape at `index` is borrowed through another handle in a way that
    /// conflicts with the requested access.
    #[error("shape at index {index} is already borrowed")]
    Borrowed { index: usize },
    /// A shape read from text failed its validity predicate.
    #[error("invalid {kind} vertices")]
    InvalidGeometry { kind: ShapeKind },
    /// A token could not be parsed as the coordinate type.
    #[error("cannot parse {token:?} as a coordinate")]
    Parse { token: String },
    /// Input ended before all coordinates were read.
    #[error("unexpected end of input: expected {expected} coordinates, got {got}")]
    UnexpectedEof { expected: usize, got: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ShapeError>;
