//! Error types for scene and graphics operations.

use crate::shapes::ObjectId;
use thiserror::Error;

/// Errors raised by graphics objects and the canvas.
///
/// These are contract violations: valid input events never produce them, so
/// callers at the tool boundary log them instead of handling them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CanvasError {
    #[error("handle {handle} is out of range 1..={count}")]
    HandleOutOfRange { handle: usize, count: usize },
    #[error("invalid line width: {0}")]
    InvalidLineWidth(f64),
    #[error("object {0} is already in the scene")]
    DuplicateObject(ObjectId),
}

/// Result type for canvas operations.
pub type CanvasResult<T> = Result<T, CanvasError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e = CanvasError::HandleOutOfRange { handle: 5, count: 4 };
        assert_eq!(e.to_string(), "handle 5 is out of range 1..=4");
        assert_eq!(CanvasError::InvalidLineWidth(-1.0).to_string(), "invalid line width: -1");
    }
}
