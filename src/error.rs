//! Error types for pick
//!
//! Resolver errors carry the offending part so diagnostics can echo it back
//! to the user. I/O errors pass through untouched so `main` can tell a
//! broken pipe apart from a real failure.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PickError {
    /// A comma-separated part matched neither supported grammar
    #[error("Invalid expression '{0}'")]
    InvalidExpression(String),

    /// A dash-range endpoint was zero
    #[error("range line numbers must be positive, but got '{0}'")]
    InvalidRange(String),

    /// A bare subscript resolved outside the addressed lines
    #[error("line index {index} is out of range for {line_count} input line(s)")]
    IndexOutOfRange { index: i64, line_count: usize },

    /// A slice step of zero selects nothing meaningful
    #[error("slice step cannot be zero in '{0}'")]
    ZeroStep(String),

    /// I/O errors (stdin, stdout, broken pipe)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PickError {
    /// True when the error is a closed output stream, which pipelines like
    /// `pick : | head` produce routinely and which must stay silent.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, PickError::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}

/// Result type alias for pick operations
pub type Result<T> = std::result::Result<T, PickError>;
