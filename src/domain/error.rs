use std::io;

use thiserror::Error;

/// Library-wide error type for webskel operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Embedded layout manifest is malformed or holds an invalid entry.
    #[error("Invalid layout: {0}")]
    Layout(String),

    /// Path resolves outside the target root.
    #[error("Path escapes target directory: {0}")]
    PathTraversal(String),

    /// Target root directory does not exist.
    #[error("Target directory not found: {0}")]
    RootNotFound(String),
}

impl AppError {
    pub fn layout_error<S: Into<String>>(message: S) -> Self {
        AppError::Layout(message.into())
    }

    /// Provide an `io::ErrorKind` view of the error.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Layout(_) | AppError::PathTraversal(_) => io::ErrorKind::InvalidInput,
            AppError::RootNotFound(_) => io::ErrorKind::NotFound,
        }
    }
}
