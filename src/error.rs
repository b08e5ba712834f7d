//! Error types shared by the three utilities.

use std::io;
use thiserror::Error;

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The source file does not exist.
    #[error("File \"{path}\" not found")]
    FileNotFound { path: String },

    /// The source file exists but could not be loaded as a PDF.
    #[error("Failed to open PDF: {path}")]
    InvalidDocument {
        path: String,
        #[source]
        source: lopdf::Error,
    },

    #[error(transparent)]
    InvalidRange(#[from] RangeError),

    /// Reading or writing a file failed.
    #[error("I/O error on {path}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Text extraction failed: {0}")]
    TextExtraction(String),

    /// The chat request failed in transport or returned an error status.
    #[error("Chat request failed")]
    Request(#[from] reqwest::Error),

    /// The model server answered with an error status.
    #[error("Model server returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Pager failed: {0}")]
    Pager(String),

    #[error("{0}")]
    Unexpected(String),
}

/// Reasons a requested page interval is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("Page numbers must be between 1 and {total}")]
    OutOfBounds { start: i64, end: i64, total: u32 },

    #[error("Start page must be less than or equal to end page")]
    Reversed { start: i64, end: i64 },
}

/// Coarse classification of an [`Error`], independent of its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    FileNotFound,
    InvalidDocument,
    InvalidRange,
    IoFailure,
    UnexpectedError,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::FileNotFound { .. } => ErrorKind::FileNotFound,
            Error::InvalidDocument { .. } => ErrorKind::InvalidDocument,
            Error::InvalidRange(_) => ErrorKind::InvalidRange,
            Error::Io { .. } => ErrorKind::IoFailure,
            Error::TextExtraction(_)
            | Error::Request(_)
            | Error::Api { .. }
            | Error::Pager(_)
            | Error::Unexpected(_) => ErrorKind::UnexpectedError,
        }
    }
}

impl From<pdf_extract::OutputError> for Error {
    fn from(err: pdf_extract::OutputError) -> Self {
        Error::TextExtraction(err.to_string())
    }
}
