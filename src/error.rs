//! Error types for the sortlines library.

use std::io;
use thiserror::Error;

use crate::model::{AttributeKind, FontName};

/// Result type alias for sortlines operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading, sorting, or writing styled text.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing scene files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A scene or UI message could not be (de)serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A character range reaches past the end of the document.
    #[error("Range {start}..{end} is out of bounds (document has {len} characters)")]
    RangeOutOfBounds {
        /// Start of the requested range
        start: usize,
        /// End (exclusive) of the requested range
        end: usize,
        /// Document length in characters
        len: usize,
    },

    /// A character range is empty or reversed.
    #[error("Invalid range {start}..{end}: start must be less than end")]
    InvalidRange {
        /// Start of the requested range
        start: usize,
        /// End (exclusive) of the requested range
        end: usize,
    },

    /// The host rejected a style value.
    #[error("Invalid {kind} value: {reason}")]
    InvalidValue {
        /// Attribute that was being written
        kind: AttributeKind,
        /// Why the value was rejected
        reason: String,
    },

    /// Style runs do not cover the document text exactly.
    #[error("Style runs cover {covered} characters but the text has {len}")]
    RunMismatch {
        /// Characters covered by the runs
        covered: usize,
        /// Characters in the text
        len: usize,
    },

    /// A required font is not available to the font loader.
    #[error("Font unavailable: {0}")]
    FontUnavailable(FontName),

    /// The confirmation channel closed before an answer arrived.
    #[error("Confirmation channel closed before a decision was received")]
    ConfirmationClosed,

    /// The confirmation UI surface failed.
    #[error("UI error: {0}")]
    Ui(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    pub(crate) fn invalid_value(kind: AttributeKind, reason: impl Into<String>) -> Self {
        Error::InvalidValue {
            kind,
            reason: reason.into(),
        }
    }
}
