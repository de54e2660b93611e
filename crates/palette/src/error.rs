//! Error types for styled printing and attribute name parsing.

use std::io;

use thiserror::Error;

/// Errors that can occur when printing styled text.
#[derive(Debug, Error)]
pub enum PrintError {
    /// The prefix length is greater than the length of the interpolated text.
    ///
    /// Nothing is written to the sink when this is returned.
    #[error("print: length {length} is greater than input length {input}")]
    LengthExceedsInput {
        /// Configured prefix length, in characters.
        length: usize,
        /// Length of the interpolated text, in characters.
        input: usize,
    },

    /// The sink failed while accepting the styled output.
    #[error("print: sink failed after {written} bytes: {source}")]
    Sink {
        /// Bytes the sink accepted before failing.
        written: usize,
        /// The sink's own error, unchanged.
        #[source]
        source: io::Error,
    },
}

impl PrintError {
    /// Number of bytes that reached the sink before the error.
    pub fn written(&self) -> usize {
        match self {
            PrintError::LengthExceedsInput { .. } => 0,
            PrintError::Sink { written, .. } => *written,
        }
    }

    /// Recover the sink's error, if this is a sink failure.
    pub fn into_io(self) -> Option<io::Error> {
        match self {
            PrintError::Sink { source, .. } => Some(source),
            PrintError::LengthExceedsInput { .. } => None,
        }
    }
}

/// Errors that can occur when resolving attribute names.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    /// Unknown color name.
    #[error("unknown color name: {0}")]
    UnknownColor(String),

    /// Unknown style name.
    #[error("unknown style name: {0}")]
    UnknownStyle(String),

    /// `on` without a following background color.
    #[error("missing background color after 'on'")]
    MissingBackground,

    /// Empty attribute description.
    #[error("empty attribute description")]
    Empty,
}
