/*!
 * Error types for the snipmark library.
 *
 * The highlighting engine never fails from a caller's point of view, so the
 * errors here are mostly diagnostics: a rejected keyword pattern is turned
 * into the inert sentinel, and a failed pause is logged and collected by the
 * media coordinator instead of being propagated.
 */

use thiserror::Error;

use crate::media::MediaKind;

/// Errors that can occur while compiling a keyword pattern
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PatternError {
    /// No atomic terms survived splitting and trimming
    #[error("No usable keyword terms")]
    NoTerms,

    /// The regex engine rejected the assembled alternation
    #[error("Failed to compile keyword pattern: {0}")]
    Compile(String),
}

impl From<regex::Error> for PatternError {
    fn from(error: regex::Error) -> Self {
        Self::Compile(error.to_string())
    }
}

/// Errors raised by a media handle while it is being coordinated
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MediaError {
    /// The handle reported that it could not pause
    #[error("Failed to pause {kind} element: {reason}")]
    PauseFailed {
        /// Type of the element that failed
        kind: MediaKind,
        /// Reason given by the handle
        reason: String,
    },

    /// The handle panicked inside `pause`
    #[error("{kind} element panicked while pausing")]
    Panicked {
        /// Type of the element that panicked
        kind: MediaKind,
    },
}
