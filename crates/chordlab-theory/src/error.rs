//! Error types for the theory crate.

use thiserror::Error;

/// Errors from parsing a note name string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseNoteError {
    /// The input was empty or all whitespace.
    #[error("empty note name")]
    Empty,

    /// The first character was not a note letter (C, D, E, F, G, A, B).
    #[error("unknown note letter: '{letter}'")]
    UnknownLetter {
        /// The offending character.
        letter: char,
    },

    /// The trailing octave was not a valid integer.
    #[error("invalid octave in note name: {text:?}")]
    InvalidOctave {
        /// The text that failed to parse as an octave.
        text: String,
    },
}

/// A request token that does not name any known variant.
///
/// Token resolution is best-effort: callers typically map this to a
/// default variant and report a warning instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} token: {token:?}")]
pub struct UnknownToken {
    /// What family of token was expected ("quality", "duration", ...).
    pub kind: &'static str,
    /// The token that failed to resolve.
    pub token: String,
}

impl UnknownToken {
    pub(crate) fn new(kind: &'static str, token: &str) -> Self {
        Self {
            kind,
            token: token.to_string(),
        }
    }
}
