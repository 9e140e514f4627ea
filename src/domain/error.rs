use serde::Serialize;

use super::Format;

/// Reasons an input is not accepted.
///
/// Recognizers are binary: every rule violation collapses into
/// [`Error::SyntaxRejected`]. Which rule fired is only reported through
/// `trace`-level log events.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Error {
    /// The input does not conform to the format.
    #[error("not a valid {}", .format.name())]
    SyntaxRejected {
        /// The format that rejected the input.
        format: Format,
    },

    /// The input is longer than the configured limit for the format.
    #[error("{} input is {length} characters long, the limit is {limit}", .format.name())]
    InputTooLong {
        /// The format whose limit was exceeded.
        format: Format,
        /// Length of the input, in characters.
        length: usize,
        /// The configured limit, in characters.
        limit: usize,
    },
}

impl Error {
    /// The format that produced this error.
    #[must_use]
    pub const fn format(&self) -> Format {
        match self {
            Self::SyntaxRejected { format } | Self::InputTooLong { format, .. } => *format,
        }
    }
}
