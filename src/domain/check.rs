use serde::Serialize;

use super::{Error, Format};

/// Maximum input lengths, in characters, applied before a recognizer runs.
///
/// The recognizers themselves have no length limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Limit for FEN descriptors.
    pub descriptor: usize,
    /// Limit for IPv4 literals.
    pub address: usize,
    /// Limit for general free-form input (scientific notation, email).
    pub input: usize,
}

impl Limits {
    /// The limits used when no configuration says otherwise.
    pub const DEFAULT: Self = Self {
        descriptor: 128,
        address: 128,
        input: 100,
    };

    /// No limits at all.
    pub const UNBOUNDED: Self = Self {
        descriptor: usize::MAX,
        address: usize::MAX,
        input: usize::MAX,
    };

    /// The limit that applies to `format`.
    #[must_use]
    pub const fn for_format(&self, format: Format) -> usize {
        match format {
            Format::Fen => self.descriptor,
            Format::Ipv4 => self.address,
            Format::Scientific | Format::Email => self.input,
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Checks `input` against one format.
///
/// # Errors
///
/// - [`Error::InputTooLong`] if `input` exceeds the limit for `format`. This
///   takes precedence over any syntax check.
/// - [`Error::SyntaxRejected`] if the recognizer does not accept `input`.
///
/// # Examples
///
/// ```
/// use recognizer::{Error, Format, Limits, check};
///
/// assert_eq!(check(Format::Ipv4, "192.168.1.1", &Limits::default()), Ok(()));
/// assert_eq!(
///     check(Format::Ipv4, "1.2.3", &Limits::default()),
///     Err(Error::SyntaxRejected { format: Format::Ipv4 })
/// );
/// ```
pub fn check(format: Format, input: &str, limits: &Limits) -> Result<(), Error> {
    let limit = limits.for_format(format);
    let length = input.chars().count();
    if length > limit {
        return Err(Error::InputTooLong {
            format,
            length,
            limit,
        });
    }

    if format.is_valid(input) {
        Ok(())
    } else {
        Err(Error::SyntaxRejected { format })
    }
}

/// Runs every general recognizer on `input`.
///
/// Each format is reported independently; a rejection by one does not stop
/// the others.
#[must_use]
pub fn check_all(input: &str, limits: &Limits) -> Vec<Verdict> {
    Format::GENERAL
        .iter()
        .map(|&format| Verdict::new(format, input, limits))
        .collect()
}

/// The outcome of checking one input against one format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    format: Format,
    input: String,
    accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    rejection: Option<Error>,
}

impl Verdict {
    /// Checks `input` against `format`.
    #[must_use]
    pub fn new(format: Format, input: &str, limits: &Limits) -> Self {
        let rejection = check(format, input, limits).err();
        tracing::debug!(%format, input, accepted = rejection.is_none(), "checked input");
        Self {
            format,
            input: input.to_string(),
            accepted: rejection.is_none(),
            rejection,
        }
    }

    /// The format that was checked.
    #[must_use]
    pub const fn format(&self) -> Format {
        self.format
    }

    /// The input as given.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns `true` if the input was accepted.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Why the input was rejected, if it was.
    #[must_use]
    pub const fn rejection(&self) -> Option<&Error> {
        self.rejection.as_ref()
    }
}
