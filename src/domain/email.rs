//! Email address syntax.
//!
//! This is a syntactic approximation: no deliverability checks and no RFC
//! label-length limits. The domain separator is the last `.` anywhere in the
//! address, which must come at least two characters after the `@` and must not
//! end the address.

use std::{fmt, str::FromStr};

use super::{Error, Format};

const fn is_local_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'-')
}

const fn is_domain_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'.' | b'-')
}

/// Returns the byte offset of the `@` if `input` is an email address.
fn scan(input: &str) -> Option<usize> {
    let mut at = None;
    let mut last_dot = None;

    for (position, byte) in input.bytes().enumerate() {
        match byte {
            b'@' if at.is_some() => {
                tracing::trace!(input, position, "email: more than one '@'");
                return None;
            }
            b'@' => at = Some(position),
            b'.' => last_dot = Some(position),
            _ => {}
        }
    }

    let Some(at) = at else {
        tracing::trace!(input, "email: no '@'");
        return None;
    };
    let Some(dot) = last_dot else {
        tracing::trace!(input, "email: no '.'");
        return None;
    };
    if at == 0 {
        tracing::trace!(input, "email: starts with '@'");
        return None;
    }
    if dot <= at + 1 {
        tracing::trace!(input, at, dot, "email: last '.' does not follow the '@'");
        return None;
    }
    if dot == input.len() - 1 {
        tracing::trace!(input, "email: ends with '.'");
        return None;
    }
    if !input[..at].bytes().all(is_local_byte) {
        tracing::trace!(input, "email: invalid character in local part");
        return None;
    }
    if !input[at + 1..].bytes().all(is_domain_byte) {
        tracing::trace!(input, "email: invalid character in domain");
        return None;
    }
    Some(at)
}

/// Returns `true` if `input` is an email address.
///
/// # Examples
///
/// ```
/// use recognizer::domain::email;
///
/// assert!(email::is_valid("user.name@example.com"));
/// assert!(!email::is_valid("@example.com"));
/// assert!(!email::is_valid("user@example."));
/// ```
#[must_use]
pub fn is_valid(input: &str) -> bool {
    scan(input).is_some()
}

/// An accepted email address, kept exactly as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress {
    text: String,
    at: usize,
}

impl EmailAddress {
    /// Validates `text` as an email address.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SyntaxRejected`] if `text` is not an address.
    pub fn new(text: String) -> Result<Self, Error> {
        scan(&text)
            .map(|at| Self { text, at })
            .ok_or(Error::SyntaxRejected {
                format: Format::Email,
            })
    }

    /// The part before the `@`.
    #[must_use]
    pub fn local_part(&self) -> &str {
        &self.text[..self.at]
    }

    /// The part after the `@`.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.text[self.at + 1..]
    }

    /// Returns the string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl FromStr for EmailAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_str(value)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("user.name@example.com"; "dotted local part")]
    #[test_case("a@b.c"; "shortest")]
    #[test_case("first_last-1@mail.example-host.org"; "underscore and hyphens")]
    #[test_case("user@sub.domain.co.uk"; "several domain labels")]
    #[test_case("x@.a.b"; "domain starting with a dot")]
    #[test_case("user.@example..com"; "consecutive dots are not checked")]
    fn accepts(input: &str) {
        assert!(is_valid(input));
    }

    #[test_case(""; "empty")]
    #[test_case("@example.com"; "starts with at")]
    #[test_case("user@example."; "ends with dot")]
    #[test_case("userexample.com"; "no at")]
    #[test_case("user@examplecom"; "no dot")]
    #[test_case("user@@example.com"; "two ats")]
    #[test_case("a@b@c.com"; "at in domain")]
    #[test_case("user@.com"; "dot right after at")]
    #[test_case("first.last@localhost"; "only dot is in local part")]
    #[test_case("user+tag@example.com"; "plus in local part")]
    #[test_case("user@exam_ple.com"; "underscore in domain")]
    #[test_case("us er@example.com"; "space")]
    #[test_case("usér@example.com"; "non ascii")]
    fn rejects(input: &str) {
        assert!(!is_valid(input));
    }

    #[test]
    fn address_parts() {
        let address = EmailAddress::try_from("user.name@example.com").unwrap();
        assert_eq!(address.local_part(), "user.name");
        assert_eq!(address.domain(), "example.com");
        assert_eq!(address.to_string(), "user.name@example.com");
    }

    #[test]
    fn address_rejects() {
        assert_eq!(
            "@example.com".parse::<EmailAddress>(),
            Err(Error::SyntaxRejected {
                format: Format::Email
            })
        );
    }
}
