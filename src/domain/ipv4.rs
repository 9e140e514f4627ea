//! Dotted-quad IPv4 literals.

use std::{fmt, net::Ipv4Addr, str::FromStr};

use super::{Error, Format};

/// Parses one dot-separated token.
///
/// Leading zeros are allowed. Long digit runs fail the range check, not a
/// length check.
fn parse_octet(token: &str) -> Option<u8> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        tracing::trace!(token, "ipv4: octet is not a run of digits");
        return None;
    }
    let octet = token.parse().ok();
    if octet.is_none() {
        tracing::trace!(token, "ipv4: octet is out of range");
    }
    octet
}

/// Returns the four octets of `input`, or `None` if it is not a dotted-quad
/// literal.
///
/// # Examples
///
/// ```
/// use recognizer::domain::ipv4;
///
/// assert_eq!(ipv4::octets("192.168.1.1"), Some([192, 168, 1, 1]));
/// assert_eq!(ipv4::octets("007.0.0.1"), Some([7, 0, 0, 1]));
/// assert_eq!(ipv4::octets("256.1.1.1"), None);
/// assert_eq!(ipv4::octets("1.2.3"), None);
/// ```
#[must_use]
pub fn octets(input: &str) -> Option<[u8; 4]> {
    let mut octets = [0; 4];
    let mut count = 0;

    for token in input.split('.') {
        if count == octets.len() {
            tracing::trace!(input, "ipv4: more than four octets");
            return None;
        }
        octets[count] = parse_octet(token)?;
        count += 1;
    }

    if count != octets.len() {
        tracing::trace!(input, count, "ipv4: fewer than four octets");
        return None;
    }
    Some(octets)
}

/// Returns `true` if `input` is a dotted-quad IPv4 literal.
#[must_use]
pub fn is_valid(input: &str) -> bool {
    octets(input).is_some()
}

/// An accepted IPv4 literal, kept exactly as written.
///
/// Unlike [`Ipv4Addr`], octets with leading zeros are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ipv4Literal {
    text: String,
    octets: [u8; 4],
}

impl Ipv4Literal {
    /// Validates `text` as an IPv4 literal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SyntaxRejected`] if `text` is not a dotted quad of
    /// values in `0..=255`.
    pub fn new(text: String) -> Result<Self, Error> {
        octets(&text)
            .map(|octets| Self { text, octets })
            .ok_or(Error::SyntaxRejected {
                format: Format::Ipv4,
            })
    }

    /// The numeric octets.
    #[must_use]
    pub const fn octets(&self) -> [u8; 4] {
        self.octets
    }

    /// Converts to the standard library address type.
    #[must_use]
    pub const fn to_ipv4_addr(&self) -> Ipv4Addr {
        let [a, b, c, d] = self.octets;
        Ipv4Addr::new(a, b, c, d)
    }

    /// Returns the string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl FromStr for Ipv4Literal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

impl TryFrom<&str> for Ipv4Literal {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_str(value)
    }
}

impl AsRef<str> for Ipv4Literal {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Ipv4Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("192.168.1.1", [192, 168, 1, 1]; "private address")]
    #[test_case("0.0.0.0", [0, 0, 0, 0]; "all zeros")]
    #[test_case("255.255.255.255", [255, 255, 255, 255]; "broadcast")]
    #[test_case("007.000.01.1", [7, 0, 1, 1]; "leading zeros")]
    #[test_case("0000000255.1.1.1", [255, 1, 1, 1]; "many leading zeros")]
    fn accepts(input: &str, expected: [u8; 4]) {
        assert_eq!(octets(input), Some(expected));
    }

    #[test_case(""; "empty")]
    #[test_case("256.1.1.1"; "out of range")]
    #[test_case("256000.1.1.1"; "long digit run")]
    #[test_case("99999999999999999999999.1.1.1"; "digit run beyond u64")]
    #[test_case("1.2.3"; "three octets")]
    #[test_case("1.2.3.4.5"; "five octets")]
    #[test_case("1..2.3"; "empty octet")]
    #[test_case(".1.2.3"; "leading dot")]
    #[test_case("1.2.3.4."; "trailing dot")]
    #[test_case("+1.2.3.4"; "plus sign")]
    #[test_case("-1.2.3.4"; "minus sign")]
    #[test_case("1.2.3.a"; "letter")]
    #[test_case("1.2.3. 4"; "space")]
    fn rejects(input: &str) {
        assert!(!is_valid(input));
    }

    #[test]
    fn literal_keeps_text() {
        let literal = Ipv4Literal::try_from("010.0.0.1").unwrap();
        assert_eq!(literal.to_string(), "010.0.0.1");
        assert_eq!(literal.octets(), [10, 0, 0, 1]);
        assert_eq!(literal.to_ipv4_addr(), Ipv4Addr::new(10, 0, 0, 1));
    }

    #[test]
    fn literal_rejects() {
        assert_eq!(
            "1.2.3".parse::<Ipv4Literal>(),
            Err(Error::SyntaxRejected {
                format: Format::Ipv4
            })
        );
    }

    #[test]
    fn agrees_with_std_on_canonical_addresses() {
        for input in ["192.168.1.1", "10.0.0.255", "1.2.3.4", "256.0.0.1", "1.2.3"] {
            assert_eq!(is_valid(input), input.parse::<Ipv4Addr>().is_ok(), "{input}");
        }
    }
}
