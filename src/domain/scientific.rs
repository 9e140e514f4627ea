//! Scientific notation.
//!
//! Accepts literals of the form `[sign]digits[.digits](e|E)[sign]digits`. The
//! mantissa may begin or end with its decimal point (`.5E3`, `1.E3`) as long as
//! it holds at least one digit.
//!
//! The scanner is a small state machine:
//!
//! ```text
//! Start ─sign─> MantissaSign
//!   │             │
//!   ├──digit──────┴─digit─> IntegerDigits ─point─> FractionDigits
//!   └──point──────┴─point─> LeadingPoint ──digit─> FractionDigits
//!
//! {IntegerDigits, FractionDigits} ─e/E─> ExponentMarker ─sign─> ExponentSign
//! {ExponentMarker, ExponentSign}  ─digit─> ExponentDigits (accepting)
//! ```

use std::{fmt, str::FromStr};

use super::{Error, Format};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    /// A leading `+` or `-`.
    MantissaSign,
    /// Mantissa digits, no decimal point yet.
    IntegerDigits,
    /// A decimal point with no mantissa digit before it.
    LeadingPoint,
    /// Past the decimal point, with at least one mantissa digit.
    FractionDigits,
    ExponentMarker,
    /// The sign immediately after the exponent marker.
    ExponentSign,
    ExponentDigits,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    Sign,
    Digit,
    Point,
    Marker,
    Other,
}

impl Class {
    const fn of(c: char) -> Self {
        match c {
            '+' | '-' => Self::Sign,
            '0'..='9' => Self::Digit,
            '.' => Self::Point,
            'e' | 'E' => Self::Marker,
            _ => Self::Other,
        }
    }
}

impl State {
    /// The transition table. `None` rejects the input.
    const fn next(self, class: Class) -> Option<Self> {
        use Class::{Digit, Marker, Point, Sign};

        match (self, class) {
            (Self::Start, Sign) => Some(Self::MantissaSign),
            (Self::Start | Self::MantissaSign | Self::IntegerDigits, Digit) => {
                Some(Self::IntegerDigits)
            }
            (Self::Start | Self::MantissaSign, Point) => Some(Self::LeadingPoint),
            (Self::IntegerDigits, Point) | (Self::LeadingPoint | Self::FractionDigits, Digit) => {
                Some(Self::FractionDigits)
            }
            (Self::IntegerDigits | Self::FractionDigits, Marker) => Some(Self::ExponentMarker),
            (Self::ExponentMarker, Sign) => Some(Self::ExponentSign),
            (Self::ExponentMarker | Self::ExponentSign | Self::ExponentDigits, Digit) => {
                Some(Self::ExponentDigits)
            }
            _ => None,
        }
    }

    const fn is_accepting(self) -> bool {
        matches!(self, Self::ExponentDigits)
    }
}

/// Runs the state machine, returning the byte offset of the exponent marker
/// if the input is accepted.
fn scan(input: &str) -> Option<usize> {
    let mut state = State::Start;
    let mut marker = None;

    for (position, c) in input.char_indices() {
        let Some(next) = state.next(Class::of(c)) else {
            tracing::trace!(
                ?state,
                character = %c.escape_debug(),
                position,
                "scientific notation: unexpected character"
            );
            return None;
        };
        if next == State::ExponentMarker {
            marker = Some(position);
        }
        state = next;
    }

    if !state.is_accepting() {
        tracing::trace!(?state, "scientific notation: input ended before an exponent digit");
        return None;
    }
    marker
}

/// Returns `true` if `input` is a scientific notation literal.
///
/// # Examples
///
/// ```
/// use recognizer::domain::scientific;
///
/// assert!(scientific::is_valid("1.23E-4"));
/// assert!(scientific::is_valid("2E10"));
/// assert!(!scientific::is_valid("E5"));
/// assert!(!scientific::is_valid("5E"));
/// ```
#[must_use]
pub fn is_valid(input: &str) -> bool {
    scan(input).is_some()
}

/// An accepted scientific notation literal.
///
/// The input text is kept as-is; nothing is normalised.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScientificLiteral {
    text: String,
    marker: usize,
}

impl ScientificLiteral {
    /// Validates `text` as a scientific notation literal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SyntaxRejected`] if `text` is not a literal.
    pub fn new(text: String) -> Result<Self, Error> {
        scan(&text)
            .map(|marker| Self { text, marker })
            .ok_or(Error::SyntaxRejected {
                format: Format::Scientific,
            })
    }

    /// The part before the exponent marker, including any leading sign.
    #[must_use]
    pub fn mantissa(&self) -> &str {
        &self.text[..self.marker]
    }

    /// The part after the exponent marker, including any sign.
    #[must_use]
    pub fn exponent(&self) -> &str {
        &self.text[self.marker + 1..]
    }

    /// The exponent marker as written, `e` or `E`.
    #[must_use]
    pub fn marker(&self) -> char {
        char::from(self.text.as_bytes()[self.marker])
    }

    /// The numeric value of the literal.
    ///
    /// Magnitudes beyond the range of `f64` become infinite.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        // every accepted literal is also in the grammar of `f64::from_str`
        self.text.parse().unwrap_or(f64::NAN)
    }

    /// Returns the string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl FromStr for ScientificLiteral {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

impl TryFrom<&str> for ScientificLiteral {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_str(value)
    }
}

impl AsRef<str> for ScientificLiteral {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for ScientificLiteral {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("1.23E-4"; "fraction with negative exponent")]
    #[test_case("2E10"; "integer mantissa")]
    #[test_case("-5.67e+8"; "signed mantissa and exponent")]
    #[test_case("+1e5"; "plus sign")]
    #[test_case(".5E3"; "leading point")]
    #[test_case("1.E3"; "trailing point")]
    #[test_case("-.5e-1"; "sign then leading point")]
    #[test_case("007e007"; "leading zeros")]
    fn accepts(input: &str) {
        assert!(is_valid(input));
    }

    #[test_case(""; "empty")]
    #[test_case("E5"; "empty mantissa")]
    #[test_case("5E"; "marker is last")]
    #[test_case("123"; "no marker")]
    #[test_case("1e2e3"; "two markers")]
    #[test_case("1.2.3e4"; "two points")]
    #[test_case("1e2.5"; "point in exponent")]
    #[test_case("1e+"; "exponent sign without digits")]
    #[test_case("1e+-2"; "two exponent signs")]
    #[test_case("1+e2"; "sign inside mantissa")]
    #[test_case("+-1e2"; "two leading signs")]
    #[test_case("+e5"; "sign only mantissa")]
    #[test_case(".e5"; "point only mantissa")]
    #[test_case("1e5x"; "trailing garbage")]
    #[test_case(" 1e5"; "leading space")]
    #[test_case("1,5e3"; "comma")]
    #[test_case("١e٥"; "non ascii digits")]
    fn rejects(input: &str) {
        assert!(!is_valid(input));
    }

    #[test]
    fn literal_parts() {
        let literal = ScientificLiteral::try_from("-5.67e+8").unwrap();
        assert_eq!(literal.mantissa(), "-5.67");
        assert_eq!(literal.exponent(), "+8");
        assert_eq!(literal.marker(), 'e');
        assert_eq!(literal.to_string(), "-5.67e+8");

        let literal = ScientificLiteral::try_from("2E10").unwrap();
        assert_eq!(literal.mantissa(), "2");
        assert_eq!(literal.exponent(), "10");
        assert_eq!(literal.marker(), 'E');
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn literal_value() {
        assert_eq!(ScientificLiteral::try_from("1.5E3").unwrap().to_f64(), 1500.0);
        assert_eq!(ScientificLiteral::try_from("1.E2").unwrap().to_f64(), 100.0);
        assert!(ScientificLiteral::try_from("1e999").unwrap().to_f64().is_infinite());
    }

    #[test]
    fn literal_rejects() {
        assert_eq!(
            "5E".parse::<ScientificLiteral>(),
            Err(Error::SyntaxRejected {
                format: Format::Scientific
            })
        );
    }

    /// One forward pass recording flags and the marker position, then bounded
    /// scans for a mantissa digit and an exponent digit.
    fn three_pass(input: &str) -> bool {
        let bytes = input.as_bytes();
        let mut point = false;
        let mut sign = false;
        let mut marker: Option<usize> = None;

        for (i, &b) in bytes.iter().enumerate() {
            if i == 0 {
                match b {
                    b'+' | b'-' => sign = true,
                    b'.' => point = true,
                    b if b.is_ascii_digit() => {}
                    _ => return false,
                }
                continue;
            }
            match b {
                b'e' | b'E' => {
                    if marker.is_some() {
                        return false;
                    }
                    marker = Some(i);
                }
                b'.' => {
                    if point || marker.is_some() {
                        return false;
                    }
                    point = true;
                }
                b'+' | b'-' => {
                    if marker.map(|m| m + 1) != Some(i) {
                        return false;
                    }
                }
                b if b.is_ascii_digit() => {}
                _ => return false,
            }
        }

        let Some(marker) = marker else {
            return false;
        };
        if marker == 0 || marker == bytes.len() - 1 {
            return false;
        }
        if !bytes[usize::from(sign)..marker].iter().any(u8::is_ascii_digit) {
            return false;
        }
        let mut exponent = marker + 1;
        if matches!(bytes[exponent], b'+' | b'-') {
            exponent += 1;
        }
        bytes[exponent..].iter().any(u8::is_ascii_digit)
    }

    #[test]
    fn state_machine_matches_three_pass_scan() {
        const ALPHABET: [char; 7] = ['1', '.', 'e', 'E', '+', '-', 'x'];

        let mut level = vec![String::new()];
        let mut checked = 0;
        for length in 0..=6 {
            for input in &level {
                assert_eq!(is_valid(input), three_pass(input), "input: {input:?}");
                checked += 1;
            }
            if length == 6 {
                break;
            }
            level = level
                .iter()
                .flat_map(|prefix| ALPHABET.iter().map(move |c| format!("{prefix}{c}")))
                .collect();
        }
        assert!(checked > 100_000);
    }

    #[test]
    fn accepted_literals_split_at_a_single_marker() {
        for input in ["1.23E-4", "2E10", ".5e+0", "-0.e9"] {
            let literal = ScientificLiteral::try_from(input).unwrap();
            let markers = input.chars().filter(|c| matches!(c, 'e' | 'E')).count();
            assert_eq!(markers, 1);
            assert!(literal.mantissa().chars().any(|c| c.is_ascii_digit()));
            assert!(literal.exponent().chars().any(|c| c.is_ascii_digit()));
        }
    }
}
