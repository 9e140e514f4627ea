use std::{fmt, str::FromStr};

use serde::Serialize;

use super::{email, fen, ipv4, scientific};

/// The literal formats understood by the recognizers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Scientific notation, e.g. `1.23E-4`.
    Scientific,
    /// Dotted-quad IPv4 literal, e.g. `192.168.1.1`.
    Ipv4,
    /// Email address, e.g. `user.name@example.com`.
    Email,
    /// Chess position descriptor in Forsyth–Edwards Notation.
    ///
    /// Only the board field is checked; the other five fields must be present.
    Fen,
}

impl Format {
    /// Every supported format.
    pub const ALL: [Self; 4] = [Self::Scientific, Self::Ipv4, Self::Email, Self::Fen];

    /// The formats checked by "validate all".
    ///
    /// FEN descriptors are a separate kind of input and are left out.
    pub const GENERAL: [Self; 3] = [Self::Scientific, Self::Ipv4, Self::Email];

    /// A human-readable name, e.g. "IPv4 address".
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Scientific => "scientific notation",
            Self::Ipv4 => "IPv4 address",
            Self::Email => "email address",
            Self::Fen => "FEN descriptor",
        }
    }

    /// Runs the recognizer for this format.
    #[must_use]
    pub fn is_valid(self, input: &str) -> bool {
        match self {
            Self::Scientific => scientific::is_valid(input),
            Self::Ipv4 => ipv4::is_valid(input),
            Self::Email => email::is_valid(input),
            Self::Fen => fen::is_valid(input),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let id = match self {
            Self::Scientific => "scientific",
            Self::Ipv4 => "ipv4",
            Self::Email => "email",
            Self::Fen => "fen",
        };
        f.write_str(id)
    }
}

impl FromStr for Format {
    type Err = UnknownFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "scientific" | "sci" => Ok(Self::Scientific),
            "ipv4" | "ip" => Ok(Self::Ipv4),
            "email" | "mail" => Ok(Self::Email),
            "fen" => Ok(Self::Fen),
            _ => Err(UnknownFormatError(s.to_string())),
        }
    }
}

/// Error returned when a format name is not recognised.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unknown format '{0}': expected one of scientific, ipv4, email, fen")]
pub struct UnknownFormatError(String);

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("scientific", Format::Scientific; "scientific")]
    #[test_case("SCI", Format::Scientific; "alias uppercase")]
    #[test_case("ipv4", Format::Ipv4; "ipv4")]
    #[test_case("ip", Format::Ipv4; "ip alias")]
    #[test_case("Email", Format::Email; "mixed case")]
    #[test_case("mail", Format::Email; "mail alias")]
    #[test_case("fen", Format::Fen; "fen")]
    fn parses_names_and_aliases(name: &str, expected: Format) {
        assert_eq!(name.parse::<Format>(), Ok(expected));
    }

    #[test]
    fn display_parses_back() {
        for format in Format::ALL {
            assert_eq!(format.to_string().parse::<Format>(), Ok(format));
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let error = "hex".parse::<Format>().unwrap_err();
        assert_eq!(
            error.to_string(),
            "Unknown format 'hex': expected one of scientific, ipv4, email, fen"
        );
    }

    #[test]
    fn serializes_as_lowercase_id() {
        for format in Format::ALL {
            assert_eq!(
                serde_json::to_value(format).unwrap(),
                serde_json::Value::String(format.to_string())
            );
        }
    }

    #[test]
    fn general_formats_exclude_fen() {
        assert!(!Format::GENERAL.contains(&Format::Fen));
    }
}
