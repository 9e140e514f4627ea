//! String Format Recognizers
//!
//! Small, independent recognizers for four literal formats: FEN chess position
//! descriptors, IPv4 literals, email addresses and scientific notation. Each
//! recognizer is a pure, bounded scan of one input string returning a yes/no
//! verdict.
//!
//! ```
//! use recognizer::{Format, Limits, check_all};
//!
//! let verdicts = check_all("192.168.1.1", &Limits::default());
//! let accepted: Vec<Format> = verdicts
//!     .iter()
//!     .filter(|verdict| verdict.is_accepted())
//!     .map(|verdict| verdict.format())
//!     .collect();
//! assert_eq!(accepted, [Format::Ipv4]);
//! ```

pub mod domain;
pub use domain::{
    Config, ConfigError, EmailAddress, Error, FenDescriptor, Format, Ipv4Literal, Limits,
    ScientificLiteral, Verdict, check, check_all,
};
