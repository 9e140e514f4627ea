//! Domain models for format recognition.
//!
//! This module contains the four recognizers, the [`Format`] that names them,
//! the dispatcher that applies length limits, and configuration.

/// Scientific notation recognizer and validated literal type.
pub mod scientific;
pub use scientific::ScientificLiteral;

/// IPv4 literal recognizer and validated literal type.
pub mod ipv4;
pub use ipv4::Ipv4Literal;

/// Email address recognizer and validated address type.
pub mod email;
pub use email::EmailAddress;

/// FEN descriptor recognizer, rank reports and validated descriptor type.
pub mod fen;
pub use fen::FenDescriptor;

mod format;
pub use format::{Format, UnknownFormatError};

mod error;
pub use error::Error;

mod check;
pub use check::{Limits, Verdict, check, check_all};

mod config;
pub use config::{Config, ConfigError};
