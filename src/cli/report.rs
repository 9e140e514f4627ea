//! Rendering of verdicts for the terminal and for JSON consumers.

use recognizer::{
    EmailAddress, Error, FenDescriptor, Format, Ipv4Literal, ScientificLiteral, Verdict,
    domain::fen::{self, BoardReport},
};
use serde_json::{Value, json};

use super::terminal::Colorize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// A short reminder of what the format looks like, shown after a rejection.
pub const fn hint(format: Format) -> &'static str {
    match format {
        Format::Scientific => {
            "Format: number[.number]E[+-]number. Valid examples: 1.23E-4, -5.67e+8, 2E10"
        }
        Format::Ipv4 => "Format: xxx.xxx.xxx.xxx (0-255 per octet)",
        Format::Email => "Format: user@domain.extension",
        Format::Fen => {
            "Format: eight '/'-separated ranks and five more fields, e.g. \
             rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
        }
    }
}

/// One line describing a verdict, without colour.
pub fn verdict_line(verdict: &Verdict) -> String {
    let format = verdict.format().name();
    let input = verdict.input();
    match verdict.rejection() {
        None => format!("✓ '{input}' is a valid {format}"),
        Some(Error::SyntaxRejected { .. }) => format!("✗ '{input}' is not a valid {format}"),
        Some(error @ Error::InputTooLong { .. }) => format!("✗ {error}"),
    }
}

/// Prints a verdict, followed by the format hint when it was rejected.
pub fn print_verdict(verdict: &Verdict) {
    let line = verdict_line(verdict);
    if verdict.is_accepted() {
        println!("{}", line.success());
    } else {
        println!("{}", line.failure());
        println!("   {}", hint(verdict.format()).dim());
    }
}

/// Prints the results of "validate all" for one input.
pub fn print_all(input: &str, verdicts: &[Verdict]) {
    println!("\n{}", format!("Input: \"{input}\"").info());
    println!("{}", "-".repeat(32));
    for verdict in verdicts {
        let line = verdict_line(verdict);
        if verdict.is_accepted() {
            println!("{}", line.success());
        } else {
            println!("{}", line.failure());
        }
    }
}

/// The components of an accepted input as JSON, or `None` if `input` is not
/// in `format`.
pub fn parts(format: Format, input: &str) -> Option<Value> {
    let parts = match format {
        Format::Scientific => {
            let literal: ScientificLiteral = input.parse().ok()?;
            json!({
                "mantissa": literal.mantissa(),
                "marker": literal.marker(),
                "exponent": literal.exponent(),
                "value": literal.to_f64(),
            })
        }
        Format::Ipv4 => {
            let literal: Ipv4Literal = input.parse().ok()?;
            json!({
                "octets": literal.octets(),
                "address": literal.to_ipv4_addr().to_string(),
            })
        }
        Format::Email => {
            let address: EmailAddress = input.parse().ok()?;
            json!({
                "local_part": address.local_part(),
                "domain": address.domain(),
            })
        }
        Format::Fen => {
            let descriptor: FenDescriptor = input.parse().ok()?;
            json!({
                "board": descriptor.board(),
                "side_to_move": descriptor.side_to_move(),
                "castling": descriptor.castling(),
                "en_passant": descriptor.en_passant(),
                "halfmove_clock": descriptor.halfmove_clock(),
                "fullmove_number": descriptor.fullmove_number(),
            })
        }
    };
    Some(parts)
}

/// Prints the components produced by [`parts`], one per line.
pub fn print_parts(parts: &Value) {
    let Some(parts) = parts.as_object() else {
        return;
    };
    for (name, value) in parts {
        let value = value
            .as_str()
            .map_or_else(|| value.to_string(), ToString::to_string);
        println!("   {}", format!("{name}: {value}").dim());
    }
}

/// Prints the file count of every rank in a board.
pub fn print_ranks(report: &BoardReport<'_>) {
    println!("{}", format!("Board: {}", report.board).info());
    for (index, rank) in report.ranks.iter().enumerate() {
        let files = rank
            .files
            .map_or_else(|| "invalid character".to_string(), |files| format!("{files} files"));
        let line = format!("  {:>2}. {:<10} {files}", index + 1, rank.text);
        if rank.is_valid() {
            println!("{line}");
        } else {
            println!("{}", line.failure());
        }
    }
    if report.ranks.len() != fen::RANKS {
        let message = format!("  expected {} ranks, found {}", fen::RANKS, report.ranks.len());
        println!("{}", message.failure());
    }
}

/// The JSON form of a board report.
pub fn ranks_json(report: &BoardReport<'_>) -> Value {
    let ranks: Vec<_> = report
        .ranks
        .iter()
        .map(|rank| {
            json!({
                "rank": rank.text,
                "files": rank.files,
                "valid": rank.is_valid(),
            })
        })
        .collect();
    json!({ "board": report.board, "ranks": ranks })
}
