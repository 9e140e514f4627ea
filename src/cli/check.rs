use clap::Parser;
use recognizer::{
    Error, Format, Limits, Verdict,
    domain::fen::{self, BoardReport},
};
use tracing::instrument;

use super::{
    parse_format,
    report::{self, OutputFormat},
    terminal::Colorize,
};

#[derive(Debug, Parser)]
#[command(about = "Check one input against one format")]
pub struct Check {
    /// The format to recognize (scientific, ipv4, email, fen)
    #[arg(value_parser = parse_format)]
    pub format: Format,

    /// The input to check
    pub input: String,

    /// Show the file count of every rank (FEN only)
    #[arg(long)]
    pub ranks: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub output: OutputFormat,

    /// Print nothing and report through the exit status only
    #[arg(long, short)]
    pub quiet: bool,
}

/// What `--ranks` has to show for one input.
#[derive(Debug, PartialEq, Eq)]
enum Breakdown<'a> {
    /// Not requested, or the input was over its length limit.
    Skipped,
    /// The descriptor does not have six fields, so there is no board.
    NoBoard,
    Board(BoardReport<'a>),
}

impl Check {
    /// Returns whether the input was accepted.
    ///
    /// # Errors
    ///
    /// Fails if `--ranks` is given for a format other than FEN.
    #[instrument(level = "debug", skip(self, limits))]
    pub fn run(self, limits: &Limits) -> anyhow::Result<bool> {
        if self.ranks && self.format != Format::Fen {
            anyhow::bail!(
                "--ranks only applies to the fen format, not {}",
                self.format
            );
        }

        let verdict = Verdict::new(self.format, &self.input, limits);
        if self.quiet {
            return Ok(verdict.is_accepted());
        }

        let breakdown = self.breakdown(&verdict);
        let parts = verdict
            .is_accepted()
            .then(|| report::parts(self.format, &self.input))
            .flatten();

        match self.output {
            OutputFormat::Table => {
                report::print_verdict(&verdict);
                if let Some(parts) = &parts {
                    report::print_parts(parts);
                }
                match &breakdown {
                    Breakdown::Skipped => {}
                    Breakdown::NoBoard => {
                        let message = format!(
                            "No board to break down: expected {} space-separated fields",
                            fen::FIELDS
                        );
                        println!("{}", message.failure());
                    }
                    Breakdown::Board(board) => report::print_ranks(board),
                }
            }
            OutputFormat::Json => {
                let mut output = serde_json::to_value(&verdict)?;
                if let Some(parts) = parts {
                    output["parts"] = parts;
                }
                match &breakdown {
                    Breakdown::Skipped => {}
                    Breakdown::NoBoard => output["board"] = serde_json::Value::Null,
                    Breakdown::Board(board) => output["board"] = report::ranks_json(board),
                }
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
        }

        Ok(verdict.is_accepted())
    }

    fn breakdown(&self, verdict: &Verdict) -> Breakdown<'_> {
        let too_long = matches!(verdict.rejection(), Some(Error::InputTooLong { .. }));
        if !self.ranks || too_long {
            return Breakdown::Skipped;
        }
        fen::inspect(&self.input).map_or(Breakdown::NoBoard, Breakdown::Board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    fn ranks(input: &str) -> Check {
        Check {
            format: Format::Fen,
            input: input.to_string(),
            ranks: true,
            output: OutputFormat::Table,
            quiet: false,
        }
    }

    #[test]
    fn ranks_flag_requires_fen() {
        let command = Check {
            format: Format::Scientific,
            input: "1e5".to_string(),
            ..ranks(START)
        };
        let error = command.run(&Limits::default()).unwrap_err();
        assert_eq!(
            error.to_string(),
            "--ranks only applies to the fen format, not scientific"
        );
    }

    #[test]
    fn breakdown_of_a_board() {
        let command = ranks(START);
        let verdict = Verdict::new(Format::Fen, START, &Limits::default());
        let Breakdown::Board(board) = command.breakdown(&verdict) else {
            panic!("expected a board breakdown");
        };
        assert!(board.is_valid());
    }

    #[test]
    fn breakdown_without_six_fields() {
        let command = ranks("8/8/8/8/8/8/8/8 w");
        let verdict = Verdict::new(Format::Fen, &command.input, &Limits::default());
        assert_eq!(command.breakdown(&verdict), Breakdown::NoBoard);
        assert!(!command.run(&Limits::default()).unwrap());
    }

    #[test]
    fn breakdown_skipped_for_over_limit_input() {
        let limits = Limits {
            descriptor: 10,
            ..Limits::default()
        };
        let command = ranks(START);
        let verdict = Verdict::new(Format::Fen, START, &limits);
        assert_eq!(command.breakdown(&verdict), Breakdown::Skipped);
        assert!(!command.run(&limits).unwrap());
    }

    #[test]
    fn breakdown_skipped_without_flag() {
        let command = Check {
            ranks: false,
            ..ranks(START)
        };
        let verdict = Verdict::new(Format::Fen, START, &Limits::default());
        assert_eq!(command.breakdown(&verdict), Breakdown::Skipped);
    }
}
