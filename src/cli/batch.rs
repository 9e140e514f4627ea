use std::{
    io::{self, Read},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use recognizer::{Format, Limits, Verdict, check_all};
use serde_json::json;
use tracing::instrument;

use super::{
    parse_format,
    report::{self, OutputFormat},
    terminal::Colorize,
};

#[derive(Debug, Parser)]
#[command(about = "Check every line of a file (or stdin)")]
pub struct Batch {
    /// File with one input per line. Reads stdin when omitted.
    pub file: Option<PathBuf>,

    /// The format to recognize. Runs scientific, IPv4 and email when omitted.
    #[arg(long, short, value_parser = parse_format)]
    pub format: Option<Format>,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub output: OutputFormat,

    /// Only print the summary
    #[arg(long, short)]
    pub quiet: bool,
}

/// The verdicts for one input line.
#[derive(Debug)]
pub struct Line {
    pub number: usize,
    pub verdicts: Vec<Verdict>,
}

impl Line {
    /// A line is accepted if any of its formats accepted it.
    pub fn is_accepted(&self) -> bool {
        self.verdicts.iter().any(Verdict::is_accepted)
    }
}

impl Batch {
    /// Returns whether every line was accepted.
    #[instrument(level = "debug", skip(self, limits))]
    pub fn run(self, limits: &Limits) -> anyhow::Result<bool> {
        let content = match &self.file {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?,
            None => {
                let mut content = String::new();
                io::stdin()
                    .read_to_string(&mut content)
                    .context("Failed to read stdin")?;
                content
            }
        };

        let lines = Self::check_lines(&content, self.format, limits);
        let accepted = lines.iter().filter(|line| line.is_accepted()).count();
        tracing::info!(lines = lines.len(), accepted, "checked batch");

        match self.output {
            OutputFormat::Table => self.output_table(&lines, accepted),
            OutputFormat::Json => Self::output_json(&lines, accepted)?,
        }

        Ok(accepted == lines.len())
    }

    /// Checks each line in parallel. Results keep the input order.
    pub fn check_lines(content: &str, format: Option<Format>, limits: &Limits) -> Vec<Line> {
        let inputs: Vec<(usize, &str)> = content
            .lines()
            .enumerate()
            .map(|(index, input)| (index + 1, input))
            .collect();

        inputs
            .par_iter()
            .map(|&(number, input)| Line {
                number,
                verdicts: format.map_or_else(
                    || check_all(input, limits),
                    |format| vec![Verdict::new(format, input, limits)],
                ),
            })
            .collect()
    }

    fn output_table(&self, lines: &[Line], accepted: usize) {
        if !self.quiet {
            for line in lines {
                for verdict in &line.verdicts {
                    let text = format!("{:>4}: {}", line.number, report::verdict_line(verdict));
                    if verdict.is_accepted() {
                        println!("{}", text.success());
                    } else {
                        println!("{}", text.failure());
                    }
                }
            }
            println!();
        }

        let summary = format!("{accepted} of {} lines accepted", lines.len());
        if accepted == lines.len() {
            println!("{}", summary.success());
        } else {
            println!("{}", summary.failure());
        }
    }

    fn output_json(lines: &[Line], accepted: usize) -> anyhow::Result<()> {
        let rows: Vec<_> = lines
            .iter()
            .map(|line| {
                json!({
                    "line": line.number,
                    "accepted": line.is_accepted(),
                    "verdicts": line.verdicts,
                })
            })
            .collect();

        let output = json!({
            "lines": rows,
            "summary": {
                "total": lines.len(),
                "accepted": accepted,
                "rejected": lines.len() - accepted,
            }
        });

        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }
}
