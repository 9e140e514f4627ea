use clap::Parser;
use recognizer::{Limits, Verdict, check_all};
use tracing::instrument;

use super::report::{self, OutputFormat};

#[derive(Debug, Parser)]
#[command(about = "Check one input against scientific notation, IPv4 and email")]
pub struct All {
    /// The input to check
    pub input: String,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub output: OutputFormat,
}

impl All {
    /// Returns whether any format accepted the input.
    #[instrument(level = "debug", skip(self, limits))]
    pub fn run(self, limits: &Limits) -> anyhow::Result<bool> {
        let verdicts = check_all(&self.input, limits);

        match self.output {
            OutputFormat::Table => report::print_all(&self.input, &verdicts),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&verdicts)?),
        }

        Ok(verdicts.iter().any(Verdict::is_accepted))
    }
}
