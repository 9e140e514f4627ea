use clap::Parser;
use dialoguer::{Input, Select, theme::ColorfulTheme};
use recognizer::{Format, Limits, Verdict, check_all};
use tracing::instrument;

use super::{report, terminal::Colorize};

/// What the user picked from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    One(Format),
    All,
    Quit,
}

const CHOICES: [(&str, Choice); 6] = [
    ("Validate scientific notation", Choice::One(Format::Scientific)),
    ("Validate IPv4 address", Choice::One(Format::Ipv4)),
    ("Validate email address", Choice::One(Format::Email)),
    ("Validate FEN descriptor", Choice::One(Format::Fen)),
    ("Validate all", Choice::All),
    ("Quit", Choice::Quit),
];

#[derive(Debug, Parser)]
#[command(about = "Interactive menu (default)")]
pub struct Menu {}

impl Menu {
    #[instrument(level = "debug", skip(self, limits))]
    pub fn run(self, limits: &Limits) -> anyhow::Result<()> {
        let theme = ColorfulTheme::default();
        let labels: Vec<&str> = CHOICES.iter().map(|(label, _)| *label).collect();

        println!("{}", "=== STRING RECOGNITION ===".info());
        loop {
            let index = Select::with_theme(&theme)
                .with_prompt("Select an option")
                .items(&labels)
                .default(0)
                .interact()?;

            let format = match CHOICES[index].1 {
                Choice::Quit => {
                    println!("Goodbye!");
                    return Ok(());
                }
                Choice::One(format) => Some(format),
                Choice::All => None,
            };

            let input: String = Input::with_theme(&theme)
                .with_prompt("Enter a string")
                .allow_empty(true)
                .interact_text()?;

            match format {
                Some(format) => report::print_verdict(&Verdict::new(format, &input, limits)),
                None => report::print_all(&input, &check_all(&input, limits)),
            }
            println!();
        }
    }
}
