use std::path::{Path, PathBuf};

mod all;
mod batch;
mod check;
mod menu;
mod report;
mod terminal;

use all::All;
use batch::Batch;
use check::Check;
use clap::ArgAction;
use menu::Menu;
use recognizer::Format;
use tracing::instrument;

/// Exit status when an input is not accepted.
const REJECTED: i32 = 2;

/// Parse a format name at the CLI boundary.
fn parse_format(s: &str) -> Result<Format, String> {
    s.parse().map_err(|e| format!("{e}"))
}

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the configuration file
    #[arg(short, long, default_value = "recognizer.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        self.command
            .unwrap_or_else(|| Command::Menu(Menu {}))
            .run(&self.config)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false)
            .with_writer(std::io::stderr);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

/// Loads the configuration file, falling back to defaults if it does not
/// exist.
fn load_config(path: &Path) -> anyhow::Result<recognizer::Config> {
    if path.exists() {
        let config = recognizer::Config::load(path)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    } else {
        tracing::debug!("No config at {}, using defaults", path.display());
        Ok(recognizer::Config::default())
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Check one input against one format
    Check(Check),

    /// Check one input against scientific notation, IPv4 and email
    ///
    /// Each format is reported independently.
    All(All),

    /// Check every line of a file (or stdin)
    Batch(Batch),

    /// Interactive menu (default)
    Menu(Menu),

    /// Show or create the configuration file
    Config(Config),
}

impl Command {
    /// Only commands that apply limits load the configuration file.
    fn run(self, config_path: &Path) -> anyhow::Result<()> {
        let limits = || load_config(config_path).map(|config| config.limits());
        let accepted = match self {
            Self::Check(command) => command.run(&limits()?)?,
            Self::All(command) => command.run(&limits()?)?,
            Self::Batch(command) => command.run(&limits()?)?,
            Self::Menu(command) => {
                command.run(&limits()?)?;
                true
            }
            Self::Config(command) => {
                command.run(config_path)?;
                true
            }
        };

        if !accepted {
            std::process::exit(REJECTED);
        }
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
pub struct Config {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Debug, clap::Subcommand)]
enum ConfigCommand {
    /// Show the configuration in effect
    Show,

    /// Write a configuration file with default settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Config {
    #[instrument]
    fn run(self, path: &Path) -> anyhow::Result<()> {
        use terminal::Colorize;

        match self.command {
            ConfigCommand::Show => {
                let config = load_config(path)?;
                let source = if path.exists() {
                    path.display().to_string()
                } else {
                    "defaults".to_string()
                };
                println!("Configuration ({}):", source.dim());
                println!("  max_descriptor_length: {}", config.max_descriptor_length);
                println!("  max_address_length: {}", config.max_address_length);
                println!("  max_input_length: {}", config.max_input_length);
            }
            ConfigCommand::Init { force } => {
                if path.exists() && !force {
                    anyhow::bail!(
                        "Config file {} already exists (use --force to overwrite)",
                        path.display()
                    );
                }
                recognizer::Config::default().save(path)?;
                println!(
                    "{}",
                    format!("Wrote default configuration to {}", path.display()).success()
                );
            }
        }

        Ok(())
    }
}
