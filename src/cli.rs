//! Command-line argument parsing for the contact book.

use clap::{CommandFactory, FromArgMatches, Parser};
use contacts_cli::commands::help::help_text;
use contacts_cli::config::Config;
use std::path::PathBuf;

/// A small interactive contact book for the terminal.
#[derive(Parser, Debug)]
#[command(name = "contacts")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(long, value_name = "PATH", env = "CONTACTS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Read commands from a file instead of the terminal (use "-" for stdin)
    #[arg(long, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Prompt written before each input line (overrides config)
    #[arg(long, value_name = "TEXT")]
    pub prompt: Option<String>,

    /// Write logs to stderr instead of the log file
    #[arg(long)]
    pub log_stderr: bool,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        let matches = Self::command_with_help().get_matches();
        Self::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
    }

    /// Returns the clap command with the interactive command list as after-help.
    pub fn command_with_help() -> clap::Command {
        Self::command().after_help(help_text())
    }

    /// Returns the config file path to use.
    ///
    /// Uses the --config argument if provided, otherwise the default path.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::default_path)
    }

    /// Returns the script path, or None when reading from stdin.
    pub fn script_path(&self) -> Option<&PathBuf> {
        self.script.as_ref().filter(|p| p.as_os_str() != "-")
    }
}
