//! Command line arguments

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use termcolor::ColorChoice;

/// When to color output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Color when stdout is a terminal
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

impl ColorMode {
    /// Resolve to a termcolor choice for stdout
    pub fn choice(self) -> ColorChoice {
        match self {
            ColorMode::Auto if atty::is(atty::Stream::Stdout) => ColorChoice::Auto,
            ColorMode::Auto => ColorChoice::Never,
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
        }
    }
}

/// Render section harness reports
#[derive(Parser, Debug)]
#[command(name = "section-report", version)]
pub struct Cli {
    /// Report files or directories of `.json`/`.jsonl` files; reads stdin when empty
    pub paths: Vec<PathBuf>,

    /// When to color output
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Append the run summary after the rendered sections
    #[arg(short, long)]
    pub summary: bool,

    /// Print the run summary as JSON instead of rendering sections
    #[arg(long, conflicts_with = "summary")]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
