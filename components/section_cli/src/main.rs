//! Section report viewer CLI
//!
//! Entry point for `section-report`. Parses CLI arguments and delegates to
//! [`section_cli::run`].

use clap::Parser as ClapParser;
use section_cli::telemetry::{init_tracing, level_for};
use section_cli::Cli;
use termcolor::StandardStream;

fn main() {
    let cli = Cli::parse();
    init_tracing(level_for(cli.verbose));

    let stdout = StandardStream::stdout(cli.color.choice());
    let mut out = stdout.lock();

    if let Err(e) = section_cli::run(&cli, &mut out) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
