//! Viewer entry point shared by the binary and tests

use crate::cli::Cli;
use crate::error::ViewerResult;
use crate::loader::{collect_inputs, load_reports};
use section_harness::{ConsoleRenderer, RenderOptions, RunSummary};
use std::io::Write;
use termcolor::WriteColor;
use tracing::info;

/// Load the reports named by `cli` and write them to `out`.
///
/// Returns the summary of everything loaded.
pub fn run<W: WriteColor>(cli: &Cli, out: &mut W) -> ViewerResult<RunSummary> {
    let inputs = collect_inputs(&cli.paths)?;
    let reports = load_reports(&inputs)?;
    let summary = RunSummary::from_reports(&reports);
    info!(
        sections = summary.sections,
        total = summary.total,
        failed = summary.failed,
        "reports loaded"
    );

    if cli.json {
        writeln!(out, "{}", summary.to_json()?)?;
        out.flush()?;
    } else {
        let options = RenderOptions::default().with_summary(cli.summary);
        ConsoleRenderer::new(&mut *out)
            .with_options(options)
            .render_run(&reports)?;
    }

    Ok(summary)
}
