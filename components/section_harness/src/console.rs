//! Colored console rendering of section reports
//!
//! Output format:
//!
//! ```text
//! // running 3 tests in 2 sections:
//!
//! // array
//!   - array length returns expected length
//!   - array.push pushes value
//!       reason: expected pushed value to be 123 and got undefined
//!
//! ```
//!
//! Passing tests are written in green, failing tests and their reason in red.

use crate::error::SinkError;
use crate::report::{RunSummary, SectionReport};
use crate::sink::ReportSink;
use std::io::{self, Write};
use termcolor::{Color, ColorSpec, WriteColor};

/// What to render around the per-section blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Write the `// running N tests in M sections:` header
    pub show_header: bool,
    /// Write the run summary after the last section
    pub show_summary: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_header: true,
            show_summary: false,
        }
    }
}

impl RenderOptions {
    /// Enable or disable the header
    pub fn with_header(mut self, show: bool) -> Self {
        self.show_header = show;
        self
    }

    /// Enable or disable the trailing summary
    pub fn with_summary(mut self, show: bool) -> Self {
        self.show_summary = show;
        self
    }
}

/// Renders reports to a color-capable writer
pub struct ConsoleRenderer<W: WriteColor> {
    out: W,
    options: RenderOptions,
}

impl<W: WriteColor> ConsoleRenderer<W> {
    /// Create a renderer with default options
    pub fn new(out: W) -> Self {
        Self {
            out,
            options: RenderOptions::default(),
        }
    }

    /// Replace the render options
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Current render options
    pub fn options(&self) -> RenderOptions {
        self.options
    }

    /// Render a whole run: header, every section, then the summary when
    /// enabled.
    pub fn render_run(&mut self, reports: &[SectionReport]) -> io::Result<()> {
        let summary = RunSummary::from_reports(reports);
        if self.options.show_header {
            self.render_header(&summary)?;
        }
        for report in reports {
            self.render_section(report)?;
        }
        if self.options.show_summary {
            self.render_summary(&summary)?;
        }
        self.out.flush()
    }

    /// Write the run header
    pub fn render_header(&mut self, summary: &RunSummary) -> io::Result<()> {
        writeln!(
            self.out,
            "// running {} tests in {} sections:\n",
            summary.total, summary.sections
        )
    }

    /// Write one section block
    pub fn render_section(&mut self, report: &SectionReport) -> io::Result<()> {
        writeln!(self.out, "// {}", report.name())?;
        for outcome in report.outcomes() {
            match outcome.message() {
                None => self.colored(Color::Green, &format!("  - {}", outcome.name()))?,
                Some(reason) => {
                    self.colored(Color::Red, &format!("  - {}", outcome.name()))?;
                    self.colored(Color::Red, &format!("      reason: {}", reason))?;
                }
            }
        }
        writeln!(self.out)
    }

    /// Write the run summary
    pub fn render_summary(&mut self, summary: &RunSummary) -> io::Result<()> {
        let color = if summary.is_success() {
            Color::Green
        } else {
            Color::Red
        };
        for line in summary.summary().lines() {
            self.colored(color, line)?;
        }
        Ok(())
    }

    fn colored(&mut self, color: Color, line: &str) -> io::Result<()> {
        self.out.set_color(ColorSpec::new().set_fg(Some(color)))?;
        write!(self.out, "{}", line)?;
        self.out.reset()?;
        writeln!(self.out)
    }

    /// Borrow the underlying writer
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Consume the renderer, returning the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Renders each section as soon as it completes. The header is never
/// written since the run size is not known up front.
impl<W: WriteColor> ReportSink for ConsoleRenderer<W> {
    fn emit(&mut self, report: SectionReport) -> Result<(), SinkError> {
        self.render_section(&report)?;
        self.out.flush()?;
        Ok(())
    }
}
