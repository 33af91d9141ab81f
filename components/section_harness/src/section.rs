//! Section aggregator
//!
//! A section is registered and run in one call: the registration callback
//! receives a fresh [`TestRegistrar`], and once it returns the collected
//! outcomes are handed to the sink as a single [`SectionReport`]. If the
//! callback fails, the error propagates and nothing is reported.

use crate::error::HarnessError;
use crate::report::{RunSummary, SectionReport};
use crate::runner::TestRegistrar;
use crate::sink::ReportSink;
use tracing::info;

/// Run one section and emit its report to `sink`.
///
/// Returns the error raised by `register` (or by a test body through it)
/// without emitting anything.
pub fn section<S, F>(sink: &mut S, name: impl Into<String>, register: F) -> anyhow::Result<()>
where
    S: ReportSink + ?Sized,
    F: FnOnce(&mut TestRegistrar) -> anyhow::Result<()>,
{
    let report = run_section(name, register)?;
    emit(sink, report)?;
    Ok(())
}

fn run_section<F>(name: impl Into<String>, register: F) -> anyhow::Result<SectionReport>
where
    F: FnOnce(&mut TestRegistrar) -> anyhow::Result<()>,
{
    let mut registrar = TestRegistrar::new(name);
    register(&mut registrar)?;
    Ok(registrar.into_report())
}

fn emit<S>(sink: &mut S, report: SectionReport) -> Result<(), HarnessError>
where
    S: ReportSink + ?Sized,
{
    info!(
        section = %report.name(),
        passed = report.passed_count(),
        failed = report.failed_count(),
        "section complete"
    );
    let section = report.name().to_string();
    sink.emit(report)
        .map_err(|source| HarnessError::Sink { section, source })
}

/// Runs sections against one sink and keeps a running summary
pub struct Harness<S: ReportSink> {
    sink: S,
    summary: RunSummary,
}

impl<S: ReportSink> Harness<S> {
    /// Create a harness emitting to `sink`
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            summary: RunSummary::new(),
        }
    }

    /// Run one section, emit its report and fold it into the summary.
    ///
    /// See [`section`] for error behavior; a section that fails leaves the
    /// summary unchanged.
    pub fn section<F>(&mut self, name: impl Into<String>, register: F) -> anyhow::Result<()>
    where
        F: FnOnce(&mut TestRegistrar) -> anyhow::Result<()>,
    {
        let report = run_section(name, register)?;
        let mut summary = RunSummary::new();
        summary.add_section(&report);
        emit(&mut self.sink, report)?;
        self.summary.merge(&summary);
        Ok(())
    }

    /// Summary of every section emitted so far
    pub fn summary(&self) -> &RunSummary {
        &self.summary
    }

    /// Borrow the sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Finish the run, returning the summary
    pub fn finish(self) -> RunSummary {
        self.summary
    }

    /// Finish the run, returning both the sink and the summary
    pub fn into_parts(self) -> (S, RunSummary) {
        (self.sink, self.summary)
    }
}
