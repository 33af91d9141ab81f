//! Reporting sinks
//!
//! A sink receives one [`SectionReport`] per completed section and must not
//! reorder or alter it.

use crate::error::SinkError;
use crate::report::SectionReport;
use std::io::Write;

/// Receiver of completed section reports
pub trait ReportSink {
    /// Accept the report of one completed section
    fn emit(&mut self, report: SectionReport) -> Result<(), SinkError>;
}

impl<S: ReportSink + ?Sized> ReportSink for &mut S {
    fn emit(&mut self, report: SectionReport) -> Result<(), SinkError> {
        (**self).emit(report)
    }
}

impl<S: ReportSink + ?Sized> ReportSink for Box<S> {
    fn emit(&mut self, report: SectionReport) -> Result<(), SinkError> {
        (**self).emit(report)
    }
}

/// Keeps every report in memory, in emission order
#[derive(Debug, Default)]
pub struct CollectingSink {
    reports: Vec<SectionReport>,
}

impl CollectingSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports received so far
    pub fn reports(&self) -> &[SectionReport] {
        &self.reports
    }

    /// Consume the sink, returning its reports
    pub fn into_reports(self) -> Vec<SectionReport> {
        self.reports
    }
}

impl ReportSink for CollectingSink {
    fn emit(&mut self, report: SectionReport) -> Result<(), SinkError> {
        self.reports.push(report);
        Ok(())
    }
}

/// Writes each report as one JSON record per line
pub struct JsonLinesSink<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonLinesSink<W> {
    /// Create a sink writing compact records to `writer`
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: false,
        }
    }

    /// Pretty-print records. Pretty records span several lines but remain
    /// readable by a streaming JSON reader.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Borrow the underlying writer
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Consume the sink, returning the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for JsonLinesSink<W> {
    fn emit(&mut self, report: SectionReport) -> Result<(), SinkError> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &report)?;
        } else {
            serde_json::to_writer(&mut self.writer, &report)?;
        }
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}
