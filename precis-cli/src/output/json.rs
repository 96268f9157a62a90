//! JSON output formatter

use super::{OutputFormatter, SummaryReport};
use anyhow::Result;
use std::io::Write;

/// JSON formatter - one object per report, an array when there are several
pub struct JsonFormatter<W: Write> {
    writer: W,
    reports: Vec<SummaryReport>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            reports: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_report(&mut self, report: &SummaryReport) -> Result<()> {
        self.reports.push(report.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        match self.reports.as_slice() {
            [single] => serde_json::to_writer_pretty(&mut self.writer, single)?,
            reports => serde_json::to_writer_pretty(&mut self.writer, reports)?,
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
