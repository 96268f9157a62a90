//! Markdown output formatter

use super::{OutputFormatter, SummaryReport};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - a section per report with a statistics footer
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    reports: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self { writer, reports: 0 }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_report(&mut self, report: &SummaryReport) -> Result<()> {
        if self.reports > 0 {
            writeln!(self.writer)?;
        }
        self.reports += 1;

        let title = report.title.as_deref().unwrap_or("Summary");
        writeln!(self.writer, "## {title}")?;
        writeln!(self.writer)?;

        match &report.result.error {
            Some(error) => writeln!(self.writer, "> **Error:** {error}")?,
            None => writeln!(self.writer, "{}", report.result.summary)?,
        }

        let stats = &report.stats;
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*{} of {} words | {} sentences | {:.1}% compression*",
            stats.summary_words,
            stats.original_words,
            stats.summary_sentences,
            stats.compression_ratio
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::*;

    fn render(report: &SummaryReport) -> String {
        let mut buffer = Vec::new();
        {
            let mut formatter = MarkdownFormatter::new(&mut buffer);
            formatter.format_report(report).unwrap();
            formatter.finish().unwrap();
        }
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_default_heading_and_footer() {
        let report = report("paragraph");
        let output = render(&report);

        assert!(output.starts_with("## Summary\n\n"));
        assert!(output.contains(&report.result.summary));
        assert!(output.contains("\n---\n*"));
        assert!(output.trim_end().ends_with("compression*"));
    }

    #[test]
    fn test_custom_heading() {
        let output = render(&report("highlights").with_title("Key Highlights"));
        assert!(output.starts_with("## Key Highlights\n"));
        assert!(output.contains("→ "));
    }

    #[test]
    fn test_failure_is_quoted() {
        let output = render(&failed_report());
        assert!(output.contains("> **Error:** Invalid input text"));
    }
}
