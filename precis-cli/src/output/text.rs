//! Plain text output formatter

use super::{OutputFormatter, SummaryReport};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - summary, key points, then statistics
pub struct TextFormatter<W: Write> {
    writer: W,
    reports: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer, reports: 0 }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_report(&mut self, report: &SummaryReport) -> Result<()> {
        if self.reports > 0 {
            writeln!(self.writer)?;
        }
        self.reports += 1;

        if let Some(title) = &report.title {
            writeln!(self.writer, "=== {title} ===")?;
        }

        match &report.result.error {
            Some(error) => writeln!(self.writer, "Error: {error}")?,
            None => writeln!(self.writer, "{}", report.result.summary)?,
        }

        if let Some(key_points) = report.key_points.as_ref().filter(|k| k.success) {
            writeln!(self.writer)?;
            writeln!(self.writer, "Key points:")?;
            writeln!(self.writer, "{}", key_points.summary)?;
        }

        let stats = &report.stats;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Original: {} words, {} sentences",
            stats.original_words, stats.original_sentences
        )?;
        writeln!(
            self.writer,
            "Summary: {} words, {} sentences",
            stats.summary_words, stats.summary_sentences
        )?;
        writeln!(self.writer, "Compression: {:.1}%", stats.compression_ratio)?;
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
    use precis_core::Summarizer;

    fn render(reports: &[SummaryReport]) -> String {
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer);
            for report in reports {
                formatter.format_report(report).unwrap();
            }
            formatter.finish().unwrap();
        }
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_summary_and_stats() {
        let report = report("paragraph");
        let output = render(&[report.clone()]);

        assert!(output.starts_with(&report.result.summary));
        assert!(output.contains("Original: "));
        assert!(output.contains("Compression: "));
        assert!(!output.contains("Key points:"));
    }

    #[test]
    fn test_key_points_section() {
        let key_points = Summarizer::new().summarize(ARTICLE, 150, "bullets");
        let output = render(&[report("paragraph").with_key_points(key_points)]);

        assert!(output.contains("Key points:\n• "));
    }

    #[test]
    fn test_titles_separate_reports() {
        let output = render(&[
            report("paragraph").with_title("Paragraph"),
            report("bullets").with_title("Bullet Points"),
        ]);

        assert!(output.starts_with("=== Paragraph ===\n"));
        assert!(output.contains("\n\n=== Bullet Points ===\n"));
    }

    #[test]
    fn test_failure_shows_error() {
        let output = render(&[failed_report()]);
        assert!(output.starts_with("Error: Invalid input text\n"));
        assert!(output.contains("Compression: 0.0%"));
    }
}
