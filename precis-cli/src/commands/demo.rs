//! Demo command implementation

use crate::output::{create_formatter, OutputFormat, SummaryReport};
use anyhow::Result;
use clap::Args;
use precis_core::api::defaults;
use precis_core::{Summarizer, SummaryStyle};
use std::io;

/// Sample article summarized by the demo
pub const SAMPLE_TEXT: &str = "Artificial intelligence has moved from research laboratories into \
everyday products over the past decade. Voice assistants, recommendation engines, and photo \
search all rely on machine learning models trained on very large datasets. Businesses use these \
systems to forecast demand, detect fraud, and answer routine customer questions around the clock. \
Hospitals are testing models that flag early signs of disease in medical scans for review by \
doctors. Critics warn that models can repeat the biases present in their training data and make \
unfair decisions. Regulators in several countries are drafting rules that require transparency \
about how automated decisions are made. Researchers are also working on smaller models that run \
on phones without sending personal data to remote servers. The energy used to train the largest \
models has become a concern for companies with climate commitments. Most experts expect the \
technology to keep spreading, with oversight shaping how quickly it reaches sensitive areas.";

/// Arguments for the demo command
#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl DemoArgs {
    /// Execute the demo command
    pub fn execute(&self) -> Result<()> {
        let mut formatter = create_formatter(self.format, Box::new(io::stdout()));
        for report in demo_reports() {
            formatter.format_report(&report)?;
        }
        formatter.finish()
    }
}

/// One report per style for the sample article
pub fn demo_reports() -> Vec<SummaryReport> {
    let summarizer = Summarizer::new();
    SummaryStyle::all()
        .into_iter()
        .map(|style| {
            let result = summarizer.summarize(SAMPLE_TEXT, defaults::DEMO_TARGET_WORDS, style.as_str());
            SummaryReport::new(SAMPLE_TEXT, result).with_title(style.label())
        })
        .collect()
}
