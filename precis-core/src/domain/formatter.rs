//! Summary presentation styles

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Text returned when there is nothing to render
pub const EMPTY_SUMMARY: &str = "Unable to generate summary.";

/// Prefix of each line in bullet style
pub const BULLET_PREFIX: &str = "• ";

/// Prefix of each line in highlight style
pub const HIGHLIGHT_PREFIX: &str = "→ ";

/// How selected sentences are presented
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryStyle {
    /// Sentences joined into one block
    #[default]
    Paragraph,
    /// One `• ` line per sentence
    Bullets,
    /// One `→ ` line per sentence
    Highlights,
}

impl SummaryStyle {
    /// Resolve a style name. Unknown names fall back to [`SummaryStyle::Paragraph`].
    ///
    /// Matching ignores case and treats spaces and hyphens as underscores, so
    /// display labels like "Bullet Points" and "Key Highlights" resolve too.
    pub fn parse(name: &str) -> Self {
        let key = name.trim().to_lowercase().replace([' ', '-'], "_");
        match key.as_str() {
            "bullets" | "bullet" | "bullet_points" => SummaryStyle::Bullets,
            "highlights" | "key_highlights" => SummaryStyle::Highlights,
            _ => SummaryStyle::Paragraph,
        }
    }

    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryStyle::Paragraph => "paragraph",
            SummaryStyle::Bullets => "bullets",
            SummaryStyle::Highlights => "highlights",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            SummaryStyle::Paragraph => "Paragraph",
            SummaryStyle::Bullets => "Bullet Points",
            SummaryStyle::Highlights => "Key Highlights",
        }
    }

    /// All styles in display order
    pub fn all() -> [SummaryStyle; 3] {
        [
            SummaryStyle::Paragraph,
            SummaryStyle::Bullets,
            SummaryStyle::Highlights,
        ]
    }

    fn line_prefix(&self) -> Option<&'static str> {
        match self {
            SummaryStyle::Paragraph => None,
            SummaryStyle::Bullets => Some(BULLET_PREFIX),
            SummaryStyle::Highlights => Some(HIGHLIGHT_PREFIX),
        }
    }
}

impl FromStr for SummaryStyle {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for SummaryStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render sentences in the given style
pub fn render<S: AsRef<str>>(sentences: &[S], style: SummaryStyle) -> String {
    if sentences.is_empty() {
        return EMPTY_SUMMARY.to_string();
    }

    match style.line_prefix() {
        Some(prefix) => sentences
            .iter()
            .map(|s| format!("{prefix}{}", s.as_ref()))
            .collect::<Vec<_>>()
            .join("\n"),
        None => sentences
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<&str>>()
            .join(" "),
    }
}
