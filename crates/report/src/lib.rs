pub mod plots;

pub use plots::render_pie_chart;

use anyhow::{Context, Result};
use sentiment::{Label, ScoredSegment};
use std::fs::File;
use std::path::Path;
use tracing::info;

/// Terminal aggregate of the run: label counts across all scored
/// segments. Purely derived, never mutated further.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentimentCounts {
    pub positive: usize,
    pub negative: usize,
}

impl SentimentCounts {
    pub fn from_segments(segments: &[ScoredSegment]) -> Self {
        let mut counts = Self::default();
        for segment in segments {
            match segment.label {
                Label::Positive => counts.positive += 1,
                Label::Negative => counts.negative += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative
    }

    /// (positive, negative) shares in percent; both zero for an empty run.
    pub fn percentages(&self) -> (f64, f64) {
        let total = self.total();
        if total == 0 {
            return (0.0, 0.0);
        }
        (
            self.positive as f64 / total as f64 * 100.0,
            self.negative as f64 / total as f64 * 100.0,
        )
    }
}

/// Write the full result table (source label, normalized text, signed
/// score, label) as CSV.
pub fn write_table(segments: &[ScoredSegment], path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create result table {:?}", path))?;

    let mut writer = csv::Writer::from_writer(file);
    for segment in segments {
        writer.serialize(segment)?;
    }
    writer.flush()?;

    info!(path = %path.display(), rows = segments.len(), "Wrote analysis table");
    Ok(())
}
