use anyhow::Result;
use plotters::prelude::*;
use tracing::info;

use crate::SentimentCounts;

const POSITIVE_COLOR: RGBColor = RGBColor(144, 238, 144); // light green
const NEGATIVE_COLOR: RGBColor = RGBColor(240, 128, 128); // light coral

const CHART_SIZE: (u32, u32) = (800, 600);
const START_ANGLE: f64 = 140.0;

/// Render the two-category pie chart (counts as slice sizes, percentage
/// labels inside the slices) to a PNG file.
pub fn render_pie_chart(counts: &SentimentCounts, title: &str, path: &str) -> Result<()> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let title_style = TextStyle::from(("sans-serif", 30, FontStyle::Bold).into_font());
    // titled() returns the area below the title band; the pie is laid
    // out inside that remainder.
    let root = root.titled(title, title_style)?;

    let (width, height) = root.dim_in_pixel();
    let center = (width as i32 / 2, height as i32 / 2);
    let radius = f64::from(width.min(height)) * 0.32;

    let sizes = vec![counts.positive as f64, counts.negative as f64];
    let colors = vec![POSITIVE_COLOR, NEGATIVE_COLOR];
    let labels = vec!["Positive", "Negative"];

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(START_ANGLE);
    pie.label_style(("sans-serif", 24).into_font());
    pie.percentages(("sans-serif", 20).into_font().color(&BLACK));
    root.draw(&pie)?;

    root.present()?;
    info!(%path, positive = counts.positive, negative = counts.negative, "Saved sentiment pie chart");
    Ok(())
}
