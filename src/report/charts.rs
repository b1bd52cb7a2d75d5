//! Chart rendering
//!
//! Polarity histogram and subjectivity pie chart, drawn with plotters.

use crate::error::{Error, Result};
use crate::sentiment::{SubjectivityHistogram, SubjectivityLabel};
use plotters::element::Pie;
use plotters::prelude::*;
use std::fmt::Display;
use std::path::Path;
use tracing::info;

const NEGATIVE_TEXT: RGBColor = RGBColor(220, 0, 0);
const POSITIVE_TEXT: RGBColor = RGBColor(0, 128, 0);

fn chart_err<E: Display>(e: E) -> Error {
    Error::Chart(e.to_string())
}

/// Pie slice color for a subjectivity bucket
pub fn slice_color(label: SubjectivityLabel) -> RGBColor {
    match label {
        SubjectivityLabel::MostlyFactual => RGBColor(0x21, 0x96, 0xF3),
        SubjectivityLabel::SlightlyFactual => RGBColor(0x64, 0xB5, 0xF6),
        SubjectivityLabel::Balanced => RGBColor(0xFF, 0xEB, 0x3B),
        SubjectivityLabel::SlightlyOpinionated => RGBColor(0xFF, 0x98, 0x00),
        SubjectivityLabel::MostlyOpinionated => RGBColor(0xE5, 0x39, 0x35),
    }
}

/// Counts of polarity values in `bins` equal-width bins over [-1, 1]
///
/// 1.0 lands in the last bin; values outside the range are clamped.
pub fn polarity_bins(values: &[f64], bins: usize) -> Vec<usize> {
    let bins = bins.max(1);
    let width = 2.0 / bins as f64;
    let mut counts = vec![0usize; bins];

    for &v in values {
        let idx = ((v.clamp(-1.0, 1.0) + 1.0) / width) as usize;
        counts[idx.min(bins - 1)] += 1;
    }
    counts
}

/// Non-empty pie slices with their share of the total
pub fn pie_slices(histogram: &SubjectivityHistogram) -> Vec<(SubjectivityLabel, f64)> {
    let total = histogram.total();
    if total == 0 {
        return Vec::new();
    }

    histogram
        .iter()
        .filter(|&(_, count)| count > 0)
        .map(|(label, count)| (label, count as f64 / total as f64))
        .collect()
}

/// Renders report charts as PNG files
#[derive(Debug, Clone)]
pub struct ChartRenderer {
    bins: usize,
    histogram_size: (u32, u32),
    pie_size: (u32, u32),
}

impl Default for ChartRenderer {
    fn default() -> Self {
        Self::new(crate::defaults::HISTOGRAM_BINS)
    }
}

impl ChartRenderer {
    /// Create a renderer with `bins` polarity histogram bins
    pub fn new(bins: usize) -> Self {
        Self {
            bins: bins.max(1),
            histogram_size: (800, 500),
            pie_size: (700, 700),
        }
    }

    /// Draw the polarity distribution for `keyword`
    pub fn polarity_histogram(&self, path: &Path, keyword: &str, polarities: &[f64]) -> Result<()> {
        let counts = polarity_bins(polarities, self.bins);
        let y_max = counts.iter().copied().max().unwrap_or(0).max(1) as f64 * 1.15;
        let width = 2.0 / self.bins as f64;

        let root = BitMapBackend::new(path, self.histogram_size).into_drawing_area();
        root.fill(&WHITE).map_err(chart_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(
                format!("Polarity Score Distribution for the phrase '{}'", keyword),
                ("sans-serif", 22),
            )
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(55)
            .build_cartesian_2d(-1f64..1f64, 0f64..y_max)
            .map_err(chart_err)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .bold_line_style(&BLACK.mix(0.2))
            .x_labels(5)
            .x_label_formatter(&|x| format!("{:.1}", x))
            .y_label_formatter(&|y| format!("{:.0}", y))
            .x_desc("Polarity Score (Negative to Positive)")
            .y_desc("Number of Tweets")
            .draw()
            .map_err(chart_err)?;

        let bars = || {
            counts.iter().enumerate().map(move |(i, &count)| {
                let x0 = -1.0 + i as f64 * width;
                [(x0, 0.0), (x0 + width, count as f64)]
            })
        };

        chart
            .draw_series(bars().map(|corners| Rectangle::new(corners, BLUE.filled())))
            .map_err(chart_err)?;
        chart
            .draw_series(bars().map(|corners| Rectangle::new(corners, BLACK.stroke_width(1))))
            .map_err(chart_err)?;

        chart
            .draw_series(LineSeries::new(vec![(0.0, 0.0), (0.0, y_max)], &RED))
            .map_err(chart_err)?;

        chart
            .draw_series([
                Text::new(
                    "Negative Connotation",
                    (-0.9, y_max * 0.9),
                    ("sans-serif", 15).into_font().color(&NEGATIVE_TEXT),
                ),
                Text::new(
                    "Positive Connotation",
                    (0.6, y_max * 0.9),
                    ("sans-serif", 15).into_font().color(&POSITIVE_TEXT),
                ),
            ])
            .map_err(chart_err)?;

        root.present().map_err(chart_err)?;
        info!(path = %path.display(), "Saved polarity histogram");
        Ok(())
    }

    /// Draw the subjectivity breakdown for `keyword`
    pub fn subjectivity_pie(
        &self,
        path: &Path,
        keyword: &str,
        histogram: &SubjectivityHistogram,
    ) -> Result<()> {
        let root = BitMapBackend::new(path, self.pie_size).into_drawing_area();
        root.fill(&WHITE).map_err(chart_err)?;

        let area = root
            .titled(
                &format!("Subjectivity Breakdown for '{}'", keyword),
                ("sans-serif", 24).into_font().color(&BLACK),
            )
            .map_err(chart_err)?;

        let (w, h) = area.dim_in_pixel();
        let center = (w as i32 / 2, h as i32 / 2);
        let slices = pie_slices(histogram);

        if slices.is_empty() {
            area.draw_text(
                "No data",
                &("sans-serif", 20).into_font().color(&BLACK),
                (center.0 - 35, center.1),
            )
            .map_err(chart_err)?;
        } else {
            let radius = w.min(h) as f64 * 0.3;
            let sizes: Vec<f64> = slices.iter().map(|&(_, share)| share * 100.0).collect();
            let colors: Vec<RGBColor> =
                slices.iter().map(|&(label, _)| slice_color(label)).collect();
            let labels: Vec<&str> = slices.iter().map(|&(label, _)| label.title()).collect();

            let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
            pie.start_angle(140.0);
            pie.label_style(("sans-serif", 16).into_font().color(&BLACK));
            pie.percentages(("sans-serif", 14).into_font().color(&BLACK));
            area.draw(&pie).map_err(chart_err)?;
        }

        root.present().map_err(chart_err)?;
        info!(path = %path.display(), "Saved subjectivity pie chart");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::ScoredItem;

    #[test]
    fn test_polarity_bins() {
        let counts = polarity_bins(&[-1.0, -0.95, 0.0, 0.04, 0.99, 1.0], 20);

        assert_eq!(counts.len(), 20);
        assert_eq!(counts[0], 2);
        assert_eq!(counts[10], 2);
        assert_eq!(counts[19], 2);
        assert_eq!(counts.iter().sum::<usize>(), 6);
    }

    #[test]
    fn test_polarity_bins_clamps() {
        let counts = polarity_bins(&[-3.0, 3.0], 4);
        assert_eq!(counts, vec![1, 0, 0, 1]);
    }

    #[test]
    fn test_pie_slices_skip_empty_buckets() {
        let items = vec![
            ScoredItem::new(0.0, 0.1),
            ScoredItem::new(0.0, 0.9),
            ScoredItem::new(0.0, 0.95),
        ];
        let slices = pie_slices(&SubjectivityHistogram::from_items(&items));

        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].0, SubjectivityLabel::MostlyFactual);
        assert!((slices[1].1 - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_pie_slices_empty() {
        assert!(pie_slices(&SubjectivityHistogram::default()).is_empty());
    }

    #[test]
    fn test_slice_colors_distinct() {
        let colors: Vec<(u8, u8, u8)> = SubjectivityLabel::ALL
            .iter()
            .map(|&l| {
                let c = slice_color(l);
                (c.0, c.1, c.2)
            })
            .collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
