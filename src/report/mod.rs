//! # Report Module
//!
//! Charts and the PDF summary built from an aggregate result.

mod charts;
mod pdf;
mod summary;

pub use charts::{pie_slices, polarity_bins, slice_color, ChartRenderer};
pub use pdf::ReportWriter;
pub use summary::{wrap_text, Anchor, LineStyle, SummaryLine, SummaryPage};

use crate::config::ReportSettings;
use crate::error::Result;
use crate::sentiment::{AggregateResult, ScoredItem};
use std::path::{Path, PathBuf};
use tracing::info;

/// Files produced by one report run
#[derive(Debug, Clone, PartialEq)]
pub struct ReportArtifacts {
    pub polarity_chart: PathBuf,
    pub subjectivity_chart: PathBuf,
    pub pdf: PathBuf,
}

/// File name of the PDF for `keyword`; characters unsafe in file names become `_`
pub fn pdf_file_name(keyword: &str) -> String {
    let safe: String = keyword
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    format!("summary_{}.pdf", safe)
}

/// Render both charts and the PDF summary into `settings.output_dir`
pub fn generate_report(
    settings: &ReportSettings,
    keyword: &str,
    items: &[ScoredItem],
    result: &AggregateResult,
) -> Result<ReportArtifacts> {
    let out_dir: &Path = &settings.output_dir;
    std::fs::create_dir_all(out_dir)?;

    let artifacts = ReportArtifacts {
        polarity_chart: out_dir.join(&settings.polarity_chart),
        subjectivity_chart: out_dir.join(&settings.subjectivity_chart),
        pdf: out_dir.join(pdf_file_name(keyword)),
    };

    let renderer = ChartRenderer::new(settings.histogram_bins);
    let polarities: Vec<f64> = items.iter().map(|i| i.polarity()).collect();
    renderer.polarity_histogram(&artifacts.polarity_chart, keyword, &polarities)?;
    renderer.subjectivity_pie(&artifacts.subjectivity_chart, keyword, &result.histogram)?;

    let summary = SummaryPage::build(keyword, result, settings.wrap_width);
    ReportWriter::new().write(
        &artifacts.pdf,
        &summary,
        &[artifacts.polarity_chart.as_path(), artifacts.subjectivity_chart.as_path()],
    )?;

    info!(pdf = %artifacts.pdf.display(), "Report complete");
    Ok(artifacts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_file_name() {
        assert_eq!(pdf_file_name("war"), "summary_war.pdf");
        assert_eq!(pdf_file_name(" flight delay "), "summary_flight_delay.pdf");
        assert_eq!(pdf_file_name("../etc"), "summary____etc.pdf");
    }
}
