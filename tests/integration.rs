//! Integration tests for keyword sentiment reports

use keyword_sentiment::{
    // Data
    Dataset, KeywordFilter,
    // Sentiment
    AggregateResult, PatternAnalyzer, PolarityLabel, ScoredItem, SentimentScorer,
    SubjectivityLabel,
    // Report
    ReportArtifacts, ReportWriter, SummaryPage,
    // Config
    AppConfig,
};
use keyword_sentiment::config::ReportSettings;
use keyword_sentiment::report::generate_report;
use keyword_sentiment::sentiment::{
    classify_polarity, classify_subjectivity, compute_means, histogram_subjectivity,
};
use tempfile::tempdir;

mod aggregation {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_means_are_arithmetic_and_bounded() {
        let samples: Vec<Vec<ScoredItem>> = vec![
            vec![ScoredItem::new(-1.0, 0.0)],
            vec![ScoredItem::new(1.0, 1.0), ScoredItem::new(1.0, 1.0)],
            vec![
                ScoredItem::new(0.3, 0.2),
                ScoredItem::new(-0.9, 0.7),
                ScoredItem::new(0.45, 0.95),
                ScoredItem::new(0.0, 0.0),
            ],
        ];

        for items in samples {
            let (polarity, subjectivity) = compute_means(&items);
            let n = items.len() as f64;

            assert_relative_eq!(polarity, items.iter().map(|i| i.polarity()).sum::<f64>() / n);
            assert_relative_eq!(
                subjectivity,
                items.iter().map(|i| i.subjectivity()).sum::<f64>() / n
            );
            assert!((-1.0..=1.0).contains(&polarity));
            assert!((0.0..=1.0).contains(&subjectivity));
        }
    }

    #[test]
    fn test_empty_input_defaults_to_zero() {
        assert_eq!(compute_means(&[]), (0.0, 0.0));
    }

    #[test]
    fn test_reference_classifications() {
        assert_eq!(classify_polarity(-0.6).as_str(), "very negative");
        assert_eq!(classify_polarity(0.0).as_str(), "neutral");
        assert_eq!(classify_polarity(0.3).as_str(), "slightly positive");
        assert_eq!(classify_polarity(0.5).as_str(), "very positive");

        assert_eq!(classify_subjectivity(0.10).as_str(), "mostly factual");
        assert_eq!(classify_subjectivity(0.50).as_str(), "balanced (facts + opinions)");
        assert_eq!(classify_subjectivity(1.00).as_str(), "mostly opinionated");
    }

    #[test]
    fn test_reference_sample() {
        let items = vec![
            ScoredItem::new(0.2, 0.1),
            ScoredItem::new(0.8, 0.9),
            ScoredItem::new(-0.4, 0.5),
        ];

        let result = AggregateResult::from_items(&items);
        assert_relative_eq!(result.mean_polarity, 0.2, epsilon = 1e-9);
        assert_relative_eq!(result.mean_subjectivity, 0.5, epsilon = 1e-9);
        assert_eq!(result.histogram.counts(), [1, 0, 1, 0, 1]);
        assert_eq!(result.polarity_label, PolarityLabel::Neutral);
        assert_eq!(result.subjectivity_label, SubjectivityLabel::Balanced);
    }

    #[test]
    fn test_histogram_total_matches_len() {
        let items: Vec<ScoredItem> = (0..=100)
            .map(|i| ScoredItem::new(0.0, i as f64 / 100.0))
            .collect();
        assert_eq!(histogram_subjectivity(&items).total(), items.len());
    }
}

mod pipeline {
    use super::*;

    fn write_dataset(dir: &std::path::Path) -> std::path::PathBuf {
        let path = dir.join("Tweets.csv");
        std::fs::write(
            &path,
            "tweet_id,airline_sentiment,airline,text\n\
             1,positive,Virgin,@VirginAmerica great crew and a really nice flight :)\n\
             2,negative,United,@united flight delayed again. Worst service ever!\n\
             3,neutral,Delta,@Delta flight 2301 moved to gate B12\n\
             4,negative,US Airways,\n\
             5,negative,American,@AmericanAir not a good flight. Rude staff\n",
        )
        .unwrap();
        path
    }

    #[test]
    fn test_keyword_sample_and_aggregate() {
        let dir = tempdir().unwrap();
        let dataset = Dataset::load(write_dataset(dir.path()), "text").unwrap();
        assert_eq!(dataset.len(), 5);

        let filter = KeywordFilter::new("FLIGHT").unwrap();
        assert_eq!(filter.count_matches(&dataset), 4);

        let sample = filter.sample(&dataset, 3);
        assert_eq!(sample.len(), 3);

        let analyzer = PatternAnalyzer::new();
        let items = analyzer.score_batch(sample.texts());
        assert!(items[0].polarity() > 0.0);
        assert!(items[1].polarity() < 0.0);
        assert_eq!(items[2], ScoredItem::new(0.0, 0.0));

        let result = AggregateResult::from_items(&items);
        assert_eq!(result.item_count, 3);
        assert_eq!(result.histogram.total(), 3);
        assert_eq!(result.histogram.get(SubjectivityLabel::MostlyFactual), 1);
    }

    #[test]
    fn test_summary_pdf_written() {
        let dir = tempdir().unwrap();
        let dataset = Dataset::load(write_dataset(dir.path()), "text").unwrap();
        let sample = KeywordFilter::new("flight").unwrap().sample(&dataset, 500);

        let items = PatternAnalyzer::new().score_batch(sample.texts());
        let result = AggregateResult::from_items(&items);
        let wrap_width = AppConfig::default().report.wrap_width;
        let summary = SummaryPage::build(&sample.keyword, &result, wrap_width);

        assert!(summary.to_text().contains("Number of Tweets Analyzed: 4"));

        let pdf = dir.path().join("summary_flight.pdf");
        ReportWriter::new().write(&pdf, &summary, &[]).unwrap();
        assert!(std::fs::metadata(&pdf).unwrap().len() > 0);
    }

    fn report_settings(dir: &std::path::Path) -> ReportSettings {
        ReportSettings {
            output_dir: dir.join("out"),
            ..ReportSettings::default()
        }
    }

    fn assert_written(artifacts: &ReportArtifacts) {
        for path in [
            &artifacts.polarity_chart,
            &artifacts.subjectivity_chart,
            &artifacts.pdf,
        ] {
            assert!(std::fs::metadata(path).unwrap().len() > 0, "{}", path.display());
        }
    }

    #[test]
    fn test_generate_report() {
        let dir = tempdir().unwrap();
        let dataset = Dataset::load(write_dataset(dir.path()), "text").unwrap();
        let sample = KeywordFilter::new("flight").unwrap().sample(&dataset, 500);

        let items = PatternAnalyzer::new().score_batch(sample.texts());
        let result = AggregateResult::from_items(&items);
        let settings = report_settings(dir.path());

        let artifacts = generate_report(&settings, &sample.keyword, &items, &result).unwrap();

        assert_eq!(artifacts.pdf, settings.output_dir.join("summary_flight.pdf"));
        assert_eq!(
            artifacts.polarity_chart,
            settings.output_dir.join("polarity_histogram.png")
        );
        assert_eq!(
            artifacts.subjectivity_chart,
            settings.output_dir.join("subjectivity_pie_chart.png")
        );
        assert_written(&artifacts);

        // Summary page plus one page per chart
        let pdf = std::fs::read(&artifacts.pdf).unwrap();
        assert!(pdf.starts_with(b"%PDF"));
        assert!(std::fs::metadata(&artifacts.pdf).unwrap().len() > 10_000);
    }

    #[test]
    fn test_generate_report_without_items() {
        let dir = tempdir().unwrap();
        let settings = report_settings(dir.path());
        let result = AggregateResult::from_items(&[]);

        let artifacts = generate_report(&settings, "snow day", &[], &result).unwrap();

        assert_eq!(artifacts.pdf, settings.output_dir.join("summary_snow_day.pdf"));
        assert_written(&artifacts);
    }
}
