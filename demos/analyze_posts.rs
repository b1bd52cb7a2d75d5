//! # Post Scoring Example
//!
//! Scores a handful of airline posts and prints the aggregate labels.

use keyword_sentiment::{AggregateResult, PatternAnalyzer, SentimentScorer, TextPreprocessor};

fn main() {
    println!("=== Keyword Sentiment Demo ===\n");

    let analyzer = PatternAnalyzer::new();

    let posts = vec![
        "@united Great crew, really friendly and the seats were comfortable!",
        "@AmericanAir Flight delayed 3 hours. Worst experience ever :(",
        "@Delta Flight 1123 boards at gate C4",
        "@SouthwestAir not a good day, lost my bag and staff was rude",
        "@JetBlue thanks for the quick rebooking, very helpful",
    ];

    println!("Scoring {} posts...\n", posts.len());
    println!("{}", "=".repeat(70));

    for post in &posts {
        let analysis = analyzer.analyze(post);

        println!("\nText: \"{}\"", post);
        println!("{}", "-".repeat(60));
        println!("  Polarity:     {:.3}", analysis.item.polarity());
        println!("  Subjectivity: {:.3}", analysis.item.subjectivity());

        if !analysis.assessments.is_empty() {
            let words: Vec<String> = analysis
                .assessments
                .iter()
                .map(|a| a.words.join(" "))
                .collect();
            println!("  Assessments:  {}", words.join(", "));
        }
    }

    println!("\n{}", "=".repeat(70));

    let items = analyzer.score_batch(posts.clone());
    let result = AggregateResult::from_items(&items);

    println!("\n=== Aggregate ===\n");
    println!("{}", result);
    println!("\n{}", result.polarity_label.interpretation());
    println!("{}", result.subjectivity_label.interpretation());

    println!("\nSubjectivity buckets:");
    for (label, count) in result.histogram.iter() {
        println!("  {:<30} {}", label.title(), count);
    }

    let preprocessor = TextPreprocessor::new();
    let raw = "#Delayed again @united https://t.co/xyz :(";
    println!("\nPreprocessed: \"{}\"", preprocessor.preprocess(raw));
    println!("Tokens: {:?}", preprocessor.tokenize(raw));
}
