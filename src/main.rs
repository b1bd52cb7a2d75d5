//! CLI for keyword sentiment reports
//!
//! Usage:
//! ```bash
//! cargo run -- --help
//! cargo run -- report --dataset Tweets.csv --keyword delay --count 200
//! cargo run -- score --text "Great crew, terrible food"
//! ```

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use keyword_sentiment::{
    config::{load_config, save_config, AppConfig},
    prompt::{validate_sample_size, Prompter},
    report::generate_report,
    AggregateResult, Dataset, Error, KeywordFilter, PatternAnalyzer, PolarityLabel,
    SentimentScorer, SubjectivityLabel, SubjectivityLexicon,
};
use std::io;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "sentiment_report")]
#[command(author = "ML for Trading")]
#[command(version)]
#[command(about = "Keyword sentiment analysis of social-media posts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (.toml or .json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level, overrides the configuration
    #[arg(short, long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze posts containing a keyword and write the PDF report
    Report {
        /// CSV dataset with a text column
        #[arg(short, long)]
        dataset: Option<PathBuf>,

        /// Keyword to search for; prompted when missing
        #[arg(short, long)]
        keyword: Option<String>,

        /// Number of matching posts to analyze; prompted when missing
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Directory for charts and the PDF
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Score a single text
    Score {
        /// Text to score
        #[arg(short, long)]
        text: String,
    },

    /// Write the default configuration to a file
    InitConfig {
        /// Destination (.toml or .json)
        #[arg(short, long, default_value = "sentiment_report.toml")]
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => AppConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    // Logs go to stderr so prompts stay readable
    let log_level = match config.logging.level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Report {
            dataset,
            keyword,
            count,
            output_dir,
        } => {
            if let Some(path) = dataset {
                config.dataset.path = path;
            }
            if let Some(dir) = output_dir {
                config.report.output_dir = dir;
            }
            run_report(&config, keyword, count)?;
        }
        Commands::Score { text } => {
            run_score(&config, &text)?;
        }
        Commands::InitConfig { path } => {
            save_config(&AppConfig::default(), &path)
                .with_context(|| format!("Failed to write config: {}", path.display()))?;
            println!("Configuration written to {}", path.display());
        }
    }

    Ok(())
}

fn build_analyzer(config: &AppConfig) -> Result<PatternAnalyzer> {
    let mut lexicon = SubjectivityLexicon::new();
    if let Some(path) = &config.analysis.lexicon_path {
        lexicon
            .merge_csv(path)
            .with_context(|| format!("Failed to load lexicon: {}", path.display()))?;
    }
    Ok(PatternAnalyzer::new().with_lexicon(lexicon))
}

fn run_report(config: &AppConfig, keyword: Option<String>, count: Option<usize>) -> Result<()> {
    let dataset = Dataset::load(&config.dataset.path, &config.dataset.text_column)
        .context("Failed to load dataset")?;
    let max = config.analysis.max_sample_size;

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    let filter = match keyword {
        Some(keyword) => {
            let filter = KeywordFilter::new(&keyword)?;
            if filter.count_matches(&dataset) == 0 {
                bail!(Error::NoMatches(filter.keyword().to_string()));
            }
            filter
        }
        None => prompter.ask_keyword(&dataset)?,
    };

    let count = match count {
        Some(count) => validate_sample_size(count, max)?,
        None => prompter.ask_sample_size(max)?,
    };

    let analyzer = build_analyzer(config)?;
    let sample = filter.sample(&dataset, count);

    info!("Scoring {} posts...", sample.len());
    let items = analyzer.score_batch(sample.texts());
    let result = AggregateResult::from_items(&items);

    println!("\nAnalyzed {} tweets containing '{}'", sample.len(), filter.keyword());
    println!("{}", result);

    let artifacts = generate_report(&config.report, filter.keyword(), &items, &result)
        .context("Failed to generate report")?;

    println!("PDF Summary saved as {}", artifacts.pdf.display());
    Ok(())
}

fn run_score(config: &AppConfig, text: &str) -> Result<()> {
    let analyzer = build_analyzer(config)?;
    let analysis = analyzer.analyze(text);
    let item = analysis.item;

    println!("Text: {}", text);
    println!(
        "Polarity: {:.3} ({})",
        item.polarity(),
        PolarityLabel::from_score(item.polarity())
    );
    println!(
        "Subjectivity: {:.3} ({})",
        item.subjectivity(),
        SubjectivityLabel::from_score(item.subjectivity())
    );

    if !analysis.assessments.is_empty() {
        println!("\nAssessments:");
        for a in &analysis.assessments {
            println!(
                "  • {} (polarity {:+.2}, subjectivity {:.2})",
                a.words.join(" "),
                a.polarity,
                a.subjectivity
            );
        }
    }

    Ok(())
}
