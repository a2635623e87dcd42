use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

/// News-article sentiment pipeline: fetch, extract, segment, normalize,
/// score, report.
#[derive(Parser)]
#[command(name = "news-sentiment", about = "Sentiment analysis over a list of news article URLs")]
struct Cli {
    /// CSV file with a `url` column listing the articles to analyze
    #[arg(short, long, default_value = "data/news_articles.csv")]
    input: PathBuf,

    /// Work directory where extracted article text files are written
    #[arg(short, long, default_value = "news_article")]
    workdir: PathBuf,

    /// Directory for the result table and chart
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Title drawn above the pie chart
    #[arg(long, default_value = "Public Sentiment on Mining Industry")]
    chart_title: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let sources = ingest::load_sources(&cli.input)?;
    info!(count = sources.len(), input = %cli.input.display(), "Loaded article URLs");

    let fetcher = ingest::Fetcher::new()?;
    let extractor = ingest::Extractor::new();
    let articles = ingest::collect_articles(&fetcher, &extractor, &sources).await;
    let fetch_failures = sources.len() - articles.len();

    ingest::save_articles(&articles, &cli.workdir).await?;
    info!(
        saved = articles.len(),
        failed = fetch_failures,
        dir = %cli.workdir.display(),
        "Saved extracted articles"
    );

    let segmenter = ingest::Segmenter::new(ingest::SegmenterConfig::default());
    let segments = ingest::segment_articles(&cli.workdir, &segmenter).await?;
    info!(count = segments.len(), "Split articles into segments");

    let normalizer = normalize::Normalizer::new();
    let segments = normalizer.normalize_all(segments);

    let classifier = sentiment::SentimentClassifier::new();
    let scored = sentiment::score_segments(&classifier, &segments)?;

    std::fs::create_dir_all(&cli.output)?;
    let counts = report::SentimentCounts::from_segments(&scored);
    report::write_table(&scored, &cli.output.join("analysis_result.csv"))?;

    let chart_path = cli.output.join("sentiment_analysis_pie_chart.png");
    report::render_pie_chart(&counts, &cli.chart_title, &chart_path.to_string_lossy())?;

    info!(
        urls = sources.len(),
        fetch_failures,
        articles = articles.len(),
        segments = scored.len(),
        positive = counts.positive,
        negative = counts.negative,
        "Pipeline run complete"
    );

    Ok(())
}
