use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use appsentiment::models::SentimentSummary;
use appsentiment::sources::SourceAdapter;
use appsentiment::{export, Collector, Config, RedditAdapter, TwitterAdapter};

#[derive(Parser, Debug)]
#[command(name = "appsentiment")]
#[command(version = "0.1.0")]
#[command(about = "Collect social media comments about e-commerce apps and classify sentiment")]
struct Args {
    /// App names to collect comments for
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "Amazon,Target,eBay,Jumia,AliExpress"
    )]
    apps: Vec<String>,

    /// Platforms to query
    #[arg(long, value_delimiter = ',', default_value = "Twitter,Reddit")]
    platforms: Vec<String>,

    /// Maximum comments per (app, platform) pair
    #[arg(long, default_value = "100")]
    limit: u32,

    /// Destination for the per-comment table
    #[arg(long, default_value = "sentiment_analysis_raw.csv")]
    raw_output: PathBuf,

    /// Destination for the per-pair sentiment counts
    #[arg(long, default_value = "sentiment_summary.csv")]
    summary_output: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("appsentiment=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = Config::from_env()?;

    let adapters: Vec<Box<dyn SourceAdapter>> = vec![
        Box::new(TwitterAdapter::new(&config.twitter)?),
        Box::new(RedditAdapter::new(&config.reddit)?),
    ];

    let collector = Collector::new(adapters);

    tracing::info!(
        "Starting data collection and sentiment analysis for {} apps on {} platforms",
        args.apps.len(),
        args.platforms.len()
    );
    let records = collector
        .collect(&args.apps, &args.platforms, args.limit)
        .await;
    tracing::info!("Collected {} comments total", records.len());

    export::write_records(&args.raw_output, &records)?;
    tracing::info!("Raw data saved to {}", args.raw_output.display());

    let summary = SentimentSummary::from_records(&records);
    export::write_summary(&args.summary_output, &summary)?;
    tracing::info!("Sentiment summary saved to {}", args.summary_output.display());

    tracing::info!("Process completed successfully");
    Ok(())
}
