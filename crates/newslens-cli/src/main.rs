use std::sync::Arc;

use clap::{Parser, Subcommand};

use newslens_core::AppConfig;
use newslens_newsapi::NewsApiClient;
use newslens_sentiment::{
    InferenceModel, LexiconModel, NewsEnrichmentService, NewsQuery, SentimentClassifier,
    SentimentModel,
};

#[derive(Debug, Parser)]
#[command(name = "newslens-cli")]
#[command(about = "newslens command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search news, enrich with sentiment, and print the result as JSON.
    News {
        #[arg(long)]
        query: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        source: Option<String>,
        /// Keep only articles with this sentiment bucket.
        #[arg(long)]
        sentiment: Option<String>,
        /// Earliest publish date, `YYYY-MM-DD`.
        #[arg(long)]
        date: Option<String>,
    },
    /// Classify one piece of text and print its sentiment bucket.
    Classify { text: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = newslens_core::load_app_config_from_env()?;

    match cli.command {
        Commands::News {
            query,
            category,
            source,
            sentiment,
            date,
        } => {
            let news = match &config.news_api_key {
                Some(key) => Some(Arc::new(NewsApiClient::with_base_url(
                    key,
                    config.request_timeout_secs,
                    &config.user_agent,
                    &config.newsapi_base_url,
                )?)),
                None => None,
            };
            let service = NewsEnrichmentService::new(news, build_classifier(&config));
            let feed = service
                .fetch_and_enrich(&NewsQuery {
                    query,
                    category,
                    source,
                    sentiment,
                    date,
                })
                .await?;
            println!("{}", serde_json::to_string_pretty(&feed)?);
        }
        Commands::Classify { text } => {
            let result = build_classifier(&config).classify(&text).await;
            println!("{} ({:.3})", result.sentiment, result.score);
        }
    }

    Ok(())
}

fn build_classifier(config: &AppConfig) -> SentimentClassifier {
    let model: Arc<dyn SentimentModel> = match &config.sentiment_inference_url {
        Some(url) => Arc::new(InferenceModel::new(url)),
        None => Arc::new(LexiconModel::new()),
    };
    SentimentClassifier::new(model)
}
