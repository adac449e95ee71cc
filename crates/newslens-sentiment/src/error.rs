use thiserror::Error;

/// Errors surfaced by sentiment model bindings.
#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("inference error: {0}")]
    Inference(String),

    #[error("unknown sentiment label: {0}")]
    UnknownLabel(String),
}

/// Errors that abort a whole enrichment request.
///
/// Per-article classification failures never appear here; those collapse to
/// the neutral sentinel inside [`crate::SentimentClassifier`].
#[derive(Debug, Error)]
pub enum EnrichError {
    /// No news API key was configured. The news source is never contacted.
    #[error("API key not found")]
    MissingApiKey,

    #[error(transparent)]
    News(#[from] newslens_newsapi::NewsApiError),
}
