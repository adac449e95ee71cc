//! Enrichment pipeline orchestration.

use std::sync::Arc;

use newslens_newsapi::{NewsApiClient, RawArticle};

use crate::classifier::SentimentClassifier;
use crate::error::EnrichError;
use crate::types::{EnrichedArticle, EnrichedFeed, NewsQuery, SentimentResult};

/// Fetches articles from the news source and attaches a sentiment bucket to
/// each one.
///
/// Built once at startup and shared across requests. The news client is
/// optional so a missing API key can be reported per request instead of
/// failing startup.
pub struct NewsEnrichmentService {
    news: Option<Arc<NewsApiClient>>,
    classifier: SentimentClassifier,
}

impl NewsEnrichmentService {
    #[must_use]
    pub fn new(news: Option<Arc<NewsApiClient>>, classifier: SentimentClassifier) -> Self {
        Self { news, classifier }
    }

    /// Run one fetch → classify → filter pass.
    ///
    /// 1. Fetch articles matching the query, newest first.
    /// 2. Classify `title + " " + description` for each article, one at a
    ///    time, in the order the source returned them. Missing fields are
    ///    treated as empty strings. A failed classification yields the
    ///    neutral sentinel for that article only.
    /// 3. When the query names a sentiment, retain exact matches only.
    ///
    /// `total_results` reflects the post-filter count.
    ///
    /// # Errors
    ///
    /// - [`EnrichError::MissingApiKey`] when no API key was configured; the
    ///   news source is never contacted.
    /// - [`EnrichError::News`] when the fetch fails or the source reports a
    ///   non-`"ok"` status. There are no partial results and no retries.
    pub async fn fetch_and_enrich(&self, query: &NewsQuery) -> Result<EnrichedFeed, EnrichError> {
        let Some(news) = self.news.as_deref() else {
            return Err(EnrichError::MissingApiKey);
        };

        let raw = news.everything(&query.search_filters()).await?;
        tracing::debug!(count = raw.len(), "fetched articles for enrichment");

        let mut articles = Vec::with_capacity(raw.len());
        for article in raw {
            let text = format!(
                "{} {}",
                article.title.as_deref().unwrap_or(""),
                article.description.as_deref().unwrap_or("")
            );
            let result = self.classifier.classify(&text).await;
            articles.push(enrich_article(article, result));
        }

        if let Some(want) = query.sentiment.as_deref().filter(|s| !s.is_empty()) {
            articles.retain(|a| a.sentiment.as_str() == want);
        }

        let total_results = articles.len();
        Ok(EnrichedFeed {
            articles,
            total_results,
        })
    }
}

/// Merge the sentiment result into a flattened article record.
///
/// Renames `urlToImage` → `imageUrl` and hoists `source.name` → `source`;
/// every missing field becomes an empty string.
fn enrich_article(article: RawArticle, result: SentimentResult) -> EnrichedArticle {
    EnrichedArticle {
        title: article.title.unwrap_or_default(),
        description: article.description.unwrap_or_default(),
        url: article.url.unwrap_or_default(),
        image_url: article.url_to_image.unwrap_or_default(),
        source: article.source.and_then(|s| s.name).unwrap_or_default(),
        published_at: article.published_at.unwrap_or_default(),
        sentiment: result.sentiment,
        sentiment_score: result.score,
    }
}
