//! Sentiment taxonomy and enriched article types.

use serde::{Deserialize, Serialize};

use newslens_newsapi::SearchQuery;

/// Closed set of sentiment buckets attached to enriched articles.
///
/// `Neutral` is a fallback used only when classification fails; it never
/// results from a successful prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    VeryPositive,
    Positive,
    Neutral,
    Negative,
    VeryNegative,
}

impl Sentiment {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Sentiment::VeryPositive => "very_positive",
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
            Sentiment::VeryNegative => "very_negative",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single classification outcome: bucket plus confidence in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentResult {
    pub sentiment: Sentiment,
    pub score: f64,
}

impl SentimentResult {
    /// The fail-open sentinel. The 0.5 score marks an unmeasured confidence,
    /// not a real prediction.
    #[must_use]
    pub const fn neutral() -> Self {
        Self {
            sentiment: Sentiment::Neutral,
            score: 0.5,
        }
    }
}

/// An article with its sentiment bucket attached.
///
/// Field values missing upstream become empty strings, never null.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedArticle {
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub source: String,
    #[serde(rename = "publishedAt")]
    pub published_at: String,
    pub sentiment: Sentiment,
    #[serde(rename = "sentimentScore")]
    pub sentiment_score: f64,
}

/// The enrichment pipeline's result set.
#[derive(Debug, Serialize)]
pub struct EnrichedFeed {
    pub articles: Vec<EnrichedArticle>,
    /// Count after sentiment filtering; always equals `articles.len()`.
    #[serde(rename = "totalResults")]
    pub total_results: usize,
}

/// Caller-supplied filters for one enrichment request.
///
/// `sentiment` stays a raw string rather than a parsed [`Sentiment`]: the
/// filter is an exact string match, so an unknown label yields an empty
/// result set instead of a rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsQuery {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub sentiment: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

impl NewsQuery {
    /// The outbound search filters; the sentiment filter is applied
    /// client-side after enrichment and is not part of the upstream call.
    pub(crate) fn search_filters(&self) -> SearchQuery {
        SearchQuery {
            query: self.query.clone(),
            category: self.category.clone(),
            source: self.source.clone(),
            from_date: self.date.clone(),
        }
    }
}
