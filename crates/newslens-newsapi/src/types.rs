//! NewsAPI response types.
//!
//! All types model the JSON structures returned by the NewsAPI.org REST API.
//! Every response carries a `"status"` envelope field: `"ok"` on success,
//! `"error"` (with `code` and `message`) on failure. Article fields are
//! nullable on the wire, so everything is `Option` here.

use serde::Deserialize;

/// Top-level envelope for NewsAPI responses.
#[derive(Debug, Deserialize)]
pub struct NewsResponse {
    pub status: String,
    #[serde(default, rename = "totalResults")]
    pub total_results: Option<i64>,
    #[serde(default)]
    pub articles: Vec<RawArticle>,
    /// Populated when `status` is `"error"`.
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A single article exactly as returned by the news source.
#[derive(Debug, Clone, Deserialize)]
pub struct RawArticle {
    #[serde(default)]
    pub source: Option<ArticleSource>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, rename = "urlToImage")]
    pub url_to_image: Option<String>,
    #[serde(default, rename = "publishedAt")]
    pub published_at: Option<String>,
}

/// Publisher info nested inside a [`RawArticle`].
#[derive(Debug, Clone, Deserialize)]
pub struct ArticleSource {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Filters for an `everything` search. Empty or absent values are omitted
/// from the outbound request.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub query: Option<String>,
    pub category: Option<String>,
    pub source: Option<String>,
    pub from_date: Option<String>,
}
