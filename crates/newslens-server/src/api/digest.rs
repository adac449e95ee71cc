use axum::{
    extract::State,
    Extension, Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use newslens_newsapi::{NewsApiClient, RawArticle};

use crate::middleware::RequestId;

use super::{ApiError, AppState};

const STORIES_PER_CATEGORY: usize = 3;
const SUMMARY_MAX_CHARS: usize = 100;

#[derive(Debug, Serialize)]
pub(super) struct DigestStory {
    pub title: String,
    pub summary: String,
    pub url: String,
    #[serde(rename = "publishedAt")]
    pub published_at: String,
}

#[derive(Debug, Serialize)]
pub(super) struct DigestResponse {
    pub general: Vec<DigestStory>,
    pub business: Vec<DigestStory>,
    pub technology: Vec<DigestStory>,
    pub sports: Vec<DigestStory>,
    pub timestamp: DateTime<Utc>,
}

/// `GET /api/digest` — top stories per fixed category.
///
/// Categories are fetched one at a time; a category whose fetch fails
/// contributes an empty list instead of failing the digest.
pub(super) async fn get_digest(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<DigestResponse>, ApiError> {
    let Some(news) = state.news.as_deref() else {
        tracing::error!(request_id = %req_id.0, "digest request rejected: no API key configured");
        return Err(ApiError::new("API key not found"));
    };

    let general = category_stories(news, "general").await;
    let business = category_stories(news, "business").await;
    let technology = category_stories(news, "technology").await;
    let sports = category_stories(news, "sports").await;

    Ok(Json(DigestResponse {
        general,
        business,
        technology,
        sports,
        timestamp: Utc::now(),
    }))
}

async fn category_stories(news: &NewsApiClient, category: &str) -> Vec<DigestStory> {
    match news.top_headlines(category, STORIES_PER_CATEGORY).await {
        Ok(articles) => articles.into_iter().map(digest_story).collect(),
        Err(e) => {
            tracing::warn!(category, error = %e, "digest category fetch failed");
            Vec::new()
        }
    }
}

fn digest_story(article: RawArticle) -> DigestStory {
    DigestStory {
        title: article
            .title
            .unwrap_or_else(|| "No title available".to_string()),
        summary: summarize(article.description.as_deref()),
        url: article.url.unwrap_or_default(),
        published_at: article.published_at.unwrap_or_default(),
    }
}

fn summarize(description: Option<&str>) -> String {
    match description {
        Some(d) if !d.is_empty() => {
            let truncated: String = d.chars().take(SUMMARY_MAX_CHARS).collect();
            format!("{truncated}...")
        }
        _ => "No description available".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarize_truncates_long_descriptions() {
        let long = "x".repeat(150);
        let summary = summarize(Some(&long));
        assert_eq!(summary.chars().count(), SUMMARY_MAX_CHARS + 3);
        assert!(summary.ends_with("..."));
    }

    #[test]
    fn summarize_keeps_short_descriptions_with_ellipsis() {
        assert_eq!(summarize(Some("Short note")), "Short note...");
    }

    #[test]
    fn summarize_falls_back_when_missing() {
        assert_eq!(summarize(None), "No description available");
        assert_eq!(summarize(Some("")), "No description available");
    }
}
