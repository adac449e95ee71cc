use axum::{
    extract::{Query, State},
    Extension, Json,
};

use newslens_newsapi::NewsApiError;
use newslens_sentiment::{EnrichError, EnrichedFeed, NewsQuery};

use crate::middleware::RequestId;

use super::{ApiError, AppState};

/// `GET /api/py/news` — search, enrich with sentiment, optionally filter.
pub(super) async fn get_news(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<NewsQuery>,
) -> Result<Json<EnrichedFeed>, ApiError> {
    let feed = state
        .enrich
        .fetch_and_enrich(&query)
        .await
        .map_err(|e| map_enrich_error(&req_id.0, &e))?;
    Ok(Json(feed))
}

/// Map pipeline failures onto the fixed response bodies.
///
/// The two named cases keep their exact literal messages; anything else
/// carries the error's own message.
fn map_enrich_error(request_id: &str, error: &EnrichError) -> ApiError {
    match error {
        EnrichError::MissingApiKey => {
            tracing::error!(request_id, "news request rejected: no API key configured");
            ApiError::new("API key not found")
        }
        EnrichError::News(NewsApiError::Status { status, message }) => {
            tracing::error!(
                request_id,
                status = %status,
                message = message.as_deref().unwrap_or("-"),
                "news source reported failure"
            );
            ApiError::new("Failed to fetch news")
        }
        EnrichError::News(e) => {
            tracing::error!(request_id, error = %e, "news request failed");
            ApiError::new(e.to_string())
        }
    }
}
