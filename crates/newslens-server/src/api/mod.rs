mod digest;
mod news;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use newslens_core::AppConfig;
use newslens_newsapi::{NewsApiClient, NewsApiError};
use newslens_sentiment::{
    InferenceModel, LexiconModel, NewsEnrichmentService, SentimentClassifier, SentimentModel,
};

use crate::middleware::request_id;

#[derive(Clone)]
pub struct AppState {
    pub enrich: Arc<NewsEnrichmentService>,
    /// Direct client handle for routes that bypass enrichment (digest,
    /// health). `None` when no API key is configured.
    pub news: Option<Arc<NewsApiClient>>,
}

/// Flat error body: `{"error": "<message>"}`, always served with a 500.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
struct HealthData {
    status: &'static str,
    #[serde(rename = "newsApiKey")]
    news_api_key: &'static str,
    timestamp: DateTime<Utc>,
}

/// Wire the shared service instances from config.
///
/// The classifier is constructed once here and reused for every request;
/// the inference binding is chosen when an inference URL is configured,
/// otherwise the in-process lexicon model is used.
///
/// # Errors
///
/// Returns [`NewsApiError`] if the HTTP client cannot be constructed.
pub fn build_state(config: &AppConfig) -> Result<AppState, NewsApiError> {
    let news = match &config.news_api_key {
        Some(key) => Some(Arc::new(NewsApiClient::with_base_url(
            key,
            config.request_timeout_secs,
            &config.user_agent,
            &config.newsapi_base_url,
        )?)),
        None => {
            tracing::warn!("NEWS_API_KEY not set; news and digest requests will fail");
            None
        }
    };

    let model: Arc<dyn SentimentModel> = match &config.sentiment_inference_url {
        Some(url) => Arc::new(InferenceModel::new(url)),
        None => Arc::new(LexiconModel::new()),
    };
    let classifier = SentimentClassifier::new(model);

    Ok(AppState {
        enrich: Arc::new(NewsEnrichmentService::new(news.clone(), classifier)),
        news,
    })
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/py/news", get(news::get_news))
        .route("/api/digest", get(digest::get_digest))
        .layer(
            ServiceBuilder::new()
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let news_api_key = if state.news.is_some() {
        "present"
    } else {
        "missing"
    };
    (
        StatusCode::OK,
        Json(HealthData {
            status: "ok",
            news_api_key,
            timestamp: Utc::now(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use newslens_sentiment::{ModelPrediction, Polarity, SentimentError};

    use super::*;

    /// Replays a fixed sequence of predictions, one per `predict` call.
    struct ScriptedModel {
        responses: Mutex<VecDeque<Result<ModelPrediction, SentimentError>>>,
    }

    impl ScriptedModel {
        fn new(responses: Vec<Result<ModelPrediction, SentimentError>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
            }
        }
    }

    #[async_trait]
    impl SentimentModel for ScriptedModel {
        async fn predict(&self, _text: &str) -> Result<ModelPrediction, SentimentError> {
            self.responses
                .lock()
                .expect("scripted model lock")
                .pop_front()
                .expect("scripted model ran out of responses")
        }
    }

    fn test_state(
        base_url: Option<&str>,
        responses: Vec<Result<ModelPrediction, SentimentError>>,
    ) -> AppState {
        let news = base_url.map(|url| {
            Arc::new(
                NewsApiClient::with_base_url("test-key", 30, "newslens-test/0.1", url)
                    .expect("client construction should not fail"),
            )
        });
        let classifier = SentimentClassifier::new(Arc::new(ScriptedModel::new(responses)));
        AppState {
            enrich: Arc::new(NewsEnrichmentService::new(news.clone(), classifier)),
            news,
        }
    }

    async fn get_json(
        app: Router,
        uri: &str,
    ) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        let json: serde_json::Value = serde_json::from_slice(&body).expect("json parse");
        (status, json)
    }

    fn positive(score: f64) -> Result<ModelPrediction, SentimentError> {
        Ok(ModelPrediction {
            polarity: Polarity::Positive,
            score,
        })
    }

    fn negative(score: f64) -> Result<ModelPrediction, SentimentError> {
        Ok(ModelPrediction {
            polarity: Polarity::Negative,
            score,
        })
    }

    #[tokio::test]
    async fn missing_api_key_returns_literal_error_body() {
        let app = build_app(test_state(None, Vec::new()));
        let (status, json) = get_json(app, "/api/py/news").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json, serde_json::json!({ "error": "API key not found" }));
    }

    #[tokio::test]
    async fn upstream_failure_returns_failed_to_fetch_news() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/everything"))
            .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
                "status": "error",
                "code": "rateLimited",
                "message": "Too many requests"
            })))
            .mount(&server)
            .await;

        let app = build_app(test_state(Some(&server.uri()), Vec::new()));
        let (status, json) = get_json(app, "/api/py/news").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json, serde_json::json!({ "error": "Failed to fetch news" }));
    }

    #[tokio::test]
    async fn news_endpoint_enriches_and_filters_end_to_end() {
        let server = MockServer::start().await;
        let body = serde_json::json!({
            "status": "ok",
            "totalResults": 2,
            "articles": [
                {
                    "source": { "id": null, "name": "Reuters" },
                    "title": "Economy surges",
                    "description": "Strong growth reported",
                    "url": "https://example.com/surge",
                    "urlToImage": "https://example.com/surge.jpg",
                    "publishedAt": "2025-06-02T09:00:00Z"
                },
                {
                    "source": { "id": null, "name": "BBC News" },
                    "title": "Economy wobbles",
                    "description": "Analysts are worried",
                    "url": "https://example.com/wobble",
                    "urlToImage": null,
                    "publishedAt": "2025-06-01T17:30:00Z"
                }
            ]
        });
        Mock::given(method("GET"))
            .and(path("/everything"))
            .and(query_param("q", "economy"))
            .and(query_param("apiKey", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let app = build_app(test_state(
            Some(&server.uri()),
            vec![positive(0.9), negative(0.6)],
        ));
        let (status, json) =
            get_json(app, "/api/py/news?query=economy&sentiment=very_positive").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["totalResults"], 1);
        let articles = json["articles"].as_array().expect("articles array");
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0]["title"], "Economy surges");
        assert_eq!(articles[0]["sentiment"], "very_positive");
        assert_eq!(articles[0]["sentimentScore"], 0.9);
        assert_eq!(articles[0]["imageUrl"], "https://example.com/surge.jpg");
        assert_eq!(articles[0]["source"], "Reuters");
    }

    #[tokio::test]
    async fn news_endpoint_reports_post_filter_total() {
        let server = MockServer::start().await;
        let body = serde_json::json!({
            "status": "ok",
            "totalResults": 2,
            "articles": [
                {
                    "source": { "id": null, "name": "A" },
                    "title": "One",
                    "description": "first",
                    "url": "https://example.com/1",
                    "urlToImage": null,
                    "publishedAt": "2025-06-02T09:00:00Z"
                },
                {
                    "source": { "id": null, "name": "B" },
                    "title": "Two",
                    "description": "second",
                    "url": "https://example.com/2",
                    "urlToImage": null,
                    "publishedAt": "2025-06-02T10:00:00Z"
                }
            ]
        });
        Mock::given(method("GET"))
            .and(path("/everything"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let app = build_app(test_state(
            Some(&server.uri()),
            vec![positive(0.6), positive(0.6)],
        ));
        let (status, json) = get_json(app, "/api/py/news?sentiment=negative").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["totalResults"], 0);
        assert_eq!(json["articles"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn health_reports_key_presence() {
        let app = build_app(test_state(Some("http://localhost:1"), Vec::new()));
        let (status, json) = get_json(app, "/api/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
        assert_eq!(json["newsApiKey"], "present");
        assert!(json["timestamp"].is_string());
    }

    #[tokio::test]
    async fn health_reports_missing_key() {
        let app = build_app(test_state(None, Vec::new()));
        let (status, json) = get_json(app, "/api/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["newsApiKey"], "missing");
    }

    #[tokio::test]
    async fn digest_is_fail_open_per_category() {
        let server = MockServer::start().await;

        let story = serde_json::json!({
            "status": "ok",
            "totalResults": 1,
            "articles": [{
                "source": { "id": null, "name": "TechDaily" },
                "title": "Chip launch",
                "description": "A new chip launched today",
                "url": "https://example.com/chip",
                "urlToImage": null,
                "publishedAt": "2025-06-02T08:00:00Z"
            }]
        });

        for category in ["general", "business", "sports"] {
            Mock::given(method("GET"))
                .and(path("/top-headlines"))
                .and(query_param("category", category))
                .respond_with(ResponseTemplate::new(200).set_body_json(&story))
                .mount(&server)
                .await;
        }
        // Technology is down; its section should come back empty.
        Mock::given(method("GET"))
            .and(path("/top-headlines"))
            .and(query_param("category", "technology"))
            .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
            .mount(&server)
            .await;

        let app = build_app(test_state(Some(&server.uri()), Vec::new()));
        let (status, json) = get_json(app, "/api/digest").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["general"][0]["title"], "Chip launch");
        assert_eq!(
            json["general"][0]["summary"],
            "A new chip launched today..."
        );
        assert_eq!(json["technology"], serde_json::json!([]));
        assert_eq!(json["sports"][0]["title"], "Chip launch");
        assert!(json["timestamp"].is_string());
    }

    #[tokio::test]
    async fn digest_without_key_returns_literal_error_body() {
        let app = build_app(test_state(None, Vec::new()));
        let (status, json) = get_json(app, "/api/digest").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json, serde_json::json!({ "error": "API key not found" }));
    }

    #[tokio::test]
    async fn responses_echo_request_id_header() {
        let app = build_app(test_state(None, Vec::new()));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .header("x-request-id", "req-abc-123")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(
            response
                .headers()
                .get("x-request-id")
                .and_then(|v| v.to_str().ok()),
            Some("req-abc-123")
        );
    }
}
