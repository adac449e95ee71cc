//! HTTP client for the NewsAPI.org REST API.

use std::time::Duration;

use reqwest::Client;

use crate::error::NewsApiError;
use crate::types::{NewsResponse, RawArticle, SearchQuery};

const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2";

/// Client for the NewsAPI.org REST API.
///
/// Manages the HTTP client, API key, and base URL. Use [`NewsApiClient::new`]
/// for production or [`NewsApiClient::with_base_url`] to point at a mock
/// server in tests.
pub struct NewsApiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl NewsApiClient {
    /// Creates a new client pointed at the production NewsAPI endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`NewsApiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, NewsApiError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`NewsApiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, NewsApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Searches all indexed articles, newest first, restricted to English.
    ///
    /// Articles are returned in the exact order the API sent them.
    ///
    /// # Errors
    ///
    /// - [`NewsApiError::Status`] if the envelope status is not `"ok"`.
    /// - [`NewsApiError::Http`] on network failure.
    /// - [`NewsApiError::Deserialize`] if the body is not the expected JSON.
    pub async fn everything(&self, search: &SearchQuery) -> Result<Vec<RawArticle>, NewsApiError> {
        let url = self.everything_url(search);
        let envelope = self.get_envelope(&url, "everything").await?;
        Ok(envelope.articles)
    }

    /// Fetches current top headlines for a US category.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`NewsApiClient::everything`].
    pub async fn top_headlines(
        &self,
        category: &str,
        page_size: usize,
    ) -> Result<Vec<RawArticle>, NewsApiError> {
        let url = format!(
            "{}/top-headlines?apiKey={}&country=us&language=en&category={category}&pageSize={page_size}",
            self.base_url, self.api_key
        );
        let envelope = self.get_envelope(&url, "top-headlines").await?;
        Ok(envelope.articles)
    }

    /// Builds the `everything` request URL.
    ///
    /// Filter values are interpolated into the query string verbatim — no
    /// percent-encoding is applied, so reserved characters in caller-supplied
    /// values (`&`, `=`, …) change the meaning of the request. This is a
    /// known fragility of the inherited request contract; callers own any
    /// escaping.
    fn everything_url(&self, search: &SearchQuery) -> String {
        let mut url = format!(
            "{}/everything?apiKey={}&language=en&sortBy=publishedAt",
            self.base_url, self.api_key
        );
        if let Some(q) = non_empty(&search.query) {
            url.push_str(&format!("&q={q}"));
        }
        if let Some(category) = non_empty(&search.category) {
            url.push_str(&format!("&category={category}"));
        }
        if let Some(source) = non_empty(&search.source) {
            url.push_str(&format!("&sources={source}"));
        }
        if let Some(from) = non_empty(&search.from_date) {
            url.push_str(&format!("&from={from}"));
        }
        url
    }

    /// Sends a GET request and parses the response body into the envelope.
    ///
    /// Success is decided by the envelope's `"status"` field, not the HTTP
    /// status code — the API reports errors in-band as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`NewsApiError::Http`] on network failure,
    /// [`NewsApiError::Deserialize`] if the body is not valid JSON, and
    /// [`NewsApiError::Status`] if the envelope status is not `"ok"`.
    async fn get_envelope(&self, url: &str, context: &str) -> Result<NewsResponse, NewsApiError> {
        let response = self.client.get(url).send().await?;
        let body = response.text().await?;
        let envelope: NewsResponse =
            serde_json::from_str(&body).map_err(|e| NewsApiError::Deserialize {
                context: context.to_string(),
                source: e,
            })?;

        if envelope.status != "ok" {
            tracing::warn!(
                status = %envelope.status,
                code = envelope.code.as_deref().unwrap_or("-"),
                "news source reported failure"
            );
            return Err(NewsApiError::Status {
                status: envelope.status,
                message: envelope.message,
            });
        }

        Ok(envelope)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
