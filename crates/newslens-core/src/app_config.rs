use std::net::SocketAddr;

#[derive(Clone)]
pub struct AppConfig {
    /// NewsAPI key. Optional at startup; requests that need it fail
    /// individually when it is absent.
    pub news_api_key: Option<String>,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub newsapi_base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// When set, sentiment predictions come from this inference endpoint
    /// instead of the built-in lexicon model.
    pub sentiment_inference_url: Option<String>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field(
                "news_api_key",
                &self.news_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("newsapi_base_url", &self.newsapi_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("sentiment_inference_url", &self.sentiment_inference_url)
            .finish()
    }
}
