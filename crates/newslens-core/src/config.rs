use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if env var values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if env var values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let news_api_key = lookup("NEWS_API_KEY").ok().filter(|k| !k.is_empty());

    let bind_addr = parse_addr("NEWSLENS_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("NEWSLENS_LOG_LEVEL", "info");
    let newsapi_base_url = or_default("NEWSLENS_NEWSAPI_BASE_URL", "https://newsapi.org/v2");
    let request_timeout_secs = parse_u64("NEWSLENS_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("NEWSLENS_USER_AGENT", "newslens/0.1 (news-sentiment)");
    let sentiment_inference_url = lookup("NEWSLENS_SENTIMENT_INFERENCE_URL")
        .ok()
        .filter(|u| !u.is_empty());

    Ok(AppConfig {
        news_api_key,
        bind_addr,
        log_level,
        newsapi_base_url,
        request_timeout_secs,
        user_agent,
        sentiment_inference_url,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn build_app_config_succeeds_with_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should apply");
        assert!(cfg.news_api_key.is_none());
        assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.newsapi_base_url, "https://newsapi.org/v2");
        assert_eq!(cfg.request_timeout_secs, 30);
        assert_eq!(cfg.user_agent, "newslens/0.1 (news-sentiment)");
        assert!(cfg.sentiment_inference_url.is_none());
    }

    #[test]
    fn build_app_config_reads_news_api_key() {
        let mut map = HashMap::new();
        map.insert("NEWS_API_KEY", "secret-key");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.news_api_key.as_deref(), Some("secret-key"));
    }

    #[test]
    fn build_app_config_treats_empty_news_api_key_as_missing() {
        let mut map = HashMap::new();
        map.insert("NEWS_API_KEY", "");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert!(cfg.news_api_key.is_none());
    }

    #[test]
    fn build_app_config_fails_with_invalid_bind_addr() {
        let mut map = HashMap::new();
        map.insert("NEWSLENS_BIND_ADDR", "not-a-socket-addr");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "NEWSLENS_BIND_ADDR"),
            "expected InvalidEnvVar(NEWSLENS_BIND_ADDR), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_fails_with_invalid_timeout() {
        let mut map = HashMap::new();
        map.insert("NEWSLENS_REQUEST_TIMEOUT_SECS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "NEWSLENS_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar(NEWSLENS_REQUEST_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_applies_overrides() {
        let mut map = HashMap::new();
        map.insert("NEWSLENS_BIND_ADDR", "127.0.0.1:8080");
        map.insert("NEWSLENS_LOG_LEVEL", "debug");
        map.insert("NEWSLENS_NEWSAPI_BASE_URL", "http://localhost:9000/v2");
        map.insert("NEWSLENS_REQUEST_TIMEOUT_SECS", "60");
        map.insert("NEWSLENS_USER_AGENT", "custom-agent/2.0");
        map.insert("NEWSLENS_SENTIMENT_INFERENCE_URL", "http://localhost:8081");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.newsapi_base_url, "http://localhost:9000/v2");
        assert_eq!(cfg.request_timeout_secs, 60);
        assert_eq!(cfg.user_agent, "custom-agent/2.0");
        assert_eq!(
            cfg.sentiment_inference_url.as_deref(),
            Some("http://localhost:8081")
        );
    }

    #[test]
    fn app_config_debug_redacts_api_key() {
        let mut map = HashMap::new();
        map.insert("NEWS_API_KEY", "super-secret");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        let printed = format!("{cfg:?}");
        assert!(!printed.contains("super-secret"), "key leaked: {printed}");
        assert!(printed.contains("[redacted]"));
    }
}
