//! HTTP client for the NewsAPI.org REST API.
//!
//! Wraps `reqwest` with NewsAPI-specific error handling, API key management,
//! and typed response deserialization. The API reports failures in-band via
//! the `"status"` field of its JSON envelope; anything other than `"ok"`
//! surfaces as [`NewsApiError::Status`].

mod client;
mod error;
mod types;

pub use client::NewsApiClient;
pub use error::NewsApiError;
pub use types::{ArticleSource, NewsResponse, RawArticle, SearchQuery};
