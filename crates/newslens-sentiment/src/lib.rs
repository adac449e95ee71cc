//! Sentiment classification and article enrichment for newslens.
//!
//! Wraps a pluggable text classifier (the [`SentimentModel`] trait) behind
//! [`SentimentClassifier`], which maps binary polarity predictions onto the
//! four-bucket sentiment taxonomy, and runs the fetch → classify → filter
//! pipeline via [`NewsEnrichmentService`].

pub mod classifier;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod types;

mod inference;
mod lexicon;

pub use classifier::SentimentClassifier;
pub use error::{EnrichError, SentimentError};
pub use inference::InferenceModel;
pub use lexicon::LexiconModel;
pub use model::{ModelPrediction, Polarity, SentimentModel};
pub use pipeline::NewsEnrichmentService;
pub use types::{EnrichedArticle, EnrichedFeed, NewsQuery, Sentiment, SentimentResult};
