//! The pluggable classifier seam.

use async_trait::async_trait;

use crate::error::SentimentError;

/// Binary polarity emitted by the underlying model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    /// Parses a wire label, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::UnknownLabel`] for anything other than
    /// `positive`/`negative`.
    pub fn parse(label: &str) -> Result<Self, SentimentError> {
        match label.to_ascii_lowercase().as_str() {
            "positive" => Ok(Polarity::Positive),
            "negative" => Ok(Polarity::Negative),
            other => Err(SentimentError::UnknownLabel(other.to_string())),
        }
    }
}

/// A model's single best prediction: polarity plus confidence in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelPrediction {
    pub polarity: Polarity,
    pub score: f64,
}

/// A text classifier producing a binary polarity with a confidence score.
///
/// The bound model is opaque to the rest of the system: production wires in
/// [`crate::LexiconModel`] or [`crate::InferenceModel`], tests substitute
/// scripted stubs. Implementations must tolerate empty input.
#[async_trait]
pub trait SentimentModel: Send + Sync {
    async fn predict(&self, text: &str) -> Result<ModelPrediction, SentimentError>;
}
