//! Bucket mapping from binary model predictions to the sentiment taxonomy.

use std::sync::Arc;

use crate::model::{ModelPrediction, Polarity, SentimentModel};
use crate::types::{Sentiment, SentimentResult};

/// Confidence above which a polarity is promoted to its "very" bucket.
/// Strictly greater-than: a score of exactly 0.8 stays in the plain bucket.
const STRONG_CONFIDENCE: f64 = 0.8;

/// Maps model predictions onto the four-bucket sentiment taxonomy.
///
/// Constructed once at startup around the bound model and shared across
/// requests; it holds no per-call state.
#[derive(Clone)]
pub struct SentimentClassifier {
    model: Arc<dyn SentimentModel>,
}

impl SentimentClassifier {
    #[must_use]
    pub fn new(model: Arc<dyn SentimentModel>) -> Self {
        Self { model }
    }

    /// Classifies text into a sentiment bucket.
    ///
    /// Never fails: a model error is logged and collapses to the neutral
    /// sentinel, so one bad article cannot abort a batch.
    pub async fn classify(&self, text: &str) -> SentimentResult {
        match self.model.predict(text).await {
            Ok(prediction) => bucket(prediction),
            Err(e) => {
                tracing::warn!(error = %e, "sentiment prediction failed; falling back to neutral");
                SentimentResult::neutral()
            }
        }
    }
}

fn bucket(prediction: ModelPrediction) -> SentimentResult {
    let strong = prediction.score > STRONG_CONFIDENCE;
    let sentiment = match (prediction.polarity, strong) {
        (Polarity::Positive, true) => Sentiment::VeryPositive,
        (Polarity::Positive, false) => Sentiment::Positive,
        (Polarity::Negative, true) => Sentiment::VeryNegative,
        (Polarity::Negative, false) => Sentiment::Negative,
    };
    SentimentResult {
        sentiment,
        score: prediction.score,
    }
}
