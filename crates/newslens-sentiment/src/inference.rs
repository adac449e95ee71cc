//! HTTP inference-service sentiment model.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::SentimentError;
use crate::model::{ModelPrediction, Polarity, SentimentModel};

/// Sentiment model backed by a remote inference server.
///
/// The server takes `{"inputs": "<text>"}` and answers a JSON array of
/// `{"label", "score"}` predictions, best first; only the first element is
/// used. Labels are matched case-insensitively.
pub struct InferenceModel {
    client: reqwest::Client,
    url: String,
}

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

#[derive(Deserialize)]
struct InferencePrediction {
    label: String,
    score: f64,
}

impl InferenceModel {
    #[must_use]
    pub fn new(url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.trim_end_matches('/').to_owned(),
        }
    }
}

#[async_trait]
impl SentimentModel for InferenceModel {
    async fn predict(&self, text: &str) -> Result<ModelPrediction, SentimentError> {
        let response = self
            .client
            .post(&self.url)
            .json(&InferenceRequest { inputs: text })
            .send()
            .await
            .map_err(|e| SentimentError::Inference(format!("inference request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(SentimentError::Inference(format!(
                "inference server returned status {}",
                response.status()
            )));
        }

        let predictions: Vec<InferencePrediction> = response
            .json()
            .await
            .map_err(|e| SentimentError::Inference(format!("inference response parse error: {e}")))?;

        let best = predictions.first().ok_or_else(|| {
            SentimentError::Inference("inference server returned no predictions".to_string())
        })?;

        Ok(ModelPrediction {
            polarity: Polarity::parse(&best.label)?,
            score: best.score,
        })
    }
}
