//! Lexicon-backed sentiment model, the default binding.

use async_trait::async_trait;

use crate::error::SentimentError;
use crate::model::{ModelPrediction, Polarity, SentimentModel};

/// General news-vocabulary word weights.
///
/// Keys are lowercase single words. Values in `(0.0, 1.0]` are positive,
/// in `[-1.0, 0.0)` are negative. The summed score is clamped to `[-1.0, 1.0]`.
const LEXICON: &[(&str, f64)] = &[
    // Positive signals
    ("gain", 0.4),
    ("gains", 0.4),
    ("growth", 0.4),
    ("surge", 0.5),
    ("soars", 0.5),
    ("rally", 0.4),
    ("record", 0.3),
    ("strong", 0.3),
    ("boost", 0.4),
    ("success", 0.5),
    ("breakthrough", 0.5),
    ("win", 0.4),
    ("wins", 0.4),
    ("recovery", 0.4),
    ("optimism", 0.5),
    ("upbeat", 0.4),
    ("improved", 0.3),
    ("thriving", 0.5),
    ("booming", 0.5),
    ("praise", 0.3),
    // Negative signals
    ("crash", -0.7),
    ("crisis", -0.6),
    ("collapse", -0.7),
    ("slump", -0.5),
    ("plunge", -0.6),
    ("losses", -0.4),
    ("layoffs", -0.6),
    ("recession", -0.6),
    ("fraud", -0.7),
    ("scandal", -0.6),
    ("lawsuit", -0.5),
    ("bankruptcy", -0.7),
    ("decline", -0.4),
    ("warning", -0.4),
    ("fears", -0.4),
    ("threat", -0.5),
    ("failed", -0.4),
    ("failure", -0.4),
    ("shutdown", -0.6),
    ("turmoil", -0.5),
];

/// Scores text by summing lexicon weights over its words.
///
/// Splits on whitespace, strips non-alphabetic edges, lowercases, and clamps
/// the sum to `[-1.0, 1.0]`. Unknown or empty text scores `0.0`.
fn lexicon_score(text: &str) -> f64 {
    let mut score = 0.0_f64;
    for word in text.split_whitespace() {
        let w = word
            .trim_matches(|c: char| !c.is_alphabetic())
            .to_lowercase();
        for &(lex_word, weight) in LEXICON {
            if w == lex_word {
                score += weight;
                break;
            }
        }
    }
    score.clamp(-1.0, 1.0)
}

/// Sentiment model backed by the in-process lexicon.
///
/// The signed lexicon score becomes a binary polarity with a confidence:
/// the sign picks the polarity (zero counts as positive) and the magnitude
/// maps onto `[0.5, 1.0]`, so a neutral-vocabulary text reports the lowest
/// possible confidence rather than a strong one.
#[derive(Debug, Default)]
pub struct LexiconModel;

impl LexiconModel {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SentimentModel for LexiconModel {
    async fn predict(&self, text: &str) -> Result<ModelPrediction, SentimentError> {
        let signed = lexicon_score(text);
        let polarity = if signed < 0.0 {
            Polarity::Negative
        } else {
            Polarity::Positive
        };
        Ok(ModelPrediction {
            polarity,
            score: 0.5 + signed.abs() / 2.0,
        })
    }
}
