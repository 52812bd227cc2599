//! Lexicon-based sentiment with intensifier weighting.

use serde::{Deserialize, Serialize};

use super::lexicon::Lexicon;

/// Baseline confidence of a neutral message
pub const NEUTRAL_CONFIDENCE: f64 = 0.5;
/// Upper bound for a non-neutral confidence
pub const MAX_CONFIDENCE: f64 = 0.9;
/// Confidence added per point of score difference
pub const CONFIDENCE_STEP: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub label: SentimentLabel,
    pub confidence: f64,
    pub positive_score: u32,
    pub negative_score: u32,
}

pub struct SentimentAnalyzer<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> SentimentAnalyzer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn analyze(&self, text: &str) -> Sentiment {
        // Raw whitespace split: no stop-word removal and punctuation stays attached,
        // so "great!" is not "great".
        let lower = text.to_lowercase();
        let words: Vec<&str> = lower.split_whitespace().collect();

        let mut positive_score = 0u32;
        let mut negative_score = 0u32;

        for (i, word) in words.iter().enumerate() {
            let weight = if i > 0 && self.lexicon.is_intensifier(words[i - 1]) {
                2
            } else {
                1
            };
            if self.lexicon.is_positive(word) {
                positive_score += weight;
            }
            if self.lexicon.is_negative(word) {
                negative_score += weight;
            }
        }

        let diff = positive_score.abs_diff(negative_score);
        let label = match positive_score.cmp(&negative_score) {
            std::cmp::Ordering::Greater => SentimentLabel::Positive,
            std::cmp::Ordering::Less => SentimentLabel::Negative,
            std::cmp::Ordering::Equal => SentimentLabel::Neutral,
        };
        let confidence = match label {
            SentimentLabel::Neutral => NEUTRAL_CONFIDENCE,
            _ => (NEUTRAL_CONFIDENCE + CONFIDENCE_STEP * diff as f64).min(MAX_CONFIDENCE),
        };

        Sentiment {
            label,
            confidence,
            positive_score,
            negative_score,
        }
    }
}
