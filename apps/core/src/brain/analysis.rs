//! Analysis Result - output of one pass of the brain over a user message.
//!
//! Created per message and dropped once the reply is produced.

use serde::{Deserialize, Serialize};

use super::confidence::entity_confidence;
use super::context::Context;
use super::entities::Entities;
use super::intent::IntentResult;
use super::sentiment::Sentiment;

/// Complete analysis of a single message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Original user text
    pub text: String,

    /// Normalized, stop-word-free tokens
    pub tokens: Vec<String>,

    /// Dictionary forms of `tokens`, same length
    pub lemmas: Vec<String>,

    /// Products, prices and features
    pub entities: Entities,

    /// Top intent with the full ranking
    pub intent: IntentResult,

    /// Sentiment label and scores
    pub sentiment: Sentiment,

    /// Question type, urgency, complexity, topics
    pub context: Context,

    /// Fused confidence in [0, 1]
    pub confidence: f64,
}

impl AnalysisResult {
    /// Entity component of the fused confidence.
    pub fn entity_confidence(&self) -> f64 {
        entity_confidence(&self.entities)
    }

    /// Whether the raw text carries a question marker.
    pub fn is_question(&self) -> bool {
        self.text.contains('?')
    }

    /// Get a summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Intent: {} ({:.0}%), Products: {}, Sentiment: {:?}, Question: {}, Confidence: {:.3}",
            self.intent.intent,
            self.intent.confidence * 100.0,
            self.entities.products.len(),
            self.sentiment.label,
            self.context.question_type.label(),
            self.confidence
        )
    }
}
