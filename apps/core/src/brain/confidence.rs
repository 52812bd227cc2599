//! Confidence fusion and tier bucketing.

use serde::{Deserialize, Serialize};

use super::entities::Entities;
use super::intent::IntentResult;
use super::sentiment::Sentiment;

/// Entity confidence when at least one product was detected
pub const ENTITY_CONFIDENCE_WITH_PRODUCT: f64 = 0.8;
/// Entity confidence otherwise
pub const ENTITY_CONFIDENCE_WITHOUT_PRODUCT: f64 = 0.3;

/// Default lower bound (exclusive) of the high tier
pub const DEFAULT_HIGH_THRESHOLD: f64 = 0.6;
/// Default lower bound (exclusive) of the medium tier
pub const DEFAULT_MEDIUM_THRESHOLD: f64 = 0.3;

/// Step function over detected products.
pub fn entity_confidence(entities: &Entities) -> f64 {
    if entities.products.is_empty() {
        ENTITY_CONFIDENCE_WITHOUT_PRODUCT
    } else {
        ENTITY_CONFIDENCE_WITH_PRODUCT
    }
}

/// Unweighted mean of intent, entity and sentiment confidence.
pub fn fuse(intent: &IntentResult, entities: &Entities, sentiment: &Sentiment) -> f64 {
    (intent.confidence + entity_confidence(entities) + sentiment.confidence) / 3.0
}

/// Response strategy bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    pub const ALL: [ConfidenceTier; 3] =
        [ConfidenceTier::High, ConfidenceTier::Medium, ConfidenceTier::Low];
}

/// Bucket boundaries, both exclusive lower bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierThresholds {
    pub high: f64,
    pub medium: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            high: DEFAULT_HIGH_THRESHOLD,
            medium: DEFAULT_MEDIUM_THRESHOLD,
        }
    }
}

impl TierThresholds {
    pub fn tier(&self, confidence: f64) -> ConfidenceTier {
        if confidence > self.high {
            ConfidenceTier::High
        } else if confidence > self.medium {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }
}
