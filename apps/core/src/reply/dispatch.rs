//! Tier x intent dispatch table.

use serde::{Deserialize, Serialize};

use crate::brain::{AnalysisResult, ConfidenceTier, IntentLabel, SentimentLabel};

/// Messages with at most this many lemmas get the "tell me more" reply in the low tier
pub const SHORT_MESSAGE_LEMMAS: usize = 3;

/// Reply strategy chosen for a (tier, intent) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Greeting,
    Product,
    PriceRange,
    Comparison,
    Purchase,
    Support,
    Shipping,
    Recommendation,
    /// Random hedge phrasing plus a product summary
    Hedge,
    /// Contextual fallback chain
    Fallback,
}

use ConfidenceTier::{High, Low, Medium};
use IntentLabel::*;

/// Every (tier, intent) pair appears exactly once.
pub const DISPATCH_TABLE: [(ConfidenceTier, IntentLabel, Route); 24] = [
    (High, Greeting, Route::Greeting),
    (High, ProductInquiry, Route::Product),
    (High, PriceInquiry, Route::PriceRange),
    (High, Comparison, Route::Comparison),
    (High, Purchase, Route::Purchase),
    (High, Support, Route::Support),
    (High, Shipping, Route::Shipping),
    (High, Recommendation, Route::Recommendation),
    // A greeting keyword alone fuses to ~0.32, so greetings are answered in kind here too.
    (Medium, Greeting, Route::Greeting),
    (Medium, ProductInquiry, Route::Hedge),
    (Medium, PriceInquiry, Route::Hedge),
    (Medium, Comparison, Route::Hedge),
    (Medium, Purchase, Route::Hedge),
    (Medium, Support, Route::Hedge),
    (Medium, Shipping, Route::Hedge),
    (Medium, Recommendation, Route::Hedge),
    (Low, Greeting, Route::Fallback),
    (Low, ProductInquiry, Route::Fallback),
    (Low, PriceInquiry, Route::Fallback),
    (Low, Comparison, Route::Fallback),
    (Low, Purchase, Route::Fallback),
    (Low, Support, Route::Fallback),
    (Low, Shipping, Route::Fallback),
    (Low, Recommendation, Route::Fallback),
];

pub fn route(tier: ConfidenceTier, intent: IntentLabel) -> Route {
    DISPATCH_TABLE
        .iter()
        .find(|(t, i, _)| *t == tier && *i == intent)
        .map(|(_, _, route)| *route)
        .unwrap_or(Route::Fallback)
}

/// Step of the low-tier fallback chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackStep {
    Clarify,
    TellMeMore,
    Positive,
    Negative,
    Generic,
}

/// First matching step, in priority order: question marker, short message, sentiment,
/// generic pool.
pub fn fallback_step(analysis: &AnalysisResult) -> FallbackStep {
    if analysis.is_question() {
        FallbackStep::Clarify
    } else if analysis.lemmas.len() <= SHORT_MESSAGE_LEMMAS {
        FallbackStep::TellMeMore
    } else {
        match analysis.sentiment.label {
            SentimentLabel::Positive => FallbackStep::Positive,
            SentimentLabel::Negative => FallbackStep::Negative,
            SentimentLabel::Neutral => FallbackStep::Generic,
        }
    }
}
