//! Intent classification over lemmas.
//!
//! Every intent owns a keyword list in the lexicon. The score of an intent is the share
//! of its keywords present among the lemmas, so short lists saturate faster than long ones.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::lexicon::Lexicon;

/// Classified purpose of a user message.
///
/// Declaration order is significant: it breaks ties between equal scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentLabel {
    /// Greeting (hi, hello, good morning)
    Greeting,
    /// Looking for a product (show, find, need)
    ProductInquiry,
    /// Asking about prices or budget
    PriceInquiry,
    /// Comparing products
    Comparison,
    /// Wants to buy or check out
    Purchase,
    /// Needs help with a problem
    Support,
    /// Shipping and delivery questions
    Shipping,
    /// Asking for a suggestion
    Recommendation,
}

impl IntentLabel {
    /// All labels in declaration (tie-break) order.
    pub const ALL: [IntentLabel; 8] = [
        IntentLabel::Greeting,
        IntentLabel::ProductInquiry,
        IntentLabel::PriceInquiry,
        IntentLabel::Comparison,
        IntentLabel::Purchase,
        IntentLabel::Support,
        IntentLabel::Shipping,
        IntentLabel::Recommendation,
    ];

    /// Returns the snake_case label
    pub fn label(&self) -> &'static str {
        match self {
            IntentLabel::Greeting => "greeting",
            IntentLabel::ProductInquiry => "product_inquiry",
            IntentLabel::PriceInquiry => "price_inquiry",
            IntentLabel::Comparison => "comparison",
            IntentLabel::Purchase => "purchase",
            IntentLabel::Support => "support",
            IntentLabel::Shipping => "shipping",
            IntentLabel::Recommendation => "recommendation",
        }
    }

    /// Human phrasing used inside reply templates.
    pub fn phrase(&self) -> &'static str {
        match self {
            IntentLabel::Greeting => "saying hello",
            IntentLabel::ProductInquiry => "finding a product",
            IntentLabel::PriceInquiry => "prices",
            IntentLabel::Comparison => "comparing products",
            IntentLabel::Purchase => "placing an order",
            IntentLabel::Support => "getting some help",
            IntentLabel::Shipping => "shipping and delivery",
            IntentLabel::Recommendation => "a recommendation",
        }
    }
}

impl fmt::Display for IntentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Score of a single intent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntentScore {
    /// The intent
    pub intent: IntentLabel,
    /// Matched keywords / keyword list size, in [0, 1]
    pub score: f64,
}

/// Result of intent classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentResult {
    /// Top intent (highest score, first declared on ties)
    pub intent: IntentLabel,
    /// Exactly the top intent's score
    pub confidence: f64,
    /// All intents, descending by score, ties in declaration order
    pub ranking: Vec<IntentScore>,
    /// Keywords of the top intent found among the lemmas
    pub matched_patterns: Vec<String>,
}

impl IntentResult {
    /// Score of a given intent in this ranking.
    pub fn score_of(&self, intent: IntentLabel) -> f64 {
        self.ranking
            .iter()
            .find(|s| s.intent == intent)
            .map(|s| s.score)
            .unwrap_or(0.0)
    }
}

/// Keyword-ratio intent classifier
pub struct IntentClassifier<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> IntentClassifier<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Score one keyword list against the lemmas.
    ///
    /// The denominator is the keyword list size, not the lemma count.
    fn score(lemmas: &[String], patterns: &[String]) -> f64 {
        if patterns.is_empty() {
            return 0.0;
        }
        let hits = patterns
            .iter()
            .filter(|p| lemmas.iter().any(|l| l == *p))
            .count();
        hits as f64 / patterns.len() as f64
    }

    /// Classify a lemma sequence.
    pub fn classify(&self, lemmas: &[String]) -> IntentResult {
        let mut ranking: Vec<IntentScore> = IntentLabel::ALL
            .iter()
            .map(|&intent| IntentScore {
                intent,
                score: Self::score(lemmas, self.lexicon.intent_patterns(intent)),
            })
            .collect();

        // Stable sort keeps declaration order among equal scores.
        ranking.sort_by(|a, b| b.score.total_cmp(&a.score));

        let top = ranking[0];
        let matched_patterns = self
            .lexicon
            .intent_patterns(top.intent)
            .iter()
            .filter(|p| lemmas.iter().any(|l| l == *p))
            .cloned()
            .collect();

        IntentResult {
            intent: top.intent,
            confidence: top.score,
            ranking,
            matched_patterns,
        }
    }
}
