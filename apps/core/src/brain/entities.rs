//! Entity extraction from raw message text.
//!
//! Products are detected by word-bounded regexes over the unlemmatized text, prices by a
//! currency-marked number pattern, features by plain substring containment.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::lexicon::Lexicon;

/// Product category recognized in messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductTag {
    Headphone,
    Phone,
    Watch,
    Gaming,
    Speaker,
}

impl ProductTag {
    /// All tags, in reply priority order.
    pub const ALL: [ProductTag; 5] = [
        ProductTag::Headphone,
        ProductTag::Phone,
        ProductTag::Watch,
        ProductTag::Gaming,
        ProductTag::Speaker,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProductTag::Headphone => "headphone",
            ProductTag::Phone => "phone",
            ProductTag::Watch => "watch",
            ProductTag::Gaming => "gaming",
            ProductTag::Speaker => "speaker",
        }
    }
}

impl fmt::Display for ProductTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Structured facts found in one message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entities {
    /// Detected product categories (at most once each)
    pub products: BTreeSet<ProductTag>,
    /// Currency amounts, left to right, duplicates kept
    pub prices: Vec<u64>,
    /// Feature keywords found in the text
    pub features: BTreeSet<String>,
}

impl Entities {
    /// First detected product following the given priority order.
    pub fn first_product_in(&self, priority: &[ProductTag]) -> Option<ProductTag> {
        priority.iter().copied().find(|p| self.products.contains(p))
    }
}

/// Extracts products, prices and features from raw text
pub struct EntityExtractor<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> EntityExtractor<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn extract(&self, text: &str) -> Entities {
        let products = self
            .lexicon
            .product_patterns()
            .iter()
            .filter(|(_, pattern)| pattern.is_match(text))
            .map(|(tag, _)| *tag)
            .collect();

        // Amounts too large for u64 are skipped rather than failing the turn.
        let prices = self
            .lexicon
            .price_pattern()
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .filter_map(|m| m.as_str().replace(',', "").parse::<u64>().ok())
            .collect();

        let lower = text.to_lowercase();
        let features = self
            .lexicon
            .features()
            .iter()
            .filter(|f| lower.contains(f.as_str()))
            .cloned()
            .collect();

        Entities {
            products,
            prices,
            features,
        }
    }
}
