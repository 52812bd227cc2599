//! Lexicon Store.
//!
//! All fixed word lists, patterns and reply templates live in one immutable structure.
//! `LexiconData` is the serializable form (swap it via JSON), `Lexicon` is the compiled
//! form the pipeline reads from. The built-in lexicon is compiled once per process.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;
use std::sync::{Arc, LazyLock};

use super::context::{QuestionType, TopicTag};
use super::entities::ProductTag;
use super::intent::IntentLabel;
use crate::error::{AppError, AppResult};

const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were", "be", "been", "have", "has", "had", "do", "does", "did", "will",
    "would", "could", "should",
];

const LEMMAS: &[(&str, &str)] = &[
    ("running", "run"),
    ("ran", "run"),
    ("runs", "run"),
    ("buying", "buy"),
    ("bought", "buy"),
    ("buys", "buy"),
    ("looking", "look"),
    ("looked", "look"),
    ("looks", "look"),
    ("phones", "phone"),
    ("headphones", "headphone"),
    ("watches", "watch"),
    ("gaming", "game"),
];

const POSITIVE_WORDS: &[&str] = &[
    "love", "like", "great", "awesome", "amazing", "perfect", "excellent", "wonderful",
    "fantastic", "good", "nice", "happy", "satisfied", "pleased",
];

const NEGATIVE_WORDS: &[&str] = &[
    "hate", "dislike", "bad", "terrible", "awful", "worst", "disappointed", "frustrated", "angry",
    "sad", "horrible", "poor", "unsatisfied",
];

const INTENSIFIERS: &[&str] = &["very", "really", "extremely", "absolutely", "totally"];

const INTENT_PATTERNS: &[(IntentLabel, &[&str])] = &[
    (
        IntentLabel::Greeting,
        &["hi", "hello", "hey", "good", "morning", "evening"],
    ),
    (
        IntentLabel::ProductInquiry,
        &["show", "find", "look", "search", "need", "want"],
    ),
    (
        IntentLabel::PriceInquiry,
        &["price", "cost", "expensive", "cheap", "budget", "afford"],
    ),
    (
        IntentLabel::Comparison,
        &["compare", "difference", "better", "best", "vs", "versus"],
    ),
    (
        IntentLabel::Purchase,
        &["buy", "purchase", "order", "cart", "checkout"],
    ),
    (
        IntentLabel::Support,
        &["help", "support", "problem", "issue", "question"],
    ),
    (
        // "how long" never equals a single lemma; it still counts in the denominator.
        IntentLabel::Shipping,
        &["ship", "delivery", "when", "how long", "fast"],
    ),
    (
        IntentLabel::Recommendation,
        &["recommend", "suggest", "advice", "opinion"],
    ),
];

const PRODUCT_PATTERNS: &[(ProductTag, &str)] = &[
    (
        ProductTag::Headphone,
        r"\b(headphone|earphone|earbud|audio|music|sound)\w*\b",
    ),
    (
        ProductTag::Phone,
        r"\b(phone|smartphone|mobile|iphone|android)\w*\b",
    ),
    (
        ProductTag::Watch,
        r"\b(watch|smartwatch|fitness|tracker|wearable)\w*\b",
    ),
    (ProductTag::Gaming, r"\b(mouse|gaming|wireless|optical)\w*\b"),
    (ProductTag::Speaker, r"\b(speaker|bluetooth|portable|sound)\w*\b"),
];

const PRICE_PATTERN: &str = r"₹\s*(\d+(?:,\d+)*)";

const FEATURES: &[&str] = &[
    "wireless",
    "bluetooth",
    "noise cancellation",
    "battery life",
    "waterproof",
    "fast charging",
    "high quality",
    "premium",
];

const TOPICS: &[(TopicTag, &[&str])] = &[
    (
        TopicTag::Technology,
        &["tech", "digital", "smart", "ai", "bluetooth", "wireless"],
    ),
    (
        TopicTag::Shopping,
        &[
            "buy", "purchase", "cart", "order", "price", "cost", "expensive", "cheap", "budget",
            "afford",
        ],
    ),
    (
        TopicTag::Support,
        &["help", "support", "problem", "issue", "question"],
    ),
    (
        TopicTag::Products,
        &["headphone", "phone", "watch", "mouse", "speaker"],
    ),
];

const URGENCY_WORDS: &[&str] = &[
    "urgent",
    "asap",
    "immediately",
    "now",
    "quick",
    "fast",
    "emergency",
];

const RETURN_WORDS: &[&str] = &["return", "refund", "exchange", "money back"];

/// One catalog product referenced by replies. Prices are fixed template constants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub product: ProductTag,
    pub name: String,
    /// Price in whole rupees
    pub price: u64,
    /// High-tier reply for this product; `{price}` is substituted. Without one the
    /// generic product prompt is used.
    #[serde(default)]
    pub pitch: Option<String>,
}

/// Reply templates. Placeholders in braces are filled by the reply generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseTemplates {
    /// Cheapest catalog price (Wireless Charger), whole rupees
    pub price_floor: u64,
    /// Most expensive catalog price (Smartphone Pro Max), whole rupees
    pub price_ceiling: u64,
    /// Order total above which shipping is free, whole rupees
    pub free_shipping_over: u64,
    pub greetings: Vec<String>,
    pub catalog: Vec<CatalogEntry>,
    pub generic_product: String,
    pub price_range: String,
    pub express_clause: String,
    pub comparison: String,
    pub comparison_with_products: String,
    pub purchase: String,
    pub support: String,
    pub returns: String,
    pub shipping: String,
    pub recommendation: String,
    pub recommendation_with_product: String,
    /// Medium tier; `{intent}` and `{products}` are substituted
    pub hedges: Vec<String>,
    /// Medium tier summary for one product; `{name}` and `{price}`
    pub product_summary: String,
    /// Medium tier summary when no product was detected
    pub generic_summary: String,
    pub clarify: String,
    pub tell_me_more: String,
    pub positive: String,
    pub negative: String,
    pub fallbacks: Vec<String>,
}

/// Intent keyword list as stored in lexicon data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentPatternData {
    pub intent: IntentLabel,
    pub patterns: Vec<String>,
}

/// Product regex as stored in lexicon data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPatternData {
    pub product: ProductTag,
    pub pattern: String,
}

/// Topic keyword list as stored in lexicon data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicData {
    pub topic: TopicTag,
    pub keywords: Vec<String>,
}

/// Sentiment word lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentData {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
    pub intensifiers: Vec<String>,
}

/// Serializable lexicon, before compilation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconData {
    pub stop_words: Vec<String>,
    pub lemmas: BTreeMap<String, String>,
    pub sentiment: SentimentData,
    pub intents: Vec<IntentPatternData>,
    pub products: Vec<ProductPatternData>,
    pub price_pattern: String,
    pub features: Vec<String>,
    pub topics: Vec<TopicData>,
    pub urgency_words: Vec<String>,
    pub return_words: Vec<String>,
    pub templates: ResponseTemplates,
}

fn strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl Default for LexiconData {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LexiconData {
    /// The storefront's built-in lexicon.
    pub fn builtin() -> Self {
        Self {
            stop_words: strings(STOP_WORDS),
            lemmas: LEMMAS
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
            sentiment: SentimentData {
                positive: strings(POSITIVE_WORDS),
                negative: strings(NEGATIVE_WORDS),
                intensifiers: strings(INTENSIFIERS),
            },
            intents: INTENT_PATTERNS
                .iter()
                .map(|(intent, patterns)| IntentPatternData {
                    intent: *intent,
                    patterns: strings(patterns),
                })
                .collect(),
            products: PRODUCT_PATTERNS
                .iter()
                .map(|(product, pattern)| ProductPatternData {
                    product: *product,
                    pattern: pattern.to_string(),
                })
                .collect(),
            price_pattern: PRICE_PATTERN.to_string(),
            features: strings(FEATURES),
            topics: TOPICS
                .iter()
                .map(|(topic, keywords)| TopicData {
                    topic: *topic,
                    keywords: strings(keywords),
                })
                .collect(),
            urgency_words: strings(URGENCY_WORDS),
            return_words: strings(RETURN_WORDS),
            templates: builtin_templates(),
        }
    }
}

fn builtin_templates() -> ResponseTemplates {
    let s = |t: &str| t.to_string();
    ResponseTemplates {
        price_floor: 2489,
        price_ceiling: 82999,
        free_shipping_over: 5000,
        greetings: vec![
            s("Hello there! I'm {assistant}, your personal AI stylist. How can I help you find the perfect products today?"),
            s("Hi! Great to see you! I'm here to help you discover amazing products. What are you looking for?"),
            s("Hey! Welcome to EcomAI! I'm {assistant}, and I'd love to help you find exactly what you need."),
        ],
        catalog: vec![
            CatalogEntry {
                product: ProductTag::Headphone,
                name: s("Wireless Bluetooth Headphones"),
                price: 6639,
                pitch: Some(s("Perfect choice! I recommend our Wireless Bluetooth Headphones for {price}. They feature noise cancellation, 30-hour battery life, and crystal-clear sound quality.")),
            },
            CatalogEntry {
                product: ProductTag::Phone,
                name: s("Smartphone Pro Max"),
                price: 82999,
                pitch: Some(s("Great timing! Our Smartphone Pro Max ({price}) is our flagship device with an advanced camera system, 5G connectivity, and premium performance. It has an outstanding 4.8/5 star rating!")),
            },
            CatalogEntry {
                product: ProductTag::Watch,
                name: s("Smart Fitness Watch"),
                price: 16599,
                pitch: Some(s("Excellent! Our Smart Fitness Watch ({price}) tracks heart rate, GPS and steps, and integrates seamlessly with your smartphone. It's loved by fitness enthusiasts!")),
            },
            CatalogEntry {
                product: ProductTag::Gaming,
                name: s("Wireless Gaming Mouse"),
                price: 7469,
                pitch: Some(s("For gaming, I highly recommend our Wireless Gaming Mouse ({price})! It features high-precision sensors, RGB lighting and customizable buttons.")),
            },
            CatalogEntry {
                product: ProductTag::Speaker,
                name: s("Portable Speaker"),
                price: 4979,
                pitch: None,
            },
        ],
        generic_product: s("We have an amazing selection of electronics: headphones, smartphones, fitness watches, gaming gear and more. What type of product interests you most?"),
        price_range: s("Our products range from {min} for the Wireless Charger up to {max} for the Smartphone Pro Max, with quality options at every price point in between."),
        express_clause: s(" Need it quickly? We also offer express delivery options."),
        comparison: s("Happy to help you compare! Tell me which products you're deciding between and I'll walk you through features, ratings and prices."),
        comparison_with_products: s("Let's compare {products}. {summaries} Which features matter most to you?"),
        purchase: s("Great! Add the item to your cart and head to checkout whenever you're ready. Orders over {free_shipping} ship for free."),
        support: s("I'm here to be your personal shopping assistant! I can help you find products, compare features, check prices, and answer questions about shipping and returns. What would you like to explore?"),
        returns: s("We want you to be completely happy with your purchase! We offer a 30-day return policy. Items must be in original condition, and if you're not 100% satisfied we'll make it right."),
        shipping: s("We offer FREE shipping on orders over {free_shipping}. Standard delivery takes 3-5 business days, and every order is carefully packaged and tracked."),
        recommendation: s("My top pick right now is our Smartphone Pro Max ({price}), our flagship with the highest rating of 4.8/5 stars."),
        recommendation_with_product: s("Based on what you told me, I'd recommend our {name} ({price})."),
        hedges: vec![
            s("I think you're asking about {intent}{products}."),
            s("It sounds like you're interested in {intent}{products}."),
            s("If I understand correctly, this is about {intent}{products}."),
        ],
        product_summary: s("You can get our {name} for {price}."),
        generic_summary: s("We carry headphones, smartphones, fitness watches, gaming gear and speakers at a range of prices."),
        clarify: s("Good question! Could you give me a few more details so I can point you to the right product?"),
        tell_me_more: s("Tell me a bit more about what you're looking for and I'll find the best match."),
        positive: s("I'm so glad to hear that! Is there anything else I can help you find today?"),
        negative: s("I'm sorry to hear that. Let me help make it right: tell me what went wrong or what you need."),
        fallbacks: vec![
            s("That's interesting! I'd love to help you find something perfect for your needs. Could you tell me what type of product you're looking for?"),
            s("I understand! Let me help you with that. Are you interested in electronics, accessories, or something specific?"),
            s("Absolutely! I'm here to make your shopping experience amazing. What can I help you discover today?"),
            s("I hear you! Let me assist you in finding exactly what you need. What type of products are you most interested in?"),
            s("That makes sense! Would you like to explore our electronics, or do you have something specific in mind?"),
        ],
    }
}

/// Compiled lexicon read by every pipeline stage. Never mutated after construction.
#[derive(Debug)]
pub struct Lexicon {
    stop_words: HashSet<String>,
    lemmas: HashMap<String, String>,
    positive: HashSet<String>,
    negative: HashSet<String>,
    intensifiers: HashSet<String>,
    intents: Vec<(IntentLabel, Vec<String>)>,
    products: Vec<(ProductTag, Regex)>,
    price: Regex,
    features: Vec<String>,
    topics: Vec<(TopicTag, Vec<String>)>,
    urgency_words: Vec<String>,
    question_types: Vec<(QuestionType, Regex)>,
    return_words: Vec<String>,
    templates: ResponseTemplates,
}

// NOTE: expect() is acceptable here: the built-in tables are compile-time constants.
static BUILTIN: LazyLock<Arc<Lexicon>> = LazyLock::new(|| {
    Arc::new(Lexicon::compile(LexiconData::builtin()).expect("Invalid built-in lexicon"))
});

fn case_insensitive(pattern: &str) -> AppResult<Regex> {
    Ok(RegexBuilder::new(pattern).case_insensitive(true).build()?)
}

fn lowercase_all(words: Vec<String>) -> Vec<String> {
    words.into_iter().map(|w| w.to_lowercase()).collect()
}

impl Lexicon {
    /// Shared handle to the built-in lexicon.
    pub fn builtin() -> Arc<Lexicon> {
        Arc::clone(&BUILTIN)
    }

    /// Compile and validate lexicon data.
    pub fn compile(data: LexiconData) -> AppResult<Self> {
        let mut intents = Vec::with_capacity(IntentLabel::ALL.len());
        for intent in IntentLabel::ALL {
            let patterns = data
                .intents
                .iter()
                .find(|p| p.intent == intent)
                .map(|p| lowercase_all(p.patterns.clone()))
                .ok_or_else(|| {
                    AppError::Config(format!("Lexicon has no patterns for intent '{}'", intent))
                })?;
            if patterns.is_empty() {
                return Err(AppError::Config(format!(
                    "Intent '{}' has an empty pattern list",
                    intent
                )));
            }
            intents.push((intent, patterns));
        }

        let mut products = Vec::with_capacity(data.products.len());
        for entry in &data.products {
            products.push((entry.product, case_insensitive(&entry.pattern)?));
        }
        if let Some(missing) = ProductTag::ALL
            .iter()
            .find(|tag| !products.iter().any(|(p, _)| p == *tag))
        {
            return Err(AppError::Config(format!(
                "Lexicon has no pattern for product '{}'",
                missing
            )));
        }

        let price = case_insensitive(&data.price_pattern)?;
        if price.captures_len() < 2 {
            return Err(AppError::Config(
                "Price pattern must capture the amount in group 1".to_string(),
            ));
        }

        let mut question_types = Vec::with_capacity(QuestionType::PRIORITY.len());
        for kind in QuestionType::PRIORITY {
            question_types.push((kind, case_insensitive(&format!(r"\b{}\b", kind.label()))?));
        }

        let t = &data.templates;
        for (name, pool) in [
            ("greetings", &t.greetings),
            ("hedges", &t.hedges),
            ("fallbacks", &t.fallbacks),
        ] {
            if pool.is_empty() {
                return Err(AppError::Config(format!(
                    "Template pool '{}' must not be empty",
                    name
                )));
            }
        }

        Ok(Self {
            stop_words: lowercase_all(data.stop_words).into_iter().collect(),
            lemmas: data.lemmas.into_iter().collect(),
            positive: lowercase_all(data.sentiment.positive).into_iter().collect(),
            negative: lowercase_all(data.sentiment.negative).into_iter().collect(),
            intensifiers: lowercase_all(data.sentiment.intensifiers)
                .into_iter()
                .collect(),
            intents,
            products,
            price,
            features: lowercase_all(data.features),
            topics: data
                .topics
                .into_iter()
                .map(|t| (t.topic, lowercase_all(t.keywords)))
                .collect(),
            urgency_words: lowercase_all(data.urgency_words)
                .into_iter()
                .filter(|w| !w.is_empty())
                .collect(),
            question_types,
            return_words: lowercase_all(data.return_words),
            templates: data.templates,
        })
    }

    /// Parse JSON lexicon data and compile it.
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let data: LexiconData = serde_json::from_str(json)?;
        Self::compile(data)
    }

    /// Load a JSON lexicon file and compile it.
    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn lemma<'w>(&'w self, word: &'w str) -> &'w str {
        self.lemmas.get(word).map(String::as_str).unwrap_or(word)
    }

    pub fn is_positive(&self, word: &str) -> bool {
        self.positive.contains(word)
    }

    pub fn is_negative(&self, word: &str) -> bool {
        self.negative.contains(word)
    }

    pub fn is_intensifier(&self, word: &str) -> bool {
        self.intensifiers.contains(word)
    }

    /// Keyword list of an intent (empty slice never happens after compile).
    pub fn intent_patterns(&self, intent: IntentLabel) -> &[String] {
        self.intents
            .iter()
            .find(|(label, _)| *label == intent)
            .map(|(_, patterns)| patterns.as_slice())
            .unwrap_or(&[])
    }

    pub fn product_patterns(&self) -> &[(ProductTag, Regex)] {
        &self.products
    }

    pub fn price_pattern(&self) -> &Regex {
        &self.price
    }

    pub fn features(&self) -> &[String] {
        &self.features
    }

    pub fn topics(&self) -> &[(TopicTag, Vec<String>)] {
        &self.topics
    }

    /// Lowercase urgency words, matched as substrings of the lowercased text.
    pub fn urgency_words(&self) -> &[String] {
        &self.urgency_words
    }

    /// Question word regexes in priority order.
    pub fn question_types(&self) -> &[(QuestionType, Regex)] {
        &self.question_types
    }

    pub fn return_words(&self) -> &[String] {
        &self.return_words
    }

    pub fn templates(&self) -> &ResponseTemplates {
        &self.templates
    }

    /// Catalog entry for a product, if the templates know it.
    pub fn catalog_entry(&self, product: ProductTag) -> Option<&CatalogEntry> {
        self.templates.catalog.iter().find(|e| e.product == product)
    }
}
