//! # Brain Module
//!
//! Fast, model-free analysis of storefront chat messages.
//!
//! ## Components
//! - `lexicon`: immutable word lists, patterns and reply templates
//! - `tokenizer`: tokenization and lemmatization
//! - `entities`: product, price and feature extraction
//! - `intent`: keyword-ratio intent classification
//! - `sentiment`: lexicon sentiment with intensifiers
//! - `context`: question type, urgency, complexity, topics
//! - `confidence`: confidence fusion and tiers
//! - `analysis`: output data structure
//! - `analyzer`: main orchestrator

pub mod analysis;
pub mod analyzer;
pub mod confidence;
pub mod context;
pub mod entities;
pub mod intent;
pub mod lexicon;
pub mod sentiment;
pub mod tokenizer;

pub use analysis::AnalysisResult;
pub use analyzer::Analyzer;
pub use confidence::{ConfidenceTier, TierThresholds};
pub use context::{Context, ContextAnalyzer, Level, QuestionType, TopicTag};
pub use entities::{Entities, EntityExtractor, ProductTag};
pub use intent::{IntentClassifier, IntentLabel, IntentResult, IntentScore};
pub use lexicon::{Lexicon, LexiconData, ResponseTemplates};
pub use sentiment::{Sentiment, SentimentAnalyzer, SentimentLabel};
pub use tokenizer::Tokenizer;
