//! Brain Analyzer - orchestrates every analysis stage for one message.
//!
//! Raw text feeds the entity, sentiment and context analyzers directly; the
//! tokenizer -> lemmatizer path feeds the intent classifier. All four outputs are fused
//! into a single confidence.

use std::sync::Arc;
use tracing::debug;

use super::analysis::AnalysisResult;
use super::confidence::fuse;
use super::context::ContextAnalyzer;
use super::entities::EntityExtractor;
use super::intent::IntentClassifier;
use super::lexicon::Lexicon;
use super::sentiment::SentimentAnalyzer;
use super::tokenizer::Tokenizer;

/// Stateless analyzer over a shared lexicon
#[derive(Clone)]
pub struct Analyzer {
    lexicon: Arc<Lexicon>,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(Lexicon::builtin())
    }
}

impl Analyzer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Arc<Lexicon> {
        &self.lexicon
    }

    /// Analyze a message. Pure: the same text always yields the same result.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let lexicon = self.lexicon.as_ref();

        let tokenizer = Tokenizer::new(lexicon);
        let tokens = tokenizer.tokenize(text);
        let lemmas = tokenizer.lemmatize(&tokens);

        let entities = EntityExtractor::new(lexicon).extract(text);
        let intent = IntentClassifier::new(lexicon).classify(&lemmas);
        let sentiment = SentimentAnalyzer::new(lexicon).analyze(text);
        let context = ContextAnalyzer::new(lexicon).analyze(text);

        let confidence = fuse(&intent, &entities, &sentiment);

        let result = AnalysisResult {
            text: text.to_string(),
            tokens,
            lemmas,
            entities,
            intent,
            sentiment,
            context,
            confidence,
        };
        debug!("{}", result.summary());
        result
    }
}
