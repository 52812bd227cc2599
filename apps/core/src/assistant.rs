//! The assistant's external contract: `analyze` and `respond`.

use std::sync::Arc;
use tracing::debug;

use crate::brain::{AnalysisResult, Analyzer, Lexicon, TierThresholds};
use crate::config::{AssistantConfig, DEFAULT_ASSISTANT_NAME};
use crate::error::AppResult;
use crate::models::{Message, Transcript};
use crate::reply::{Reply, ResponseGenerator, VariantPicker};

/// Outcome of one `respond` call
#[derive(Debug, Clone, PartialEq)]
pub struct Exchange {
    /// Reply text, `None` when the input was blank and nothing happened
    pub reply: Option<String>,
    /// The transcript after the turn
    pub transcript: Transcript,
}

/// Analysis pipeline plus reply generation over one shared lexicon
pub struct Assistant {
    analyzer: Analyzer,
    generator: ResponseGenerator,
}

impl Default for Assistant {
    fn default() -> Self {
        Self::new(
            Lexicon::builtin(),
            TierThresholds::default(),
            DEFAULT_ASSISTANT_NAME,
        )
    }
}

impl Assistant {
    pub fn new(lexicon: Arc<Lexicon>, thresholds: TierThresholds, assistant_name: &str) -> Self {
        Self {
            analyzer: Analyzer::new(Arc::clone(&lexicon)),
            generator: ResponseGenerator::new(lexicon, thresholds, assistant_name),
        }
    }

    /// Build from configuration, loading the configured lexicon.
    pub fn from_config(config: &AssistantConfig) -> AppResult<Self> {
        let lexicon = config.load_lexicon()?;
        Ok(Self::new(
            lexicon,
            config.thresholds(),
            &config.assistant_name,
        ))
    }

    /// Stateless analysis of one message.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        self.analyzer.analyze(text)
    }

    /// Analyze and reply, without touching any transcript.
    pub fn reply(&self, text: &str, picker: &mut dyn VariantPicker) -> Reply {
        let analysis = self.analyze(text);
        self.generator.generate(&analysis, picker)
    }

    /// Per-turn entry point. Blank input returns the transcript untouched and no reply.
    pub fn respond(
        &self,
        text: &str,
        mut transcript: Transcript,
        picker: &mut dyn VariantPicker,
    ) -> Exchange {
        if text.trim().is_empty() {
            debug!("Ignoring blank input");
            return Exchange {
                reply: None,
                transcript,
            };
        }

        transcript.push(Message::user(text));
        let reply = self.reply(text, picker);
        transcript.push(Message::assistant(reply.text.clone()));

        Exchange {
            reply: Some(reply.text),
            transcript,
        }
    }
}
