//! Assistant configuration.
//!
//! Defaults reproduce the storefront's fixed behavior. `from_env` lets a host override them
//! through `REX_*` variables (a `.env` file is honored).

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use tracing::warn;
use validator::{Validate, ValidationError};

use crate::brain::confidence::{DEFAULT_HIGH_THRESHOLD, DEFAULT_MEDIUM_THRESHOLD};
use crate::brain::{Lexicon, TierThresholds};
use crate::error::{AppError, AppResult};

pub const DEFAULT_ASSISTANT_NAME: &str = "REX";
pub const DEFAULT_GREETING: &str =
    "Hi! I'm REX, your AI shopping assistant. How can I help you today?";

/// What happens to the transcript when a closed widget is opened again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReopenPolicy {
    /// Keep the whole history
    #[default]
    Preserve,
    /// Start over from the greeting
    Reset,
}

impl FromStr for ReopenPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "preserve" | "keep" => Ok(ReopenPolicy::Preserve),
            "reset" | "clear" => Ok(ReopenPolicy::Reset),
            other => Err(AppError::Config(format!("Unknown reopen policy '{}'", other))),
        }
    }
}

/// Runtime configuration of the assistant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_thresholds"))]
pub struct AssistantConfig {
    /// Name substituted into greeting templates.
    #[validate(length(min = 1))]
    pub assistant_name: String,
    /// First message of every fresh transcript.
    #[validate(length(min = 1))]
    pub greeting: String,
    /// Confidence above which intent-specific replies are used.
    #[validate(range(min = 0.0, max = 1.0))]
    pub high_threshold: f64,
    /// Confidence above which hedged replies are used.
    #[validate(range(min = 0.0, max = 1.0))]
    pub medium_threshold: f64,
    pub reopen_policy: ReopenPolicy,
    /// JSON lexicon replacing the built-in one.
    #[serde(default)]
    pub lexicon_path: Option<PathBuf>,
}

fn validate_thresholds(config: &AssistantConfig) -> Result<(), ValidationError> {
    if config.high_threshold > config.medium_threshold {
        Ok(())
    } else {
        Err(ValidationError::new("high_threshold_must_exceed_medium"))
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            assistant_name: DEFAULT_ASSISTANT_NAME.to_string(),
            greeting: DEFAULT_GREETING.to_string(),
            high_threshold: DEFAULT_HIGH_THRESHOLD,
            medium_threshold: DEFAULT_MEDIUM_THRESHOLD,
            reopen_policy: ReopenPolicy::default(),
            lexicon_path: None,
        }
    }
}

/// Parse an optional variable, keeping `fallback` (with a warning) when it is malformed.
fn env_or<T: FromStr>(key: &str, fallback: T) -> T {
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => match raw.trim().parse::<T>() {
            Ok(value) => value,
            Err(_) => {
                warn!("Ignoring invalid value '{}' for {}", raw, key);
                fallback
            }
        },
        _ => fallback,
    }
}

impl AssistantConfig {
    /// Build from `REX_*` environment variables on top of the defaults, then validate.
    pub fn from_env() -> AppResult<Self> {
        dotenv::dotenv().ok();
        let defaults = Self::default();

        let config = Self {
            assistant_name: env_or("REX_ASSISTANT_NAME", defaults.assistant_name),
            greeting: env_or("REX_GREETING", defaults.greeting),
            high_threshold: env_or("REX_HIGH_THRESHOLD", defaults.high_threshold),
            medium_threshold: env_or("REX_MEDIUM_THRESHOLD", defaults.medium_threshold),
            reopen_policy: env_or("REX_REOPEN_POLICY", defaults.reopen_policy),
            lexicon_path: env::var("REX_LEXICON_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn thresholds(&self) -> TierThresholds {
        TierThresholds {
            high: self.high_threshold,
            medium: self.medium_threshold,
        }
    }

    /// The configured lexicon: the JSON file if one is set, the built-in one otherwise.
    pub fn load_lexicon(&self) -> AppResult<Arc<Lexicon>> {
        match &self.lexicon_path {
            Some(path) => Ok(Arc::new(Lexicon::from_path(path)?)),
            None => Ok(Lexicon::builtin()),
        }
    }
}
