//! REX storefront assistant core.
//!
//! Model-free message analysis (`brain`), tiered reply generation (`reply`) and the
//! conversation session that ties them to a transcript.

pub mod assistant;
pub mod brain;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod reply;
pub mod session;

#[cfg(test)]
mod tests;

pub use assistant::{Assistant, Exchange};
pub use brain::{AnalysisResult, Analyzer, Lexicon};
pub use config::{AssistantConfig, ReopenPolicy};
pub use error::{AppError, AppResult};
pub use models::{Message, Sender, Transcript};
pub use reply::{Reply, ResponseGenerator, RngPicker, ScriptedPicker, VariantPicker};
pub use session::{ConversationSession, SessionState};
