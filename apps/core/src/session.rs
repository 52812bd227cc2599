//! Conversation Session
//!
//! Open/closed widget state, the pending-input buffer and the transcript of one
//! conversation. Each accepted turn runs the whole pipeline before returning.

use serde::{Deserialize, Serialize};
use std::mem;
use std::sync::Arc;
use tracing::info;

use crate::assistant::Assistant;
use crate::config::{AssistantConfig, ReopenPolicy};
use crate::error::AppResult;
use crate::models::Transcript;
use crate::reply::{RngPicker, VariantPicker};

/// Widget visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    #[default]
    Closed,
    Open,
}

pub struct ConversationSession {
    assistant: Arc<Assistant>,
    picker: Box<dyn VariantPicker + Send>,
    greeting: String,
    reopen_policy: ReopenPolicy,
    state: SessionState,
    input: String,
    transcript: Transcript,
    /// Set once the widget has been closed at least once
    was_closed: bool,
}

impl ConversationSession {
    pub fn new(
        assistant: Arc<Assistant>,
        greeting: impl Into<String>,
        reopen_policy: ReopenPolicy,
        picker: Box<dyn VariantPicker + Send>,
    ) -> Self {
        let greeting = greeting.into();
        Self {
            assistant,
            picker,
            transcript: Transcript::with_greeting(greeting.clone()),
            greeting,
            reopen_policy,
            state: SessionState::Closed,
            input: String::new(),
            was_closed: false,
        }
    }

    /// Session over a freshly built assistant, picking variants from OS entropy.
    pub fn from_config(config: &AssistantConfig) -> AppResult<Self> {
        let assistant = Assistant::from_config(config)?;
        Ok(Self::new(
            Arc::new(assistant),
            config.greeting.clone(),
            config.reopen_policy,
            Box::new(RngPicker::from_entropy()),
        ))
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == SessionState::Open
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn reopen_policy(&self) -> ReopenPolicy {
        self.reopen_policy
    }

    /// Flip between open and closed. Reopening applies the reopen policy.
    pub fn toggle(&mut self) -> SessionState {
        self.state = match self.state {
            SessionState::Closed => {
                if self.was_closed && self.reopen_policy == ReopenPolicy::Reset {
                    self.reset();
                }
                info!("Assistant opened ({} messages)", self.transcript.len());
                SessionState::Open
            }
            SessionState::Open => {
                self.was_closed = true;
                info!("Assistant closed");
                SessionState::Closed
            }
        };
        self.state
    }

    /// Replace the pending input buffer.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Submit the pending input. Only accepted while open; a blank buffer is a no-op.
    pub fn submit(&mut self) -> Option<String> {
        if !self.is_open() || self.input.trim().is_empty() {
            return None;
        }
        let text = mem::take(&mut self.input);
        self.turn(&text)
    }

    /// Set the buffer and submit it in one step.
    pub fn send(&mut self, text: &str) -> Option<String> {
        self.set_input(text);
        self.submit()
    }

    /// Drop the history back to the greeting and clear the buffer.
    pub fn reset(&mut self) {
        info!("Conversation reset");
        self.transcript = Transcript::with_greeting(self.greeting.clone());
        self.input.clear();
    }

    fn turn(&mut self, text: &str) -> Option<String> {
        let transcript = mem::take(&mut self.transcript);
        let exchange = self
            .assistant
            .respond(text, transcript, self.picker.as_mut());
        self.transcript = exchange.transcript;
        exchange.reply
    }
}
