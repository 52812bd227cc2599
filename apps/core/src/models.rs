use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who sent a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// Represents a single message in a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// The unique identifier for the message.
    pub id: Uuid,
    /// Who wrote the message.
    pub sender: Sender,
    /// The text content of the message.
    pub text: String,
    /// When the message was appended.
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Sender::Assistant, text)
    }
}

/// Ordered, append-only message history of one conversation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// A transcript holding only the assistant's greeting.
    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::assistant(greeting)],
        }
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_starts_with_greeting() {
        let transcript = Transcript::with_greeting("Hello!");
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.messages()[0].sender, Sender::Assistant);
        assert_eq!(transcript.messages()[0].text, "Hello!");
    }

    #[test]
    fn test_transcript_serializes_as_list() {
        let mut transcript = Transcript::with_greeting("Hello!");
        transcript.push(Message::user("hi"));

        let json = serde_json::to_value(&transcript).unwrap();
        let list = json.as_array().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[1]["sender"], "user");
        assert_eq!(list[1]["text"], "hi");

        let back: Transcript = serde_json::from_value(json).unwrap();
        assert_eq!(back, transcript);
    }
}
