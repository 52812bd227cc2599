//! Session Tests
//!
//! Open/closed transitions, the pending-input buffer and the reopen policy.

use crate::assistant::Assistant;
use crate::config::{AssistantConfig, ReopenPolicy, DEFAULT_GREETING};
use crate::models::Sender;
use crate::reply::{RngPicker, ScriptedPicker};
use crate::session::{ConversationSession, SessionState};
use std::sync::Arc;

fn open_session(policy: ReopenPolicy) -> ConversationSession {
    let mut session = ConversationSession::new(
        Arc::new(Assistant::default()),
        DEFAULT_GREETING,
        policy,
        Box::new(ScriptedPicker::first()),
    );
    session.toggle();
    session
}

#[cfg(test)]
mod turn_tests {
    use super::*;

    #[test]
    fn test_send_appends_user_then_assistant() {
        let mut session = open_session(ReopenPolicy::Preserve);
        let reply = session.send("I need headphones").expect("reply expected");

        let messages = session.transcript().messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].text, DEFAULT_GREETING);
        assert_eq!(messages[1].sender, Sender::User);
        assert_eq!(messages[1].text, "I need headphones");
        assert_eq!(messages[2].sender, Sender::Assistant);
        assert_eq!(messages[2].text, reply);
        assert!(messages[1].timestamp <= messages[2].timestamp);
        assert_ne!(messages[1].id, messages[2].id);
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut session = open_session(ReopenPolicy::Preserve);

        assert_eq!(session.send(""), None);
        assert_eq!(session.send("   \t "), None);
        assert_eq!(session.transcript().len(), 1);
    }

    #[test]
    fn test_submit_clears_buffer() {
        let mut session = open_session(ReopenPolicy::Preserve);
        session.set_input("hi");
        assert_eq!(session.input(), "hi");

        assert!(session.submit().is_some());
        assert_eq!(session.input(), "");
        // the emptied buffer submits nothing
        assert_eq!(session.submit(), None);
        assert_eq!(session.transcript().len(), 3);
    }

    #[test]
    fn test_closed_session_rejects_turns() {
        let mut session = open_session(ReopenPolicy::Preserve);
        assert_eq!(session.toggle(), SessionState::Closed);
        assert!(!session.is_open());

        assert_eq!(session.send("hi"), None);
        assert_eq!(session.transcript().len(), 1);
    }
}

#[cfg(test)]
mod reopen_tests {
    use super::*;

    #[test]
    fn test_preserve_keeps_history() {
        let mut session = open_session(ReopenPolicy::Preserve);
        session.send("hi");
        session.toggle();
        session.toggle();

        assert!(session.is_open());
        assert_eq!(session.transcript().len(), 3);
    }

    #[test]
    fn test_reset_restores_greeting() {
        let mut session = open_session(ReopenPolicy::Reset);
        session.send("hi");
        assert_eq!(session.transcript().len(), 3);

        session.toggle();
        // history stays visible until the widget opens again
        assert_eq!(session.transcript().len(), 3);

        session.toggle();
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.transcript().messages()[0].sender, Sender::Assistant);
        assert_eq!(session.transcript().messages()[0].text, DEFAULT_GREETING);
    }

    #[test]
    fn test_explicit_reset() {
        let mut session = open_session(ReopenPolicy::Preserve);
        session.send("hi");
        session.set_input("half typed");

        session.reset();
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.input(), "");
        assert!(session.is_open());
    }
}

#[cfg(test)]
mod seeded_tests {
    use super::*;

    #[test]
    fn test_seeded_sessions_agree() {
        let inputs = [
            "tell me about your store today",
            "ok",
            "I need headphones",
            "tell me about your store today",
            "hi",
        ];

        let run = || {
            let mut session = ConversationSession::new(
                Arc::new(Assistant::default()),
                DEFAULT_GREETING,
                ReopenPolicy::Preserve,
                Box::new(RngPicker::seeded(2024)),
            );
            session.toggle();
            inputs
                .iter()
                .filter_map(|text| session.send(text))
                .collect::<Vec<_>>()
        };

        assert_eq!(run(), run());
    }

    #[test]
    fn test_from_config_uses_greeting_and_policy() {
        let config = AssistantConfig {
            greeting: "Welcome back!".to_string(),
            reopen_policy: ReopenPolicy::Reset,
            ..Default::default()
        };
        let session = ConversationSession::from_config(&config).unwrap();

        assert_eq!(session.state(), SessionState::Closed);
        assert_eq!(session.reopen_policy(), ReopenPolicy::Reset);
        assert_eq!(session.transcript().messages()[0].text, "Welcome back!");
    }
}
