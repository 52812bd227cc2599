//! Test Module
//!
//! Cross-module test suite for the REX assistant core.
//!
//! ## Test Categories
//! - `brain_tests`: tokenization, entities, intents, sentiment, context, confidence fusion
//! - `reply_tests`: tiered dispatch, reply handlers, fallback chain, variant picking
//! - `session_tests`: open/close state machine, input buffer, reopen policy
//! - `config_tests`: environment-driven configuration and JSON lexicons
//! - `integration_tests`: full turns through `respond`

pub mod reply_tests;
pub mod session_tests;
