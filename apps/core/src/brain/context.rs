//! Context analysis: question type, urgency, complexity and topics.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::LazyLock;

use super::lexicon::Lexicon;

/// More words than this makes a message highly complex
const HIGH_WORDS: usize = 20;
/// More sentences than this makes a message highly complex
const HIGH_SENTENCES: usize = 2;
const MEDIUM_WORDS: usize = 10;
const MEDIUM_SENTENCES: usize = 1;

// NOTE: expect() is acceptable here: the patterns are compile-time constants.
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));
static TERMINATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("Invalid terminator regex"));

/// Leading question word of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    What,
    How,
    When,
    Where,
    Why,
    Which,
    Can,
    None,
}

impl QuestionType {
    /// Detection order; the first match wins.
    pub const PRIORITY: [QuestionType; 7] = [
        QuestionType::What,
        QuestionType::How,
        QuestionType::When,
        QuestionType::Where,
        QuestionType::Why,
        QuestionType::Which,
        QuestionType::Can,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            QuestionType::What => "what",
            QuestionType::How => "how",
            QuestionType::When => "when",
            QuestionType::Where => "where",
            QuestionType::Why => "why",
            QuestionType::Which => "which",
            QuestionType::Can => "can",
            QuestionType::None => "none",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicTag {
    Technology,
    Shopping,
    Support,
    Products,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    pub question_type: QuestionType,
    pub urgency: Level,
    pub complexity: Level,
    pub topics: BTreeSet<TopicTag>,
}

pub struct ContextAnalyzer<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> ContextAnalyzer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    fn question_type(&self, text: &str) -> QuestionType {
        self.lexicon
            .question_types()
            .iter()
            .find(|(_, pattern)| pattern.is_match(text))
            .map(|(kind, _)| *kind)
            .unwrap_or(QuestionType::None)
    }

    fn urgency(&self, text: &str) -> Level {
        let lower = text.to_lowercase();
        let urgent_word = self
            .lexicon
            .urgency_words()
            .iter()
            .any(|w| lower.contains(w.as_str()));

        if urgent_word || text.contains('!') {
            Level::High
        } else if text.contains('?') {
            Level::Medium
        } else {
            Level::Low
        }
    }

    fn complexity(text: &str) -> Level {
        // Separator runs plus one, so leading, trailing and empty pieces all count.
        let words = WHITESPACE_RUN.find_iter(text).count() + 1;
        let sentences = TERMINATOR_RUN.find_iter(text).count() + 1;

        if words > HIGH_WORDS || sentences > HIGH_SENTENCES {
            Level::High
        } else if words > MEDIUM_WORDS || sentences > MEDIUM_SENTENCES {
            Level::Medium
        } else {
            Level::Low
        }
    }

    fn topics(&self, text: &str) -> BTreeSet<TopicTag> {
        let lower = text.to_lowercase();
        self.lexicon
            .topics()
            .iter()
            .filter(|(_, keywords)| keywords.iter().any(|k| lower.contains(k.as_str())))
            .map(|(topic, _)| *topic)
            .collect()
    }

    pub fn analyze(&self, text: &str) -> Context {
        Context {
            question_type: self.question_type(text),
            urgency: self.urgency(text),
            complexity: Self::complexity(text),
            topics: self.topics(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_type_priority() {
        let lexicon = Lexicon::builtin();
        let analyzer = ContextAnalyzer::new(&lexicon);

        assert_eq!(analyzer.analyze("How much and WHAT color").question_type, QuestionType::What);
        assert_eq!(analyzer.analyze("can you ship it").question_type, QuestionType::Can);
        assert_eq!(analyzer.analyze("Which one?").question_type, QuestionType::Which);
        // whole words only
        assert_eq!(analyzer.analyze("somewhat canned").question_type, QuestionType::None);
    }

    #[test]
    fn test_urgency_levels() {
        let lexicon = Lexicon::builtin();
        let analyzer = ContextAnalyzer::new(&lexicon);

        assert_eq!(analyzer.analyze("I need it ASAP").urgency, Level::High);
        assert_eq!(analyzer.analyze("wow").urgency, Level::Low);
        assert_eq!(analyzer.analyze("wow!").urgency, Level::High);
        assert_eq!(analyzer.analyze("is it in stock?").urgency, Level::Medium);
        // substring match: "know" contains "now", "breakfast" contains "fast"
        assert_eq!(analyzer.analyze("I know the answer").urgency, Level::High);
        assert_eq!(analyzer.analyze("breakfast table").urgency, Level::High);
        // "quickly" and "urgently" are covered by their stems
        assert_eq!(analyzer.analyze("ship it quickly").urgency, Level::High);
    }

    #[test]
    fn test_complexity_buckets() {
        let lexicon = Lexicon::builtin();
        let analyzer = ContextAnalyzer::new(&lexicon);

        assert_eq!(analyzer.analyze("hi").complexity, Level::Low);
        // a trailing terminator still opens an empty segment
        assert_eq!(analyzer.analyze("hello?").complexity, Level::Medium);
        assert_eq!(analyzer.analyze("Hi. I need a phone").complexity, Level::Medium);
        assert_eq!(analyzer.analyze("Hi. I need a phone.").complexity, Level::High);
        assert_eq!(analyzer.analyze("what?!").complexity, Level::Medium);
        assert_eq!(
            analyzer.analyze("one two three four five six seven eight nine ten eleven").complexity,
            Level::Medium
        );
        assert_eq!(analyzer.analyze("A. B. C.").complexity, Level::High);
    }

    #[test]
    fn test_word_count_includes_edge_whitespace() {
        let lexicon = Lexicon::builtin();
        let analyzer = ContextAnalyzer::new(&lexicon);

        // ten words alone stay low, surrounding spaces add empty pieces
        let ten = "one two three four five six seven eight nine ten";
        assert_eq!(analyzer.analyze(ten).complexity, Level::Low);
        assert_eq!(analyzer.analyze(&format!(" {}", ten)).complexity, Level::Medium);
        assert_eq!(analyzer.analyze(&format!("{} ", ten)).complexity, Level::Medium);
    }

    #[test]
    fn test_topics_are_non_exclusive() {
        let lexicon = Lexicon::builtin();
        let analyzer = ContextAnalyzer::new(&lexicon);

        let topics = analyzer.analyze("what is the best expensive premium phone").topics;
        assert!(topics.contains(&TopicTag::Shopping));
        assert!(topics.contains(&TopicTag::Products));

        let topics = analyzer.analyze("help me buy bluetooth headphones").topics;
        assert_eq!(topics.len(), 4);
    }
}
