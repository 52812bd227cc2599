//! Tokenization and lemmatization.

use super::lexicon::Lexicon;

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Lowercase, strip punctuation, split on whitespace, drop stop words.
pub struct Tokenizer<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> Tokenizer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .chars()
            .map(|c| if is_word_char(c) || c.is_whitespace() { c } else { ' ' })
            .collect::<String>()
            .split_whitespace()
            .filter(|token| !self.lexicon.is_stop_word(token))
            .map(str::to_string)
            .collect()
    }

    /// Replace each token by its dictionary form. Output has the input's length.
    pub fn lemmatize(&self, tokens: &[String]) -> Vec<String> {
        tokens
            .iter()
            .map(|token| self.lexicon.lemma(token).to_string())
            .collect()
    }
}
