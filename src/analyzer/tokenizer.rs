//! Sentence splitting and word cleaning

use crate::lexicon::Lexicon;

/// Characters that end a sentence
const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Tokenizer output for one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanedText {
    /// Non-blank sentence fragments in order of appearance
    pub sentences: Vec<String>,
    /// Lower-cased alphabetic words with stop words removed
    pub tokens: Vec<String>,
    /// Lower-cased alphabetic words before stop-word removal
    pub raw_tokens: Vec<String>,
}

impl CleanedText {
    /// Sentence count floored at 1, so text without any terminator is one sentence
    pub fn sentence_count(&self) -> usize {
        self.sentences.len().max(1)
    }

    /// Words used for readability ratios
    pub fn raw_token_count(&self) -> usize {
        self.raw_tokens.len()
    }

    /// Words used for sentiment ratios
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}

/// Splits text into sentences and stop-word-filtered tokens
pub struct Tokenizer<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> Tokenizer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn clean(&self, text: &str) -> CleanedText {
        let sentences = split_sentences(text);
        let raw_tokens = extract_words(text);
        let tokens = raw_tokens
            .iter()
            .filter(|word| !self.lexicon.is_stopword(word))
            .cloned()
            .collect();

        CleanedText {
            sentences,
            tokens,
            raw_tokens,
        }
    }
}

/// Split on `.`, `!` and `?`. Fragments without any letter or digit are
/// dropped; a trailing fragment without a terminator still counts.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.split(&SENTENCE_TERMINATORS[..])
        .map(str::trim)
        .filter(|fragment| fragment.chars().any(char::is_alphanumeric))
        .map(String::from)
        .collect()
}

/// Split on whitespace and punctuation, keep purely alphabetic pieces,
/// lower-case them. `abc123` is one piece and is dropped whole.
///
/// An apostrophe inside a word ends it and the clitic after it is dropped,
/// so `CEO's` gives `ceo` and `didn't` gives `didn`.
pub fn extract_words(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || is_apostrophe(c)))
        .map(|piece| piece.trim_matches(is_apostrophe))
        .filter_map(|piece| piece.split(is_apostrophe).next())
        .filter(|piece| !piece.is_empty() && piece.chars().all(char::is_alphabetic))
        .map(str::to_lowercase)
        // Some letters lower-case to a base letter plus a combining mark
        .filter(|word| word.chars().all(char::is_alphabetic))
        .collect()
}

fn is_apostrophe(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}')
}
