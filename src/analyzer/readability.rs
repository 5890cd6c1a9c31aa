//! Gunning fog readability metrics
//!
//! Every ratio here is taken over all alphabetic words of the document,
//! stop words included. Only sentiment works on the filtered list.

use super::syllables::SyllableCounter;
use super::tokenizer::CleanedText;

/// Weight applied to the fog index sum
const FOG_WEIGHT: f64 = 0.4;

/// Readability metrics for one document
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReadabilityScores {
    pub avg_sentence_length: f64,
    pub pct_complex_words: f64,
    pub fog_index: f64,
    pub avg_words_per_sentence: f64,
    pub complex_word_count: usize,
    pub avg_word_length: f64,
}

/// Derives sentence-length, complex-word and fog metrics
pub struct ReadabilityScorer;

impl ReadabilityScorer {
    pub fn score(cleaned: &CleanedText) -> ReadabilityScores {
        let complex_words = SyllableCounter::summarize(&cleaned.raw_tokens).complex_words;
        let characters = cleaned
            .raw_tokens
            .iter()
            .map(|w| w.chars().count())
            .sum();

        Self::from_counts(
            cleaned.sentence_count(),
            cleaned.raw_token_count(),
            complex_words,
            characters,
        )
    }

    /// `sentence_count` is floored at 1; word ratios are 0 without words.
    pub fn from_counts(
        sentence_count: usize,
        word_count: usize,
        complex_word_count: usize,
        character_count: usize,
    ) -> ReadabilityScores {
        let avg_sentence_length = word_count as f64 / sentence_count.max(1) as f64;
        let per_word = |n: usize| {
            if word_count == 0 {
                0.0
            } else {
                n as f64 / word_count as f64
            }
        };
        let pct_complex_words = per_word(complex_word_count);

        ReadabilityScores {
            avg_sentence_length,
            pct_complex_words,
            fog_index: FOG_WEIGHT * (avg_sentence_length + pct_complex_words),
            avg_words_per_sentence: avg_sentence_length,
            complex_word_count,
            avg_word_length: per_word(character_count),
        }
    }
}
