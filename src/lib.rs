//! Textscore: sentiment and readability metrics for article text
//!
//! This library turns raw article text into a fixed set of numeric scores:
//! dictionary-based sentiment (polarity, subjectivity), Gunning fog
//! readability, and word, syllable and pronoun statistics.
//!
//! ```
//! use textscore::{compute, Document, Lexicon};
//!
//! let lexicon = Lexicon::from_words(["love", "great"], ["awful"], ["it", "is", "this"]);
//! let record = compute(&Document::new("a1", "I love this. It is great."), &lexicon);
//! assert_eq!(record.positive_score, 2);
//! assert_eq!(record.personal_pronoun_count, 1);
//! ```

pub mod analyzer;
pub mod config;
pub mod corpus;
pub mod error;
pub mod lexicon;
pub mod reporter;

pub use analyzer::{compute, MetricsEngine};
pub use error::DictionaryLoadError;
pub use lexicon::Lexicon;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A unit of input text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Caller-assigned identifier (the article file stem for corpus loads)
    pub id: String,
    /// Title line, kept apart from the scored text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Text that is scored
    pub raw_text: String,
}

impl Document {
    pub fn new(id: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            raw_text: raw_text.into(),
        }
    }

    /// Attach a title line
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// The fixed-shape metrics produced for one document.
///
/// Field order is the output column order and must stay stable; see
/// [`MetricsRecord::COLUMNS`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsRecord {
    /// Cleaned tokens found in the positive dictionary
    pub positive_score: usize,
    /// Cleaned tokens found in the negative dictionary
    pub negative_score: usize,
    /// (pos - neg) / (pos + neg + ε), in [-1, 1]
    pub polarity_score: f64,
    /// (pos + neg) / (cleaned tokens + ε)
    pub subjectivity_score: f64,
    /// Words per sentence
    pub avg_sentence_length: f64,
    /// Fraction of words with more than two syllables, in [0, 1]
    pub pct_complex_words: f64,
    /// 0.4 * (avg sentence length + complex fraction)
    pub fog_index: f64,
    /// Same value as `avg_sentence_length`
    pub avg_words_per_sentence: f64,
    pub complex_word_count: usize,
    /// Alphabetic words before stop-word removal
    pub word_count: usize,
    /// Mean syllables over cleaned tokens
    pub syllables_per_word: f64,
    pub personal_pronoun_count: usize,
    /// Mean characters per word
    pub avg_word_length: f64,
}

impl MetricsRecord {
    /// Column headers expected by tabular consumers, in field order
    pub const COLUMNS: [&'static str; 13] = [
        "POSITIVE SCORE",
        "NEGATIVE SCORE",
        "POLARITY SCORE",
        "SUBJECTIVITY SCORE",
        "AVG SENTENCE LENGTH",
        "PERCENTAGE OF COMPLEX WORDS",
        "FOG INDEX",
        "AVG NUMBER OF WORDS PER SENTENCE",
        "COMPLEX WORD COUNT",
        "WORD COUNT",
        "SYLLABLE PER WORD",
        "PERSONAL PRONOUNS",
        "AVG WORD LENGTH",
    ];

    /// Row values in [`Self::COLUMNS`] order
    pub fn values(&self) -> [MetricValue; 13] {
        use MetricValue::{Count, Ratio};
        [
            Count(self.positive_score),
            Count(self.negative_score),
            Ratio(self.polarity_score),
            Ratio(self.subjectivity_score),
            Ratio(self.avg_sentence_length),
            Ratio(self.pct_complex_words),
            Ratio(self.fog_index),
            Ratio(self.avg_words_per_sentence),
            Count(self.complex_word_count),
            Count(self.word_count),
            Ratio(self.syllables_per_word),
            Count(self.personal_pronoun_count),
            Ratio(self.avg_word_length),
        ]
    }

    /// Copy with every float field rounded half away from zero
    pub fn rounded(&self, places: u32) -> Self {
        let r = |value: f64| round_to(value, places);
        Self {
            polarity_score: r(self.polarity_score),
            subjectivity_score: r(self.subjectivity_score),
            avg_sentence_length: r(self.avg_sentence_length),
            pct_complex_words: r(self.pct_complex_words),
            fog_index: r(self.fog_index),
            avg_words_per_sentence: r(self.avg_words_per_sentence),
            syllables_per_word: r(self.syllables_per_word),
            avg_word_length: r(self.avg_word_length),
            ..self.clone()
        }
    }
}

pub(crate) fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places.min(15) as i32);
    (value * factor).round() / factor
}

/// A single cell of a metrics row
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Count(usize),
    Ratio(f64),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Count(n) => write!(f, "{}", n),
            MetricValue::Ratio(x) => match f.precision() {
                Some(p) => write!(f, "{:.*}", p, x),
                None => write!(f, "{}", x),
            },
        }
    }
}

/// Intermediate counts behind a [`MetricsRecord`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentStats {
    /// Sentences, floored at 1
    pub sentence_count: usize,
    /// Tokens left after stop-word removal
    pub cleaned_token_count: usize,
    /// Syllables over the cleaned tokens
    pub syllable_count: usize,
    /// Letters over all alphabetic words
    pub character_count: usize,
}

/// Metrics for one document together with the document identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentReport {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub metrics: MetricsRecord,
    pub stats: DocumentStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MetricsRecord {
        MetricsRecord {
            positive_score: 3,
            negative_score: 1,
            polarity_score: 0.499_999_875,
            subjectivity_score: 0.571_428_489_8,
            avg_sentence_length: 4.5,
            pct_complex_words: 0.111_111,
            fog_index: 1.844_444_4,
            avg_words_per_sentence: 4.5,
            complex_word_count: 1,
            word_count: 9,
            syllables_per_word: 1.714_285_7,
            personal_pronoun_count: 2,
            avg_word_length: 4.333_333,
        }
    }

    #[test]
    fn test_columns_match_value_order() {
        let record = sample();
        let values = record.values();
        assert_eq!(values.len(), MetricsRecord::COLUMNS.len());
        assert_eq!(values[0], MetricValue::Count(3));
        assert_eq!(values[9], MetricValue::Count(9));
        assert_eq!(values[12], MetricValue::Ratio(4.333_333));
        assert_eq!(MetricsRecord::COLUMNS[7], "AVG NUMBER OF WORDS PER SENTENCE");
    }

    #[test]
    fn test_rounded_keeps_counts() {
        let rounded = sample().rounded(2);
        assert_eq!(rounded.polarity_score, 0.5);
        assert_eq!(rounded.fog_index, 1.84);
        assert_eq!(rounded.avg_word_length, 4.33);
        assert_eq!(rounded.word_count, 9);
        assert_eq!(rounded.personal_pronoun_count, 2);
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        assert_eq!(round_to(-0.125, 2), -0.13);
        assert_eq!(round_to(2.5, 0), 3.0);
    }

    #[test]
    fn test_metric_value_display() {
        assert_eq!(format!("{}", MetricValue::Count(7)), "7");
        assert_eq!(format!("{:.2}", MetricValue::Ratio(1.0 / 3.0)), "0.33");
    }

    #[test]
    fn test_record_serializes_in_column_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        let pos = json.find("positiveScore").unwrap();
        let fog = json.find("fogIndex").unwrap();
        let awl = json.find("avgWordLength").unwrap();
        assert!(pos < fog && fog < awl);
    }
}
