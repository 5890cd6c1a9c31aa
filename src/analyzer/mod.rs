//! Analyzer module - linguistic metrics engine

pub mod engine;
pub mod pronouns;
pub mod readability;
pub mod sentiment;
pub mod syllables;
pub mod tokenizer;

pub use engine::{AggregateStats, MetricsEngine};
pub use pronouns::PronounCounter;
pub use readability::{ReadabilityScorer, ReadabilityScores};
pub use sentiment::{SentimentScorer, SentimentScores};
pub use syllables::{SyllableCounter, SyllableSummary};
pub use tokenizer::{CleanedText, Tokenizer};

use crate::{Document, Lexicon, MetricsRecord};

/// Guard added to sentiment denominators so empty documents score 0
pub const EPSILON: f64 = 1e-6;

/// Compute the metrics record for one document
pub fn compute(document: &Document, lexicon: &Lexicon) -> MetricsRecord {
    MetricsEngine::new(lexicon).compute(document)
}
