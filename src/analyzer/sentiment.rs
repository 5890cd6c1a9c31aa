//! Dictionary sentiment scoring

use super::EPSILON;
use crate::lexicon::Lexicon;

/// Sentiment counts and ratios for one document
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SentimentScores {
    pub positive_score: usize,
    /// Magnitude, never negative
    pub negative_score: usize,
    pub polarity_score: f64,
    pub subjectivity_score: f64,
}

/// Classifies cleaned tokens against a lexicon
pub struct SentimentScorer;

impl SentimentScorer {
    /// Score stop-word-filtered tokens.
    ///
    /// A word listed in both dictionaries counts toward both scores.
    pub fn score<S: AsRef<str>>(tokens: &[S], lexicon: &Lexicon) -> SentimentScores {
        let (positive, negative) = tokens.iter().fold((0usize, 0usize), |(pos, neg), token| {
            let token = token.as_ref();
            (
                pos + usize::from(lexicon.is_positive(token)),
                neg + usize::from(lexicon.is_negative(token)),
            )
        });

        Self::from_counts(positive, negative, tokens.len())
    }

    pub fn from_counts(positive: usize, negative: usize, token_count: usize) -> SentimentScores {
        let (pos, neg) = (positive as f64, negative as f64);
        SentimentScores {
            positive_score: positive,
            negative_score: negative,
            polarity_score: (pos - neg) / (pos + neg + EPSILON),
            subjectivity_score: (pos + neg) / (token_count as f64 + EPSILON),
        }
    }
}
