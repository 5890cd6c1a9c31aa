//! Metrics engine - composes the scorers into one record per document

use crate::{Document, DocumentReport, DocumentStats, Lexicon, MetricsRecord};

use super::{PronounCounter, ReadabilityScorer, SentimentScorer, SyllableCounter, Tokenizer};

/// Engine that scores documents against a shared lexicon.
///
/// Holds no mutable state, so one engine can serve many threads.
pub struct MetricsEngine<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> MetricsEngine<'a> {
    /// Create a new engine over `lexicon`
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        self.lexicon
    }

    /// Compute the metrics record for a document
    pub fn compute(&self, document: &Document) -> MetricsRecord {
        self.analyze(document).metrics
    }

    /// Compute metrics and the counts behind them
    pub fn analyze(&self, document: &Document) -> DocumentReport {
        let text = document.raw_text.as_str();
        let cleaned = Tokenizer::new(self.lexicon).clean(text);

        let sentiment = SentimentScorer::score(&cleaned.tokens, self.lexicon);
        let readability = ReadabilityScorer::score(&cleaned);
        let syllables = SyllableCounter::summarize(&cleaned.tokens);
        let personal_pronoun_count = PronounCounter::count(text);

        let stats = DocumentStats {
            sentence_count: cleaned.sentence_count(),
            cleaned_token_count: cleaned.token_count(),
            syllable_count: syllables.syllables,
            character_count: cleaned.raw_tokens.iter().map(|w| w.chars().count()).sum(),
        };

        tracing::debug!(
            id = %document.id,
            words = cleaned.raw_token_count(),
            cleaned = stats.cleaned_token_count,
            sentences = stats.sentence_count,
            "computed metrics"
        );

        let metrics = MetricsRecord {
            positive_score: sentiment.positive_score,
            negative_score: sentiment.negative_score,
            polarity_score: sentiment.polarity_score,
            subjectivity_score: sentiment.subjectivity_score,
            avg_sentence_length: readability.avg_sentence_length,
            pct_complex_words: readability.pct_complex_words,
            fog_index: readability.fog_index,
            avg_words_per_sentence: readability.avg_words_per_sentence,
            complex_word_count: readability.complex_word_count,
            word_count: cleaned.raw_token_count(),
            syllables_per_word: syllables.per_word(),
            personal_pronoun_count,
            avg_word_length: readability.avg_word_length,
        };

        DocumentReport {
            id: document.id.clone(),
            title: document.title.clone(),
            metrics,
            stats,
        }
    }

    /// Analyze documents sequentially
    pub fn analyze_many(&self, documents: &[Document]) -> Vec<DocumentReport> {
        documents.iter().map(|d| self.analyze(d)).collect()
    }

    /// Analyze documents in parallel using rayon. Output keeps input order.
    pub fn analyze_parallel(&self, documents: &[Document]) -> Vec<DocumentReport> {
        use rayon::prelude::*;

        documents.par_iter().map(|d| self.analyze(d)).collect()
    }

    /// Get aggregate stats from multiple reports
    pub fn aggregate_stats(reports: &[DocumentReport]) -> AggregateStats {
        if reports.is_empty() {
            return AggregateStats::default();
        }

        let n = reports.len() as f64;
        let mean = |f: fn(&MetricsRecord) -> f64| {
            reports.iter().map(|r| f(&r.metrics)).sum::<f64>() / n
        };

        AggregateStats {
            documents_analyzed: reports.len(),
            total_words: reports.iter().map(|r| r.metrics.word_count).sum(),
            mean_polarity: mean(|m| m.polarity_score),
            mean_subjectivity: mean(|m| m.subjectivity_score),
            mean_fog_index: mean(|m| m.fog_index),
        }
    }
}

/// Aggregate statistics over a batch of documents
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateStats {
    /// Number of documents analyzed
    pub documents_analyzed: usize,
    /// Alphabetic words across all documents
    pub total_words: usize,
    pub mean_polarity: f64,
    pub mean_subjectivity: f64,
    pub mean_fog_index: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Lexicon {
        Lexicon::from_words(
            ["love", "great", "wonderful", "growth"],
            ["loss", "decline", "weak"],
            ["this", "it", "is", "and", "the", "a", "of", "in"],
        )
    }

    #[test]
    fn test_compute_scenario() {
        let doc = Document::new("a1", "I love this. It is great and wonderful.");
        let record = MetricsEngine::new(&lexicon()).compute(&doc);

        assert_eq!(record.positive_score, 3);
        assert_eq!(record.negative_score, 0);
        assert!((record.polarity_score - 1.0).abs() < 1e-6);
        // "i" is not a stop word here: i, love, great, wonderful
        assert!((record.subjectivity_score - 0.75).abs() < 1e-6);
        assert_eq!(record.word_count, 8);
        assert_eq!(record.avg_sentence_length, 4.0);
        assert_eq!(record.avg_words_per_sentence, 4.0);
        assert_eq!(record.personal_pronoun_count, 1);
    }

    #[test]
    fn test_cleaned_and_raw_counts_kept_apart() {
        let doc = Document::new("a2", "The growth of the company is great.");
        let report = MetricsEngine::new(&lexicon()).analyze(&doc);

        // raw: the growth of the company is great (7)
        // cleaned: growth company great (3)
        assert_eq!(report.metrics.word_count, 7);
        assert_eq!(report.stats.cleaned_token_count, 3);
        assert!((report.metrics.subjectivity_score - 2.0 / 3.0).abs() < 1e-6);
        assert_eq!(report.metrics.avg_sentence_length, 7.0);
    }

    #[test]
    fn test_syllables_per_word_over_cleaned_tokens() {
        let doc = Document::new("a3", "The elephant is beautiful.");
        let report = MetricsEngine::new(&lexicon()).analyze(&doc);

        // elephant(3) beautiful(3)
        assert_eq!(report.stats.syllable_count, 6);
        assert_eq!(report.metrics.syllables_per_word, 3.0);
        assert_eq!(report.metrics.complex_word_count, 2);
        assert_eq!(report.metrics.pct_complex_words, 0.5);
    }

    #[test]
    fn test_empty_document() {
        let report = MetricsEngine::new(&lexicon()).analyze(&Document::new("empty", ""));
        let m = &report.metrics;

        assert_eq!(report.stats.sentence_count, 1);
        assert_eq!(m.positive_score, 0);
        assert_eq!(m.polarity_score, 0.0);
        assert_eq!(m.subjectivity_score, 0.0);
        assert_eq!(m.fog_index, 0.0);
        assert_eq!(m.word_count, 0);
        assert_eq!(m.complex_word_count, 0);
        assert_eq!(m.syllables_per_word, 0.0);
        assert_eq!(m.avg_word_length, 0.0);
    }

    #[test]
    fn test_report_carries_identity() {
        let doc = Document::new("blackassign0001", "Growth.").with_title("Quarterly outlook");
        let report = MetricsEngine::new(&lexicon()).analyze(&doc);
        assert_eq!(report.id, "blackassign0001");
        assert_eq!(report.title.as_deref(), Some("Quarterly outlook"));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let lex = lexicon();
        let engine = MetricsEngine::new(&lex);
        let docs: Vec<Document> = (0..40)
            .map(|i| {
                Document::new(
                    format!("doc{}", i),
                    "We saw growth. The decline was weak. ".repeat(i % 5 + 1),
                )
            })
            .collect();

        let sequential = engine.analyze_many(&docs);
        let parallel = engine.analyze_parallel(&docs);
        assert_eq!(sequential, parallel);
        assert_eq!(parallel[7].id, "doc7");
    }

    #[test]
    fn test_aggregate_stats() {
        let lex = lexicon();
        let engine = MetricsEngine::new(&lex);
        let reports = engine.analyze_many(&[
            Document::new("a", "great growth"),
            Document::new("b", "weak loss"),
        ]);

        let stats = MetricsEngine::aggregate_stats(&reports);
        assert_eq!(stats.documents_analyzed, 2);
        assert_eq!(stats.total_words, 4);
        assert!(stats.mean_polarity.abs() < 1e-6);
        assert!((stats.mean_subjectivity - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_aggregate_stats_empty() {
        assert_eq!(MetricsEngine::aggregate_stats(&[]), AggregateStats::default());
    }
}
