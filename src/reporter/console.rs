//! Console reporter with colored output

use crate::analyzer::AggregateStats;
use crate::{DocumentReport, MetricValue, MetricsRecord};
use colored::{ColoredString, Colorize};

/// Decimal places shown when no precision is configured
const DEFAULT_PRECISION: u32 = 4;

/// Fog index at or above which text reads as hard
const HARD_FOG_INDEX: f64 = 12.0;

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to show verbose output
    verbose: bool,
    /// Decimal places for ratios
    precision: u32,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self {
            verbose: false,
            precision: DEFAULT_PRECISION,
        }
    }

    /// Enable verbose output
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    pub fn with_precision(mut self, places: Option<u32>) -> Self {
        self.precision = places.unwrap_or(DEFAULT_PRECISION);
        self
    }

    /// Report a single document
    pub fn report(&self, report: &DocumentReport) {
        println!("{}", self.render(report));
    }

    /// Report multiple documents with summary
    pub fn report_many(&self, reports: &[DocumentReport], stats: &AggregateStats) {
        for report in reports {
            self.report(report);
            println!("{}", "─".repeat(60));
        }

        println!("{}", self.render_summary(stats));
    }

    /// Report in quiet mode (one line per document)
    pub fn report_quiet(&self, report: &DocumentReport) {
        println!("{}", self.render_quiet(report));
    }

    pub fn render_quiet(&self, report: &DocumentReport) -> String {
        let m = &report.metrics;
        let p = self.precision as usize;
        format!(
            "{}: polarity {:.*} fog {} words {}",
            report.id,
            p,
            m.polarity_score,
            self.colorize_fog(m.fog_index),
            m.word_count
        )
    }

    /// Full block for one document
    pub fn render(&self, report: &DocumentReport) -> String {
        let mut out = String::new();
        out.push('\n');
        out.push_str(&format!("{}", format!("Text Metrics: {}", report.id).bold()));
        out.push('\n');
        if let Some(ref title) = report.title {
            out.push_str(&format!("   Title: {}\n", title));
        }
        out.push_str(&format!(
            "   Sentences: {} | Words: {} | Sentiment words: {}\n\n",
            report.stats.sentence_count,
            report.metrics.word_count,
            report.metrics.positive_score + report.metrics.negative_score
        ));

        let width = MetricsRecord::COLUMNS
            .iter()
            .map(|c| c.len())
            .max()
            .unwrap_or(0);
        let p = self.precision as usize;

        for (column, value) in MetricsRecord::COLUMNS.iter().zip(report.metrics.values()) {
            let cell = match value {
                MetricValue::Count(_) => format!("{}", value),
                MetricValue::Ratio(_) => format!("{:.*}", p, value),
            };
            out.push_str(&format!("   {:<width$}  {}\n", column, cell, width = width));
        }

        if self.verbose {
            out.push_str(&format!(
                "\n   {} cleaned tokens | {} syllables | {} letters\n",
                report.stats.cleaned_token_count,
                report.stats.syllable_count,
                report.stats.character_count
            ));
        }

        out
    }

    pub fn render_summary(&self, stats: &AggregateStats) -> String {
        let p = self.precision as usize;
        format!(
            "\n{}\n   Documents: {} | Words: {}\n   Mean polarity: {:.*} | Mean subjectivity: {:.*} | Mean fog: {}\n",
            "Summary".bold(),
            stats.documents_analyzed,
            stats.total_words,
            p,
            stats.mean_polarity,
            p,
            stats.mean_subjectivity,
            self.colorize_fog(stats.mean_fog_index)
        )
    }

    fn colorize_fog(&self, fog: f64) -> ColoredString {
        let text = format!("{:.*}", self.precision as usize, fog);
        if fog >= HARD_FOG_INDEX {
            text.red()
        } else if fog >= HARD_FOG_INDEX * 0.75 {
            text.yellow()
        } else {
            text.green()
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}
