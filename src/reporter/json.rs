//! JSON reporter for machine-readable output

use crate::analyzer::AggregateStats;
use crate::DocumentReport;
use serde::Serialize;
use std::borrow::Cow;

/// Reporter for JSON output
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
    /// Decimal places for ratio fields
    precision: Option<u32>,
}

impl JsonReporter {
    /// Create a new JSON reporter
    pub fn new() -> Self {
        Self {
            pretty: false,
            precision: None,
        }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Round ratio fields to `places` decimals
    pub fn with_precision(mut self, places: Option<u32>) -> Self {
        self.precision = places;
        self
    }

    /// Report a single document as JSON
    pub fn report(&self, report: &DocumentReport) -> String {
        self.render(&self.prepare(report), "{}")
    }

    /// Report with summary
    pub fn report_with_summary(&self, reports: &[DocumentReport], stats: &AggregateStats) -> String {
        let results: Vec<_> = reports.iter().map(|r| self.prepare(r)).collect();
        let output = JsonOutput {
            results,
            summary: JsonSummary {
                documents_analyzed: stats.documents_analyzed,
                total_words: stats.total_words,
                mean_polarity: self.round(stats.mean_polarity),
                mean_subjectivity: self.round(stats.mean_subjectivity),
                mean_fog_index: self.round(stats.mean_fog_index),
            },
        };
        self.render(&output, "{}")
    }

    fn prepare<'a>(&self, report: &'a DocumentReport) -> Cow<'a, DocumentReport> {
        match self.precision {
            Some(places) => {
                let mut rounded = report.clone();
                rounded.metrics = report.metrics.rounded(places);
                Cow::Owned(rounded)
            }
            None => Cow::Borrowed(report),
        }
    }

    fn round(&self, value: f64) -> f64 {
        match self.precision {
            Some(places) => crate::round_to(value, places),
            None => value,
        }
    }

    fn render<T: Serialize + ?Sized>(&self, value: &T, fallback: &str) -> String {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        rendered.unwrap_or_else(|_| fallback.to_string())
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    results: Vec<Cow<'a, DocumentReport>>,
    summary: JsonSummary,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSummary {
    documents_analyzed: usize,
    total_words: usize,
    mean_polarity: f64,
    mean_subjectivity: f64,
    mean_fog_index: f64,
}
