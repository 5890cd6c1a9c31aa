//! First-person pronoun counting on the original text

use regex::Regex;
use std::sync::OnceLock;

/// The country abbreviation, never the pronoun "us"
const COUNTRY_ABBREVIATION: &str = "US";

fn pronoun_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)\b(?:i|we|my|ours|us)\b").expect("pronoun pattern is valid")
    })
}

/// Counts `I`, `we`, `my`, `ours` and `us` as whole words
pub struct PronounCounter;

impl PronounCounter {
    /// Case-insensitive whole-word matches, except an exact `US`.
    /// Expects unlowered text so the abbreviation can be told apart.
    pub fn count(text: &str) -> usize {
        pronoun_pattern()
            .find_iter(text)
            .filter(|m| m.as_str() != COUNTRY_ABBREVIATION)
            .count()
    }
}
