//! Vowel-group syllable estimate

/// Words with more syllables than this are complex
pub const COMPLEX_WORD_THRESHOLD: usize = 2;

/// Syllable totals over a word list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyllableSummary {
    pub words: usize,
    pub syllables: usize,
    pub complex_words: usize,
}

impl SyllableSummary {
    /// Mean syllables per word, 0 for an empty list
    pub fn per_word(&self) -> f64 {
        if self.words == 0 {
            0.0
        } else {
            self.syllables as f64 / self.words as f64
        }
    }
}

/// Estimates syllables by counting vowel groups
pub struct SyllableCounter;

impl SyllableCounter {
    /// Count maximal runs of `a e i o u`. A word ending in `es` or `ed`
    /// loses the vowel group of that suffix when another group remains.
    /// Never less than 1.
    pub fn count(word: &str) -> usize {
        let mut groups = 0;
        let mut in_group = false;
        for c in word.chars() {
            let vowel = is_vowel(c);
            if vowel && !in_group {
                groups += 1;
            }
            in_group = vowel;
        }

        if groups > 1 && has_silent_suffix(word) {
            groups -= 1;
        }
        groups.max(1)
    }

    pub fn is_complex(word: &str) -> bool {
        Self::count(word) > COMPLEX_WORD_THRESHOLD
    }

    pub fn summarize<S: AsRef<str>>(words: &[S]) -> SyllableSummary {
        words.iter().fold(SyllableSummary::default(), |mut acc, word| {
            let syllables = Self::count(word.as_ref());
            acc.words += 1;
            acc.syllables += syllables;
            if syllables > COMPLEX_WORD_THRESHOLD {
                acc.complex_words += 1;
            }
            acc
        })
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

fn has_silent_suffix(word: &str) -> bool {
    let mut tail = word.chars().rev().map(|c| c.to_ascii_lowercase());
    matches!((tail.next(), tail.next()), (Some('s' | 'd'), Some('e')))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vowel_groups() {
        assert_eq!(SyllableCounter::count("cat"), 1);
        assert_eq!(SyllableCounter::count("table"), 2);
        assert_eq!(SyllableCounter::count("beautiful"), 3);
        assert_eq!(SyllableCounter::count("information"), 4);
    }

    #[test]
    fn test_silent_suffix() {
        // "ea" + "e", suffix group dropped
        assert_eq!(SyllableCounter::count("created"), 1);
        assert_eq!(SyllableCounter::count("boxes"), 1);
        assert_eq!(SyllableCounter::count("decided"), 2);
    }

    #[test]
    fn test_suffix_never_drops_below_one() {
        assert_eq!(SyllableCounter::count("goes"), 1);
        assert_eq!(SyllableCounter::count("ed"), 1);
        assert_eq!(SyllableCounter::count("es"), 1);
    }

    #[test]
    fn test_no_vowels_is_one() {
        assert_eq!(SyllableCounter::count("rhythm"), 1);
        assert_eq!(SyllableCounter::count("tsk"), 1);
        assert_eq!(SyllableCounter::count(""), 1);
    }

    #[test]
    fn test_complex() {
        assert!(SyllableCounter::is_complex("beautiful"));
        assert!(!SyllableCounter::is_complex("table"));
        assert!(!SyllableCounter::is_complex("created"));
    }

    #[test]
    fn test_summarize() {
        let summary = SyllableCounter::summarize(&["cat", "beautiful", "information"]);
        assert_eq!(summary.words, 3);
        assert_eq!(summary.syllables, 8);
        assert_eq!(summary.complex_words, 2);
        assert!((summary.per_word() - 8.0 / 3.0).abs() < 1e-12);

        let empty: [&str; 0] = [];
        assert_eq!(SyllableCounter::summarize(&empty).per_word(), 0.0);
    }
}
