//! Positive, negative and stop-word dictionaries
//!
//! A [`Lexicon`] is built once per run and shared read-only afterwards.
//! Every entry is lower-cased on the way in; duplicates collapse.

use crate::error::{DictionaryLoadError, WordCategory};
use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Positive word list file inside the master dictionary directory
pub const POSITIVE_WORDS_FILE: &str = "positive-words.txt";
/// Negative word list file inside the master dictionary directory
pub const NEGATIVE_WORDS_FILE: &str = "negative-words.txt";

/// Immutable triad of word sets used to score text
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
    stopwords: HashSet<String>,
}

impl Lexicon {
    /// Parse three raw word lists.
    ///
    /// Each line is cut at the first `|`, lines starting with `;` are
    /// comments, and what remains is split on whitespace. Fails when any
    /// category ends up with no words.
    pub fn load(
        positive_words: &str,
        negative_words: &str,
        stopwords: &str,
    ) -> Result<Self, DictionaryLoadError> {
        let lexicon = Self {
            positive: parse_word_list(positive_words),
            negative: parse_word_list(negative_words),
            stopwords: parse_word_list(stopwords),
        };
        lexicon.validate()?;
        Ok(lexicon)
    }

    /// Build a lexicon from word iterators without the non-empty check.
    /// Intended for fixtures and callers that already hold clean sets.
    pub fn from_words<P, N, S>(positive: P, negative: N, stopwords: S) -> Self
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        Self {
            positive: normalize(positive),
            negative: normalize(negative),
            stopwords: normalize(stopwords),
        }
    }

    /// Load `positive-words.txt` and `negative-words.txt` from
    /// `master_dict_dir` and every file in `stopwords_dir`.
    pub fn from_dirs(
        master_dict_dir: &Path,
        stopwords_dir: &Path,
    ) -> Result<Self, DictionaryLoadError> {
        let positive = read_word_file(
            &master_dict_dir.join(POSITIVE_WORDS_FILE),
            WordCategory::Positive,
        )?;
        let negative = read_word_file(
            &master_dict_dir.join(NEGATIVE_WORDS_FILE),
            WordCategory::Negative,
        )?;

        let mut stopwords = String::new();
        for path in stopword_files(stopwords_dir)? {
            stopwords.push_str(&read_word_file(&path, WordCategory::StopWords)?);
            stopwords.push('\n');
        }

        let lexicon = Self::load(&positive, &negative, &stopwords)?;
        tracing::debug!(
            positive = lexicon.positive.len(),
            negative = lexicon.negative.len(),
            stopwords = lexicon.stopwords.len(),
            "loaded lexicon"
        );
        Ok(lexicon)
    }

    fn validate(&self) -> Result<(), DictionaryLoadError> {
        for (category, set) in [
            (WordCategory::Positive, &self.positive),
            (WordCategory::Negative, &self.negative),
            (WordCategory::StopWords, &self.stopwords),
        ] {
            if set.is_empty() {
                return Err(DictionaryLoadError::Empty { category });
            }
        }
        Ok(())
    }

    /// Expects a lower-cased word
    pub fn is_positive(&self, word: &str) -> bool {
        self.positive.contains(word)
    }

    /// Expects a lower-cased word
    pub fn is_negative(&self, word: &str) -> bool {
        self.negative.contains(word)
    }

    /// Expects a lower-cased word
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    pub fn positive_len(&self) -> usize {
        self.positive.len()
    }

    pub fn negative_len(&self) -> usize {
        self.negative.len()
    }

    pub fn stopword_len(&self) -> usize {
        self.stopwords.len()
    }

    /// Words listed as both positive and negative, sorted.
    /// They are scored in both categories; nothing here removes them.
    pub fn overlap(&self) -> Vec<&str> {
        let words: BTreeSet<&str> = self
            .positive
            .intersection(&self.negative)
            .map(String::as_str)
            .collect();
        words.into_iter().collect()
    }
}

fn normalize<I>(words: I) -> HashSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    words
        .into_iter()
        .map(|w| w.as_ref().trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

fn parse_word_list(content: &str) -> HashSet<String> {
    content
        .lines()
        .map(|line| line.split('|').next().unwrap_or_default().trim())
        .filter(|line| !line.is_empty() && !line.starts_with(';'))
        .flat_map(str::split_whitespace)
        .map(str::to_lowercase)
        .collect()
}

fn read_word_file(path: &Path, category: WordCategory) -> Result<String, DictionaryLoadError> {
    let bytes = fs::read(path).map_err(|source| DictionaryLoadError::Unreadable {
        category,
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decode_word_list(bytes))
}

/// UTF-8, falling back to Latin-1 (every byte maps to one char)
fn decode_word_list(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => err.into_bytes().into_iter().map(char::from).collect(),
    }
}

fn stopword_files(dir: &Path) -> Result<Vec<PathBuf>, DictionaryLoadError> {
    let unreadable = |source: std::io::Error| DictionaryLoadError::Unreadable {
        category: WordCategory::StopWords,
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(unreadable)? {
        let path = entry.map_err(unreadable)?.path();
        if path.is_file() {
            files.push(path);
        }
    }

    if files.is_empty() {
        return Err(DictionaryLoadError::NoStopWordFiles {
            path: dir.to_path_buf(),
        });
    }

    // Sort for a deterministic read order
    files.sort();
    Ok(files)
}
