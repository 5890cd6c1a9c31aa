//! Errors surfaced by lexicon loading

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Word list a lexicon is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordCategory {
    Positive,
    Negative,
    StopWords,
}

impl fmt::Display for WordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordCategory::Positive => write!(f, "positive"),
            WordCategory::Negative => write!(f, "negative"),
            WordCategory::StopWords => write!(f, "stop-word"),
        }
    }
}

/// A required dictionary could not be loaded. Fatal to a run.
#[derive(Debug, Error)]
pub enum DictionaryLoadError {
    #[error("{category} word list is empty")]
    Empty { category: WordCategory },

    #[error("Failed to read {category} word list {}: {source}", .path.display())]
    Unreadable {
        category: WordCategory,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No stop-word files found in {}", .path.display())]
    NoStopWordFiles { path: PathBuf },
}

impl DictionaryLoadError {
    /// Category the failure belongs to
    pub fn category(&self) -> WordCategory {
        match self {
            DictionaryLoadError::Empty { category } => *category,
            DictionaryLoadError::Unreadable { category, .. } => *category,
            DictionaryLoadError::NoStopWordFiles { .. } => WordCategory::StopWords,
        }
    }
}
