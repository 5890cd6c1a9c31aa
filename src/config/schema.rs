//! Config schema and deserialization

use globset::{Glob, GlobSetBuilder};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default master dictionary directory name
pub const DEFAULT_MASTER_DICTIONARY_DIR: &str = "MasterDictionary";
/// Default stop-word directory name
pub const DEFAULT_STOP_WORDS_DIR: &str = "StopWords";

/// Per-path override configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverride {
    /// Glob patterns this override applies to
    pub files: Vec<String>,

    /// Optional fog index ceiling for matched articles
    #[serde(default)]
    pub max_fog_index: Option<f64>,

    /// Whether matched articles start with a title line
    #[serde(default)]
    pub skip_title_line: Option<bool>,
}

/// Root config structure for .textscorerc.json
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Extend another config file (path relative to this config)
    #[serde(default)]
    pub extends: Option<String>,

    /// Directory holding positive-words.txt and negative-words.txt
    #[serde(default)]
    pub master_dictionary_dir: Option<PathBuf>,

    /// Directory whose files are all stop-word lists
    #[serde(default)]
    pub stop_words_dir: Option<PathBuf>,

    /// File suffixes treated as articles (default: .txt)
    #[serde(default)]
    pub article_extensions: Vec<String>,

    /// Glob patterns for files/directories to exclude
    #[serde(default)]
    pub ignore: Vec<String>,

    /// First line of each article is its title. Default: true
    #[serde(default)]
    pub skip_title_line: Option<bool>,

    /// Fail the run (exit 1) when any article's fog index is above this
    #[serde(default)]
    pub max_fog_index: Option<f64>,

    /// Decimal places applied to reported ratios
    #[serde(default)]
    pub precision: Option<u32>,

    /// Per-path configuration overrides
    #[serde(default)]
    pub overrides: Vec<ConfigOverride>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extends: None,
            master_dictionary_dir: None,
            stop_words_dir: None,
            article_extensions: Vec::new(),
            ignore: Vec::new(),
            skip_title_line: None,
            max_fog_index: None,
            precision: None,
            overrides: Vec::new(),
        }
    }
}

impl Config {
    /// Merge CLI overrides into config. CLI values take precedence.
    pub fn merge_with_cli(mut self, cli: CliOverrides) -> Self {
        if cli.master_dictionary_dir.is_some() {
            self.master_dictionary_dir = cli.master_dictionary_dir;
        }
        if cli.stop_words_dir.is_some() {
            self.stop_words_dir = cli.stop_words_dir;
        }
        if cli.max_fog_index.is_some() {
            self.max_fog_index = cli.max_fog_index;
            for o in &mut self.overrides {
                o.max_fog_index = None;
            }
        }
        if cli.precision.is_some() {
            self.precision = cli.precision;
        }
        if cli.keep_title {
            self.skip_title_line = Some(false);
            for o in &mut self.overrides {
                o.skip_title_line = None;
            }
        }
        self
    }

    /// Resolve relative dictionary paths against `base`
    pub(crate) fn anchor_paths(&mut self, base: &Path) {
        for dir in [&mut self.master_dictionary_dir, &mut self.stop_words_dir]
            .into_iter()
            .flatten()
        {
            if dir.is_relative() {
                *dir = base.join(&*dir);
            }
        }
    }

    /// Master dictionary directory, defaulting under `work_dir`
    pub fn master_dictionary_dir(&self, work_dir: &Path) -> PathBuf {
        self.master_dictionary_dir
            .clone()
            .unwrap_or_else(|| work_dir.join(DEFAULT_MASTER_DICTIONARY_DIR))
    }

    /// Stop-word directory, defaulting under `work_dir`
    pub fn stop_words_dir(&self, work_dir: &Path) -> PathBuf {
        self.stop_words_dir
            .clone()
            .unwrap_or_else(|| work_dir.join(DEFAULT_STOP_WORDS_DIR))
    }

    /// Get effective config for a specific article path, applying overrides
    pub fn effective_for_file(&self, file_path: &Path) -> EffectiveConfig {
        let mut effective = EffectiveConfig {
            max_fog_index: self.max_fog_index,
            skip_title_line: self.skip_title_line.unwrap_or(true),
        };

        // Apply matching overrides in order
        for override_cfg in &self.overrides {
            if Self::matches_override(file_path, &override_cfg.files) {
                if let Some(max) = override_cfg.max_fog_index {
                    effective.max_fog_index = Some(max);
                }
                if let Some(skip) = override_cfg.skip_title_line {
                    effective.skip_title_line = skip;
                }
            }
        }

        effective
    }

    /// Check if a file path matches any of the override patterns.
    /// Invalid patterns never match.
    fn matches_override(file_path: &Path, patterns: &[String]) -> bool {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            match Glob::new(pattern) {
                Ok(glob) => {
                    builder.add(glob);
                }
                Err(e) => tracing::warn!(pattern = %pattern, error = %e, "invalid override pattern"),
            }
        }
        builder
            .build()
            .map(|set| set.is_match(file_path))
            .unwrap_or(false)
    }

    /// Merge another config into this one (for extends)
    pub fn merge_from(&mut self, base: Config) {
        // Base values are overridden by this config's values
        if self.extends.is_none() {
            self.extends = base.extends;
        }
        if self.master_dictionary_dir.is_none() {
            self.master_dictionary_dir = base.master_dictionary_dir;
        }
        if self.stop_words_dir.is_none() {
            self.stop_words_dir = base.stop_words_dir;
        }
        if self.article_extensions.is_empty() {
            self.article_extensions = base.article_extensions;
        }
        if self.skip_title_line.is_none() {
            self.skip_title_line = base.skip_title_line;
        }
        if self.max_fog_index.is_none() {
            self.max_fog_index = base.max_fog_index;
        }
        if self.precision.is_none() {
            self.precision = base.precision;
        }

        // Merge ignore patterns
        let mut all_ignores = base.ignore;
        all_ignores.append(&mut self.ignore);
        self.ignore = all_ignores;

        // Prepend base overrides
        let mut all_overrides = base.overrides;
        all_overrides.append(&mut self.overrides);
        self.overrides = all_overrides;
    }

    /// Get article file suffixes
    pub fn get_article_extensions(&self) -> Vec<&str> {
        if self.article_extensions.is_empty() {
            vec![".txt"]
        } else {
            self.article_extensions.iter().map(|s| s.as_str()).collect()
        }
    }
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub master_dictionary_dir: Option<PathBuf>,
    pub stop_words_dir: Option<PathBuf>,
    pub max_fog_index: Option<f64>,
    pub precision: Option<u32>,
    pub keep_title: bool,
}

/// Effective configuration for a specific article (after applying overrides)
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveConfig {
    pub max_fog_index: Option<f64>,
    pub skip_title_line: bool,
}
