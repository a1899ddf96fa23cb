//! Stopword sets
//!
//! Built-in lists are the NLTK lists shipped by the `stop-words` crate. A set
//! can also be read from a one-word-per-line file or given as an explicit
//! list. Matching is
//! exact and case-sensitive; the pipeline lower-cases text before it gets here.

use crate::errors::{PreprocessError, Result};
use rustc_hash::FxHashSet;
use std::path::Path;
use stop_words::{get, LANGUAGE};

/// A read-only set of stopwords
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwordSet {
    words: FxHashSet<String>,
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self {
            words: Self::built_in(LANGUAGE::English),
        }
    }
}

impl StopwordSet {
    /// Load the built-in stopword list for a language code.
    ///
    /// Supported languages: en, de, fr, es, it, pt, nl, ru, sv, no, da, fi,
    /// hu, tr, ar. Anything else is `ResourceUnavailable`.
    pub fn for_language(language: &str) -> Result<Self> {
        let lang = Self::parse_language(language).ok_or_else(|| {
            PreprocessError::resource_unavailable(
                "stopwords",
                format!("no built-in stopword list for language '{language}'"),
            )
        })?;
        Ok(Self {
            words: Self::built_in(lang),
        })
    }

    /// Create an empty set (no filtering)
    pub fn empty() -> Self {
        Self {
            words: FxHashSet::default(),
        }
    }

    /// Create a set from an explicit list. Words are stored verbatim.
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Read a one-word-per-line file. Blank lines are skipped.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            PreprocessError::resource_unavailable(
                format!("stopwords file {}", path.display()),
                e.to_string(),
            )
        })?;
        let words: FxHashSet<String> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        log::debug!("Loaded {} stopwords from {}", words.len(), path.display());
        Ok(Self { words })
    }

    /// Add words to the set
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.words.insert(word.as_ref().to_string());
        }
    }

    /// Remove words from the set
    pub fn remove<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.words.remove(word.as_ref());
        }
    }

    /// Check if a token is a stopword (exact match)
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Keep the tokens that are not stopwords, in order
    pub fn filter_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        tokens
            .iter()
            .map(AsRef::as_ref)
            .filter(|token| !self.contains(token))
            .map(str::to_string)
            .collect()
    }

    /// Sorted copy of the words, for display and bindings
    pub fn to_sorted_vec(&self) -> Vec<String> {
        let mut words: Vec<String> = self.words.iter().cloned().collect();
        words.sort();
        words
    }

    /// Get the number of stopwords in the set
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn parse_language(language: &str) -> Option<LANGUAGE> {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "ar" | "arabic" => LANGUAGE::Arabic,
            _ => return None,
        };
        Some(lang)
    }

    fn built_in(lang: LANGUAGE) -> FxHashSet<String> {
        get(lang).iter().map(|s| s.to_string()).collect()
    }
}
