//! Core types for tweet_preprocess
//!
//! This module defines the tag sets used by the lemmatizer, the token shape
//! classification used by the tweet tokenizer, and the configuration structs.

use crate::errors::{PreprocessError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ============================================================================
// Part-of-speech tags
// ============================================================================

/// Coarse universal part-of-speech tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosTag {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Adposition,
    Conjunction,
    Numeral,
    Particle,
    Punctuation,
    Other,
}

impl PosTag {
    /// The lemmatizable category for this tag, if any.
    ///
    /// Pronouns, function words, punctuation and `X` (hashtags, mentions,
    /// URLs) have no category and are never reduced.
    pub fn category(&self) -> Option<WordCategory> {
        match self {
            PosTag::Noun => Some(WordCategory::Noun),
            PosTag::Verb => Some(WordCategory::Verb),
            PosTag::Adjective => Some(WordCategory::Adjective),
            PosTag::Adverb => Some(WordCategory::Adverb),
            _ => None,
        }
    }

    /// Check if this tag marks a closed-class (function) word
    pub fn is_function_word(&self) -> bool {
        matches!(
            self,
            PosTag::Pronoun
                | PosTag::Determiner
                | PosTag::Adposition
                | PosTag::Conjunction
                | PosTag::Particle
        )
    }

    /// Parse from a universal tag string (NLTK or UD spelling)
    pub fn from_universal(tag: &str) -> Self {
        match tag.to_uppercase().as_str() {
            "NOUN" | "PROPN" => PosTag::Noun,
            "VERB" | "AUX" => PosTag::Verb,
            "ADJ" => PosTag::Adjective,
            "ADV" => PosTag::Adverb,
            "PRON" => PosTag::Pronoun,
            "DET" => PosTag::Determiner,
            "ADP" => PosTag::Adposition,
            "CONJ" | "CCONJ" | "SCONJ" => PosTag::Conjunction,
            "NUM" => PosTag::Numeral,
            "PRT" | "PART" => PosTag::Particle,
            "." | "PUNCT" => PosTag::Punctuation,
            _ => PosTag::Other,
        }
    }

    /// Get the universal tag string for this enum.
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::Noun => "NOUN",
            PosTag::Verb => "VERB",
            PosTag::Adjective => "ADJ",
            PosTag::Adverb => "ADV",
            PosTag::Pronoun => "PRON",
            PosTag::Determiner => "DET",
            PosTag::Adposition => "ADP",
            PosTag::Conjunction => "CONJ",
            PosTag::Numeral => "NUM",
            PosTag::Particle => "PRT",
            PosTag::Punctuation => ".",
            PosTag::Other => "X",
        }
    }
}

/// Grammatical category used to pick lemmatization rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordCategory {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl WordCategory {
    /// All categories, in lookup order
    pub const ALL: [WordCategory; 4] = [
        WordCategory::Noun,
        WordCategory::Verb,
        WordCategory::Adjective,
        WordCategory::Adverb,
    ];

    /// WordNet-style single letter code (`n`, `v`, `a`, `r`)
    pub fn code(&self) -> char {
        match self {
            WordCategory::Noun => 'n',
            WordCategory::Verb => 'v',
            WordCategory::Adjective => 'a',
            WordCategory::Adverb => 'r',
        }
    }

    /// Parse a WordNet-style code. Satellite adjectives (`s`) map to adjectives.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "n" | "noun" => Some(WordCategory::Noun),
            "v" | "verb" => Some(WordCategory::Verb),
            "a" | "s" | "adj" => Some(WordCategory::Adjective),
            "r" | "adv" => Some(WordCategory::Adverb),
            _ => None,
        }
    }
}

/// A token paired with its part-of-speech tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub text: String,
    pub pos: PosTag,
}

impl TaggedToken {
    pub fn new(text: impl Into<String>, pos: PosTag) -> Self {
        Self {
            text: text.into(),
            pos,
        }
    }
}

// ============================================================================
// Token shape
// ============================================================================

/// Shape of a token, derived from its leading characters.
///
/// Tokens carry no tags through the pipeline; anything that needs to know
/// whether a token is a hashtag or a link asks for its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenShape {
    Hashtag,
    Mention,
    Url,
    Word,
    Punctuation,
}

impl TokenShape {
    /// Classify a token. Prefix matching is case-sensitive.
    pub fn of(token: &str) -> Self {
        let has_body = token.chars().count() > 1;
        if token.starts_with('#') && has_body {
            TokenShape::Hashtag
        } else if token.starts_with('@') && has_body {
            TokenShape::Mention
        } else if token.starts_with("http") {
            TokenShape::Url
        } else if token.chars().any(|c| c.is_alphanumeric()) {
            TokenShape::Word
        } else {
            TokenShape::Punctuation
        }
    }

    /// Hashtags, mentions and URLs are never split or reduced
    pub fn is_atomic(&self) -> bool {
        matches!(
            self,
            TokenShape::Hashtag | TokenShape::Mention | TokenShape::Url
        )
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Runtime options for the batch driver
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchOptions {
    /// Upper bound on worker threads. `None` uses the global Rayon pool.
    pub max_threads: Option<usize>,

    /// Process rows on the calling thread only. Overrides `max_threads`.
    pub single_thread: bool,

    /// Stop at the first malformed row and return its error instead of
    /// reporting it and moving on
    pub fail_fast: bool,
}

impl BatchOptions {
    /// Resolve the effective thread count.
    ///
    /// - `single_thread == true` → `Some(1)`
    /// - `max_threads == Some(n)` → `Some(n)`
    /// - otherwise → `None` (use Rayon default)
    pub fn effective_threads(&self) -> Option<usize> {
        if self.single_thread {
            Some(1)
        } else {
            self.max_threads
        }
    }
}

/// Configuration for building lexical resources and running batches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessConfig {
    /// Language code for the built-in stopword list
    pub language: String,
    /// Replace the built-in stopword list with a one-word-per-line file
    pub stopwords_path: Option<PathBuf>,
    /// Words added to the stopword set
    pub extra_stopwords: Vec<String>,
    /// Words removed from the stopword set
    pub keep_words: Vec<String>,
    /// Extra lemma exceptions (`category<TAB>inflected<TAB>lemma`)
    pub lemma_exceptions_path: Option<PathBuf>,
    /// Known base forms; enables vocabulary-checked lemmatization
    pub lemma_vocabulary_path: Option<PathBuf>,
    /// Batch runtime options
    pub batch: BatchOptions,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            stopwords_path: None,
            extra_stopwords: Vec::new(),
            keep_words: Vec::new(),
            lemma_exceptions_path: None,
            lemma_vocabulary_path: None,
            batch: BatchOptions::default(),
        }
    }
}

impl PreprocessConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            PreprocessError::invalid_config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json_str(&contents)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.language.trim().is_empty() && self.stopwords_path.is_none() {
            return Err(PreprocessError::invalid_config(
                "language must be set when no stopwords_path is given",
            ));
        }
        if self.batch.max_threads == Some(0) {
            return Err(PreprocessError::invalid_config(
                "batch.max_threads must be at least 1",
            ));
        }
        Ok(())
    }

    /// Set the stopword language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Load stopwords from a file instead of the built-in list
    pub fn with_stopwords_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.stopwords_path = Some(path.into());
        self
    }

    /// Add words to the stopword set
    pub fn with_extra_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_stopwords.extend(words.into_iter().map(Into::into));
        self
    }

    /// Remove words from the stopword set
    pub fn with_keep_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keep_words.extend(words.into_iter().map(Into::into));
        self
    }

    /// Load additional lemma exceptions from a file
    pub fn with_lemma_exceptions_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.lemma_exceptions_path = Some(path.into());
        self
    }

    /// Load a base-form vocabulary from a file
    pub fn with_lemma_vocabulary_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.lemma_vocabulary_path = Some(path.into());
        self
    }

    /// Set batch runtime options
    pub fn with_batch_options(mut self, batch: BatchOptions) -> Self {
        self.batch = batch;
        self
    }
}
