//! Lexical resources shared by every pipeline instance
//!
//! The stopword set and the lemma rules are built once, then handed to
//! pipelines behind an `Arc`. Nothing here is looked up globally and nothing
//! is mutated after construction, so sharing across threads needs no locks.

use crate::errors::Result;
use crate::nlp::lemma_rules::LemmaRules;
use crate::nlp::stopwords::StopwordSet;
use crate::types::PreprocessConfig;
use std::sync::Arc;

/// Immutable stopword set and lemma rules
#[derive(Debug, Clone)]
pub struct LexicalResources {
    stopwords: StopwordSet,
    lemma_rules: LemmaRules,
}

impl LexicalResources {
    /// Assemble resources from already-built parts
    pub fn new(stopwords: StopwordSet, lemma_rules: LemmaRules) -> Self {
        Self {
            stopwords,
            lemma_rules,
        }
    }

    /// Built-in English stopwords and lemma rules
    pub fn english() -> Self {
        Self::new(StopwordSet::default(), LemmaRules::english())
    }

    /// Build resources from configuration.
    ///
    /// Any resource that cannot be loaded fails the whole call with
    /// `ResourceUnavailable`; the pipeline cannot run without both parts.
    pub fn load(config: &PreprocessConfig) -> Result<Self> {
        config.validate()?;

        let mut stopwords = match &config.stopwords_path {
            Some(path) => StopwordSet::from_file(path)?,
            None => StopwordSet::for_language(&config.language)?,
        };
        stopwords.extend(&config.extra_stopwords);
        stopwords.remove(&config.keep_words);

        let mut lemma_rules = LemmaRules::english();
        if let Some(path) = &config.lemma_exceptions_path {
            lemma_rules.load_exceptions(path)?;
        }
        if let Some(path) = &config.lemma_vocabulary_path {
            lemma_rules.load_vocabulary(path)?;
        }

        log::info!(
            "Lexical resources loaded: {} stopwords ({}), {} lemma exceptions, vocabulary: {}",
            stopwords.len(),
            config
                .stopwords_path
                .as_ref()
                .map_or_else(|| config.language.clone(), |p| p.display().to_string()),
            lemma_rules.exception_count(),
            lemma_rules.has_vocabulary()
        );

        Ok(Self::new(stopwords, lemma_rules))
    }

    /// Wrap in an `Arc` for sharing between pipelines
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// The stopword set
    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    /// The lemma rules
    pub fn lemma_rules(&self) -> &LemmaRules {
        &self.lemma_rules
    }
}

impl Default for LexicalResources {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PreprocessError;
    use crate::types::WordCategory;

    #[test]
    fn test_english_resources() {
        let resources = LexicalResources::english();
        assert!(resources.stopwords().contains("the"));
        assert_eq!(
            resources.lemma_rules().lemmatize("made", WordCategory::Verb),
            "make"
        );
    }

    #[test]
    fn test_load_applies_extra_and_keep_words() {
        let config = PreprocessConfig::default()
            .with_extra_stopwords(["rt", "amp"])
            .with_keep_words(["not"]);
        let resources = LexicalResources::load(&config).unwrap();

        assert!(resources.stopwords().contains("rt"));
        assert!(resources.stopwords().contains("amp"));
        assert!(!resources.stopwords().contains("not"));
        assert!(resources.stopwords().contains("the"));
    }

    #[test]
    fn test_load_unknown_language_fails() {
        let config = PreprocessConfig::default().with_language("klingon");
        let err = LexicalResources::load(&config).unwrap_err();
        assert!(matches!(err, PreprocessError::ResourceUnavailable { .. }));
    }

    #[test]
    fn test_load_missing_lemma_file_fails() {
        let config =
            PreprocessConfig::default().with_lemma_exceptions_path("/no/such/lemma/file.tsv");
        let err = LexicalResources::load(&config).unwrap_err();
        assert!(matches!(err, PreprocessError::ResourceUnavailable { .. }));
    }

    #[test]
    fn test_load_stopwords_file_overrides_language() {
        let path = std::env::temp_dir().join(format!(
            "tweet_preprocess_resources_{}.txt",
            std::process::id()
        ));
        std::fs::write(&path, "rt\nvia\n").unwrap();

        let config = PreprocessConfig::default()
            .with_language("")
            .with_stopwords_path(&path);
        let resources = LexicalResources::load(&config).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(resources.stopwords().len(), 2);
        assert!(!resources.stopwords().contains("the"));
    }
}
