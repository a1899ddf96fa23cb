//! Native Python interface
//!
//! Direct Python classes and functions working on `str` / `None` values.

use crate::errors::PreprocessError;
use crate::nlp::stopwords::StopwordSet;
use crate::pipeline::stages::{
    Lemmatizer, LinkMentionStripper, NonAsciiStripper, PunctuationStripper, StopwordRemover,
};
use crate::pipeline::{BatchProcessor, TextStage, TweetPreprocessor};
use crate::resources::LexicalResources;
use crate::types::{BatchOptions, PreprocessConfig};
use pyo3::prelude::*;

pub(crate) fn to_py_err(err: PreprocessError) -> PyErr {
    pyo3::exceptions::PyValueError::new_err(err.to_string())
}

/// Tweet preprocessing pipeline
#[pyclass(name = "TweetPreprocessor")]
pub struct PyTweetPreprocessor {
    inner: TweetPreprocessor,
    options: BatchOptions,
}

#[pymethods]
impl PyTweetPreprocessor {
    #[new]
    #[pyo3(signature = (
        language="en",
        extra_stopwords=None,
        keep_words=None,
        stopwords_path=None,
        max_threads=None,
        config_json=None
    ))]
    fn new(
        language: &str,
        extra_stopwords: Option<Vec<String>>,
        keep_words: Option<Vec<String>>,
        stopwords_path: Option<String>,
        max_threads: Option<usize>,
        config_json: Option<&str>,
    ) -> PyResult<Self> {
        let mut config = match config_json {
            Some(json) => PreprocessConfig::from_json_str(json).map_err(to_py_err)?,
            None => PreprocessConfig::default().with_language(language),
        };
        if let Some(words) = extra_stopwords {
            config = config.with_extra_stopwords(words);
        }
        if let Some(words) = keep_words {
            config = config.with_keep_words(words);
        }
        if let Some(path) = stopwords_path {
            config = config.with_stopwords_path(path);
        }
        if max_threads.is_some() {
            config.batch.max_threads = max_threads;
        }

        let resources = LexicalResources::load(&config).map_err(to_py_err)?;
        Ok(Self {
            inner: TweetPreprocessor::new(resources.shared()),
            options: config.batch,
        })
    }

    /// Preprocess one tweet; `None` passes through
    #[pyo3(signature = (text))]
    fn process(&self, text: Option<&str>) -> Option<String> {
        self.inner.process(text)
    }

    /// Preprocess one tweet into its surviving tokens
    #[pyo3(signature = (text))]
    fn process_tokens(&self, text: &str) -> Vec<String> {
        self.inner.process_tokens(text)
    }

    /// Preprocess a list of tweets in parallel, preserving order
    #[pyo3(signature = (texts))]
    fn process_batch(&self, py: Python<'_>, texts: Vec<Option<String>>) -> PyResult<Vec<Option<String>>> {
        let processor = BatchProcessor::new(self.inner.clone(), self.options.clone());
        py.allow_threads(|| processor.process_texts(&texts))
            .and_then(|report| report.into_strict())
            .map_err(to_py_err)
    }

    /// Names of the stages, in execution order
    fn stage_names(&self) -> Vec<&'static str> {
        self.inner.stages().iter().map(|s| s.name()).collect()
    }

    fn __repr__(&self) -> String {
        format!(
            "TweetPreprocessor(stopwords={}, lemma_exceptions={})",
            self.inner.resources().stopwords().len(),
            self.inner.resources().lemma_rules().exception_count()
        )
    }
}

/// Remove words starting with `@` or `http`
#[pyfunction]
#[pyo3(signature = (text))]
pub fn strip_links_mentions(text: Option<&str>) -> Option<String> {
    LinkMentionStripper::new().apply_opt(text)
}

/// Remove punctuation and digits, keeping `#`
#[pyfunction]
#[pyo3(signature = (text))]
pub fn strip_punctuation(text: Option<&str>) -> Option<String> {
    PunctuationStripper::new().apply_opt(text)
}

/// Remove non-ASCII characters and trim
#[pyfunction]
#[pyo3(signature = (text))]
pub fn strip_non_ascii(text: Option<&str>) -> Option<String> {
    NonAsciiStripper::new().apply_opt(text)
}

/// Lemmatize with the built-in English rules
#[pyfunction]
#[pyo3(signature = (text))]
pub fn lemmatize(text: Option<&str>) -> Option<String> {
    Lemmatizer::new(LexicalResources::english().shared()).apply_opt(text)
}

/// Remove stopwords of a built-in language list
#[pyfunction]
#[pyo3(signature = (text, language = "en"))]
pub fn remove_stopwords(text: Option<&str>, language: &str) -> PyResult<Option<String>> {
    let config = PreprocessConfig::default().with_language(language);
    let resources = LexicalResources::load(&config).map_err(to_py_err)?;
    Ok(StopwordRemover::new(resources.shared()).apply_opt(text))
}

/// Get the built-in stopword list for a language, sorted.
#[pyfunction]
#[pyo3(signature = (language = "en"))]
pub fn get_stopwords(language: &str) -> PyResult<Vec<String>> {
    StopwordSet::for_language(language)
        .map(|set| set.to_sorted_vec())
        .map_err(to_py_err)
}

/// Anchor text of a tweet `source` field
#[pyfunction]
#[pyo3(signature = (source))]
pub fn clean_source(source: &str) -> Option<String> {
    crate::nlp::entities::clean_source(source)
}
