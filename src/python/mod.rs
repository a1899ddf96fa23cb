//! Python bindings via PyO3
//!
//! This module provides the Python interface for tweet_preprocess.

pub mod json;
pub mod native;

use pyo3::prelude::*;

/// Register all Python classes and functions
pub fn register_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Route `log` records to stderr, filtered by RUST_LOG
    let _ = env_logger::try_init();

    // Version
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    // Native interface
    m.add_class::<native::PyTweetPreprocessor>()?;
    m.add_function(wrap_pyfunction!(native::strip_links_mentions, m)?)?;
    m.add_function(wrap_pyfunction!(native::strip_punctuation, m)?)?;
    m.add_function(wrap_pyfunction!(native::strip_non_ascii, m)?)?;
    m.add_function(wrap_pyfunction!(native::lemmatize, m)?)?;
    m.add_function(wrap_pyfunction!(native::remove_stopwords, m)?)?;
    m.add_function(wrap_pyfunction!(native::get_stopwords, m)?)?;
    m.add_function(wrap_pyfunction!(native::clean_source, m)?)?;

    // JSON interface
    m.add_function(wrap_pyfunction!(json::preprocess_jsonl, m)?)?;
    m.add_function(wrap_pyfunction!(json::extract_entities_jsonl, m)?)?;

    Ok(())
}
