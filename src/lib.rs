//! # tweet_preprocess
//!
//! Tweet text normalization for downstream text analysis.
//!
//! A raw tweet body goes through a fixed pipeline: lower-casing, removal of
//! links and @-mentions, punctuation and digit stripping, non-ASCII
//! stripping, part-of-speech-aware lemmatization, and stopword removal. The
//! result is a clean string (or token list) suitable for bag-of-words models.
//!
//! ## Features
//!
//! - **Tweet-aware**: hashtags, mentions and URLs survive tokenization whole
//! - **Shared resources**: stopwords and lemma rules are loaded once and
//!   shared across threads without locks
//! - **Batch processing**: whole tweet columns in parallel, with per-row
//!   error reporting
//! - **Python bindings**: optional, via PyO3
//!
//! ```
//! use tweet_preprocess::TweetPreprocessor;
//!
//! let preprocessor = TweetPreprocessor::english();
//! let out = preprocessor.process(Some("The PLA conducted drills around #Taiwan"));
//! assert!(out.unwrap().contains("#taiwan"));
//! ```

pub mod errors;
pub mod nlp;
pub mod pipeline;
pub mod resources;
pub mod table;
pub mod types;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use errors::{PreprocessError, Result};
pub use types::{BatchOptions, PosTag, PreprocessConfig, TaggedToken, TokenShape, WordCategory};

// Re-export main functionality
pub use nlp::entities::{clean_source, SourceCleaner, TweetEntities};
pub use nlp::lemma_rules::LemmaRules;
pub use nlp::stopwords::StopwordSet;
pub use nlp::tagger::PosTagger;
pub use nlp::tokenizer::TweetTokenizer;
pub use pipeline::{
    BatchProcessor, BatchReport, Lemmatizer, LinkMentionStripper, NonAsciiStripper,
    PunctuationStripper, StopwordRemover, TextStage, TweetPreprocessor,
};
pub use resources::LexicalResources;
pub use table::TweetTable;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Initialize the Python module
#[cfg(feature = "python")]
#[pymodule]
fn _rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python::register_module(m)?;
    Ok(())
}
