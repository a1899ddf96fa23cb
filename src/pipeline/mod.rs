//! Preprocessing pipeline: stages, the fixed composition, and batch driver.
//!
//! ## Submodules
//!
//! - [`traits`]: the [`TextStage`] trait every stage implements
//! - [`stages`]: the five stage implementations
//! - [`runner`]: [`TweetPreprocessor`], the stages in fixed order
//! - [`batch`]: [`BatchProcessor`], the pipeline over a tweet column

pub mod batch;
pub mod runner;
pub mod stages;
pub mod traits;

pub use batch::{BatchProcessor, BatchReport};
pub use runner::{TweetPreprocessor, STAGE_ORDER};
pub use stages::{
    Lemmatizer, LinkMentionStripper, NonAsciiStripper, PunctuationStripper, StopwordRemover,
};
pub use traits::TextStage;
