//! Pipeline runner: the fixed five-stage composition applied to one tweet.
//!
//! [`TweetPreprocessor`] lower-cases its input and threads it through
//!
//! 1. [`LinkMentionStripper`]
//! 2. [`PunctuationStripper`]
//! 3. [`NonAsciiStripper`]
//! 4. [`Lemmatizer`]
//! 5. [`StopwordRemover`]
//!
//! Each stage sees only the previous stage's output. The preprocessor holds
//! no mutable state, so one instance can serve any number of threads.

use crate::pipeline::stages::{
    Lemmatizer, LinkMentionStripper, NonAsciiStripper, PunctuationStripper, StopwordRemover,
};
use crate::pipeline::traits::TextStage;
use crate::resources::LexicalResources;
use std::sync::Arc;

/// Stage names in execution order
pub const STAGE_ORDER: [&str; 5] = [
    "strip_links_mentions",
    "strip_punctuation",
    "strip_non_ascii",
    "lemmatize",
    "remove_stopwords",
];

/// The full preprocessing pipeline
#[derive(Debug, Clone)]
pub struct TweetPreprocessor {
    links: LinkMentionStripper,
    punctuation: PunctuationStripper,
    non_ascii: NonAsciiStripper,
    lemmatizer: Lemmatizer,
    stopwords: StopwordRemover,
    resources: Arc<LexicalResources>,
}

impl TweetPreprocessor {
    /// Build a pipeline over shared lexical resources
    pub fn new(resources: Arc<LexicalResources>) -> Self {
        Self {
            links: LinkMentionStripper::new(),
            punctuation: PunctuationStripper::new(),
            non_ascii: NonAsciiStripper::new(),
            lemmatizer: Lemmatizer::new(Arc::clone(&resources)),
            stopwords: StopwordRemover::new(Arc::clone(&resources)),
            resources,
        }
    }

    /// Pipeline over the built-in English resources
    pub fn english() -> Self {
        Self::new(LexicalResources::english().shared())
    }

    /// The stages in execution order
    pub fn stages(&self) -> [&dyn TextStage; 5] {
        [
            &self.links,
            &self.punctuation,
            &self.non_ascii,
            &self.lemmatizer,
            &self.stopwords,
        ]
    }

    /// Preprocess one tweet. `None` short-circuits: no stage runs.
    pub fn process(&self, text: Option<&str>) -> Option<String> {
        text.map(|t| self.process_text(t))
    }

    /// Preprocess a tweet that is known to be present
    pub fn process_text(&self, text: &str) -> String {
        self.stages()
            .iter()
            .fold(text.to_lowercase(), |current, stage| {
                let next = stage.apply(&current);
                log::trace!("{}: {:?} -> {:?}", stage.name(), current, next);
                next
            })
    }

    /// Preprocess a tweet into its surviving tokens (bag of words)
    pub fn process_tokens(&self, text: &str) -> Vec<String> {
        let cleaned = self.stages()[..4]
            .iter()
            .fold(text.to_lowercase(), |current, stage| stage.apply(&current));
        self.stopwords.filter(&cleaned)
    }

    /// The lexical resources this pipeline reads
    pub fn resources(&self) -> &Arc<LexicalResources> {
        &self.resources
    }
}

impl Default for TweetPreprocessor {
    fn default() -> Self {
        Self::english()
    }
}
