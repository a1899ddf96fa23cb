//! The five preprocessing stages, in pipeline order:
//!
//! 1. [`LinkMentionStripper`]: drop `@handle` and `http…` words
//! 2. [`PunctuationStripper`]: one character-class substitution, `#` kept
//! 3. [`NonAsciiStripper`]: drop non-ASCII characters, trim
//! 4. [`Lemmatizer`]: tag the phrase, reduce content words to base forms
//! 5. [`StopwordRemover`]: drop stopword tokens

use crate::nlp::tagger::PosTagger;
use crate::nlp::tokenizer::TweetTokenizer;
use crate::pipeline::traits::TextStage;
use crate::resources::LexicalResources;
use crate::types::TaggedToken;
use regex::Regex;
use std::sync::Arc;

/// Characters removed by [`PunctuationStripper`]. `#` is deliberately absent.
const PUNCTUATION_PATTERN: &str = r"[.:;()/!&'*+@$,?^\-\d]";

// ============================================================================
// Link / mention stripping
// ============================================================================

/// Removes whitespace-delimited words that start with `@`, `http` or `https`
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkMentionStripper;

impl LinkMentionStripper {
    pub fn new() -> Self {
        Self
    }

    fn is_link_or_mention(word: &str) -> bool {
        word.starts_with('@') || word.starts_with("http")
    }
}

impl TextStage for LinkMentionStripper {
    fn name(&self) -> &'static str {
        "strip_links_mentions"
    }

    fn apply(&self, text: &str) -> String {
        text.split_whitespace()
            .filter(|word| !Self::is_link_or_mention(word))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// ============================================================================
// Punctuation stripping
// ============================================================================

/// Removes `. : ; ( ) / ! & ' * + @ $ , ? ^ -` and digits across the whole
/// string. Never increases length.
#[derive(Debug, Clone)]
pub struct PunctuationStripper {
    pattern: Regex,
}

impl Default for PunctuationStripper {
    fn default() -> Self {
        Self::new()
    }
}

impl PunctuationStripper {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(PUNCTUATION_PATTERN).expect("Invalid punctuation regex"),
        }
    }
}

impl TextStage for PunctuationStripper {
    fn name(&self) -> &'static str {
        "strip_punctuation"
    }

    fn apply(&self, text: &str) -> String {
        self.pattern.replace_all(text, "").into_owned()
    }
}

// ============================================================================
// Non-ASCII stripping
// ============================================================================

/// Removes every character outside 7-bit ASCII, then trims the result
#[derive(Debug, Clone, Copy, Default)]
pub struct NonAsciiStripper;

impl NonAsciiStripper {
    pub fn new() -> Self {
        Self
    }
}

impl TextStage for NonAsciiStripper {
    fn name(&self) -> &'static str {
        "strip_non_ascii"
    }

    fn apply(&self, text: &str) -> String {
        let ascii: String = text.chars().filter(char::is_ascii).collect();
        ascii.trim().to_string()
    }
}

// ============================================================================
// Lemmatization
// ============================================================================

/// Tags a phrase as a whole, then reduces each content word to its lemma.
///
/// Output is the reduced tokens joined by single spaces, so original
/// spacing around punctuation is not reconstructed.
#[derive(Debug, Clone)]
pub struct Lemmatizer {
    tokenizer: TweetTokenizer,
    tagger: PosTagger,
    resources: Arc<LexicalResources>,
}

impl Lemmatizer {
    pub fn new(resources: Arc<LexicalResources>) -> Self {
        Self {
            tokenizer: TweetTokenizer::new(),
            tagger: PosTagger::new(),
            resources,
        }
    }

    /// Tag a phrase without reducing it
    pub fn tag(&self, text: &str) -> Vec<TaggedToken> {
        let tokens = self.tokenizer.tokenize(text);
        self.tagger.tag(&tokens[..], self.resources.lemma_rules())
    }

    /// Reduce an already tokenized phrase
    pub fn lemmatize_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        let rules = self.resources.lemma_rules();
        self.tagger
            .tag(tokens, rules)
            .into_iter()
            .map(|tagged| match tagged.pos.category() {
                Some(category) => rules.lemmatize(&tagged.text, category),
                None => tagged.text,
            })
            .collect()
    }
}

impl TextStage for Lemmatizer {
    fn name(&self) -> &'static str {
        "lemmatize"
    }

    fn apply(&self, text: &str) -> String {
        let tokens = self.tokenizer.tokenize(text);
        self.lemmatize_tokens(&tokens[..]).join(" ")
    }
}

// ============================================================================
// Stopword removal
// ============================================================================

/// Tokenizes and drops tokens found in the stopword set
#[derive(Debug, Clone)]
pub struct StopwordRemover {
    tokenizer: TweetTokenizer,
    resources: Arc<LexicalResources>,
}

impl StopwordRemover {
    pub fn new(resources: Arc<LexicalResources>) -> Self {
        Self {
            tokenizer: TweetTokenizer::new(),
            resources,
        }
    }

    /// Surviving tokens, in order
    pub fn filter(&self, text: &str) -> Vec<String> {
        let tokens = self.tokenizer.tokenize(text);
        self.resources.stopwords().filter_tokens(&tokens[..])
    }
}

impl TextStage for StopwordRemover {
    fn name(&self) -> &'static str {
        "remove_stopwords"
    }

    fn apply(&self, text: &str) -> String {
        self.filter(text).join(" ")
    }
}
