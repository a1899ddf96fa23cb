//! Tweet-aware tokenization
//!
//! Whitespace is the primary delimiter. Hashtags, @-mentions and URLs are
//! matched first and kept whole; the text between them is segmented on
//! UAX #29 word boundaries so punctuation splits off ordinary words while
//! contractions like `don't` stay intact.

use crate::types::TokenShape;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

/// Tokens that must never be split internally
const ATOMIC_PATTERN: &str = r"https?://\S+|[@#]\w+";

/// A tokenizer that keeps hashtags, mentions and URLs atomic
#[derive(Debug, Clone)]
pub struct TweetTokenizer {
    atomic: Regex,
}

impl Default for TweetTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TweetTokenizer {
    /// Create a new tokenizer
    pub fn new() -> Self {
        Self {
            atomic: Regex::new(ATOMIC_PATTERN).expect("Invalid atomic token regex"),
        }
    }

    /// Split text into tokens.
    ///
    /// Total and deterministic: the empty string yields no tokens, and no
    /// token is empty or contains whitespace.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();

        for chunk in text.split_whitespace() {
            let mut cursor = 0;
            for m in self.atomic.find_iter(chunk) {
                push_segments(&chunk[cursor..m.start()], &mut tokens);
                tokens.push(m.as_str().to_string());
                cursor = m.end();
            }
            push_segments(&chunk[cursor..], &mut tokens);
        }

        tokens
    }

    /// Tokenize and classify each token by shape
    pub fn tokenize_with_shapes(&self, text: &str) -> Vec<(String, TokenShape)> {
        self.tokenize(text)
            .into_iter()
            .map(|token| {
                let shape = TokenShape::of(&token);
                (token, shape)
            })
            .collect()
    }
}

/// Segment a whitespace-free piece on word boundaries, merging runs of the
/// same punctuation character (`...`, `!!`).
fn push_segments(piece: &str, tokens: &mut Vec<String>) {
    if piece.is_empty() {
        return;
    }

    let mut local: Vec<String> = Vec::new();
    for segment in piece.split_word_bounds() {
        if segment.trim().is_empty() {
            continue;
        }
        match local.last_mut() {
            Some(prev) if extends_punct_run(prev, segment) => prev.push_str(segment),
            _ => local.push(segment.to_string()),
        }
    }
    tokens.extend(local);
}

fn extends_punct_run(prev: &str, segment: &str) -> bool {
    let mut chars = segment.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return false;
    };
    !c.is_alphanumeric() && prev.chars().all(|p| p == c)
}
