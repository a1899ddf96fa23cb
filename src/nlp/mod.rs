//! Natural Language Processing components
//!
//! This module provides tweet-aware tokenization, part-of-speech tagging,
//! lemma rules, stopword sets and tweet entity extraction.

pub mod entities;
pub mod lemma_rules;
pub mod stopwords;
pub mod tagger;
pub mod tokenizer;
